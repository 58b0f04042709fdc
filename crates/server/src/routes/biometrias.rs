use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use models::biometria;
use service::biometria_service;

use crate::errors::ApiError;
use crate::routes::auth::ServerState;

#[derive(Debug, Serialize)]
pub struct BiometriaOut {
    pub id: i32,
    #[serde(rename = "userId")]
    pub user_id: i32,
    #[serde(rename = "tipoBiometria")]
    pub tipo_biometria: String,
    #[serde(rename = "dadosBiometricos")]
    pub dados_biometricos: String,
    pub motivo: Option<String>,
}

impl From<biometria::Model> for BiometriaOut {
    fn from(m: biometria::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            tipo_biometria: m.tipo_biometria,
            dados_biometricos: m.dados_biometricos,
            motivo: m.motivo,
        }
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<BiometriaOut>>, ApiError> {
    let rows = biometria_service::list_biometrias(&state.db).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<BiometriaOut>, ApiError> {
    let found = biometria_service::get_biometria(&state.db, id).await?;
    Ok(Json(found.into()))
}

pub async fn list_by_user(
    State(state): State<ServerState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<BiometriaOut>>, ApiError> {
    let rows = biometria_service::list_biometrias_by_user(&state.db, user_id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
