use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use models::documento;
use service::documento_service::{self, CreateDocumento, UpdateDocumento};

use crate::errors::ApiError;
use crate::routes::auth::ServerState;

#[derive(Debug, Serialize)]
pub struct DocumentoOut {
    pub id: i32,
    #[serde(rename = "userId")]
    pub user_id: i32,
    pub tipodocumento: String,
    pub numerodocumento: String,
    pub validade: String,
    pub status: String,
    #[serde(rename = "arquivoDocumento")]
    pub arquivo_documento: String,
    pub motivo: Option<String>,
}

impl From<documento::Model> for DocumentoOut {
    fn from(m: documento::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            tipodocumento: m.tipodocumento,
            numerodocumento: m.numerodocumento,
            validade: m.validade,
            status: m.status,
            arquivo_documento: m.arquivo_documento,
            motivo: m.motivo,
        }
    }
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateDocumento>,
) -> Result<Json<DocumentoOut>, ApiError> {
    let created = documento_service::create_documento(&state.db, input).await?;
    Ok(Json(created.into()))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<DocumentoOut>>, ApiError> {
    let rows = documento_service::list_documentos(&state.db).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<DocumentoOut>, ApiError> {
    let found = documento_service::get_documento(&state.db, id).await?;
    Ok(Json(found.into()))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateDocumento>,
) -> Result<Json<DocumentoOut>, ApiError> {
    let updated = documento_service::update_documento(&state.db, id, input).await?;
    Ok(Json(updated.into()))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<DocumentoOut>, ApiError> {
    let removed = documento_service::remove_documento(&state.db, id).await?;
    Ok(Json(removed.into()))
}
