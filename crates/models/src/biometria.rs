use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::cliente;
use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "biometria")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub tipo_biometria: String,
    pub dados_biometricos: String,
    pub motivo: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Cliente,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Cliente => Entity::belongs_to(cliente::Entity)
                .from(Column::UserId)
                .to(cliente::Column::Id)
                .into(),
        }
    }
}

impl Related<cliente::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cliente.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Biometric rows arrive through the capture pipeline, not the HTTP API;
// this helper exists for that pipeline and for tests.
pub async fn create(
    db: &DatabaseConnection,
    user_id: i32,
    tipo_biometria: &str,
    dados_biometricos: &str,
    motivo: Option<String>,
) -> Result<Model, errors::ModelError> {
    if tipo_biometria.trim().is_empty() {
        return Err(errors::ModelError::Validation("tipoBiometria obrigatorio".into()));
    }
    let now = Utc::now().into();
    let am = ActiveModel {
        user_id: Set(user_id),
        tipo_biometria: Set(tipo_biometria.to_string()),
        dados_biometricos: Set(dados_biometricos.to_string()),
        motivo: Set(motivo),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
