use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::cliente;
use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "documento")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub tipodocumento: String,
    pub numerodocumento: String,
    pub validade: String,
    pub status: String,
    pub arquivo_documento: String,
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

#[allow(clippy::too_many_arguments)]
pub async fn create(
    db: &DatabaseConnection,
    user_id: i32,
    tipodocumento: &str,
    numerodocumento: &str,
    validade: &str,
    status: &str,
    arquivo_documento: &str,
    motivo: Option<String>,
) -> Result<Model, errors::ModelError> {
    if tipodocumento.trim().is_empty() {
        return Err(errors::ModelError::Validation("tipodocumento obrigatorio".into()));
    }
    if numerodocumento.trim().is_empty() {
        return Err(errors::ModelError::Validation("numerodocumento obrigatorio".into()));
    }
    let now = Utc::now().into();
    let am = ActiveModel {
        user_id: Set(user_id),
        tipodocumento: Set(tipodocumento.to_string()),
        numerodocumento: Set(numerodocumento.to_string()),
        validade: Set(validade.to_string()),
        status: Set(status.to_string()),
        arquivo_documento: Set(arquivo_documento.to_string()),
        motivo: Set(motivo),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
