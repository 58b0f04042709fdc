use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set, SqlErr};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cliente")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cpf: String,
    pub nome: String,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub linkdownload: Option<String>,
    pub statusdownload: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Documento,
    Biometria,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Documento => Entity::has_many(crate::documento::Entity).into(),
            Relation::Biometria => Entity::has_many(crate::biometria::Entity).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_cpf(cpf: &str) -> Result<(), errors::ModelError> {
    if cpf.trim().is_empty() {
        return Err(errors::ModelError::Validation("cpf obrigatorio".into()));
    }
    Ok(())
}

pub fn validate_nome(nome: &str) -> Result<(), errors::ModelError> {
    if nome.trim().is_empty() {
        return Err(errors::ModelError::Validation("nome obrigatorio".into()));
    }
    Ok(())
}

/// Insert a new cliente. The `cpf` column carries a unique constraint, so a
/// concurrent duplicate surfaces here as `Duplicate` instead of a second row.
pub async fn create(
    db: &DatabaseConnection,
    cpf: &str,
    nome: &str,
    email: Option<String>,
    telefone: Option<String>,
) -> Result<Model, errors::ModelError> {
    validate_cpf(cpf)?;
    validate_nome(nome)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        cpf: Set(cpf.to_string()),
        nome: Set(nome.to_string()),
        email: Set(email),
        telefone: Set(telefone),
        linkdownload: Set(None),
        statusdownload: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            errors::ModelError::Duplicate("CPF ja cadastrado".into())
        }
        _ => errors::ModelError::Db(e.to_string()),
    })
}

pub async fn hard_delete(db: &DatabaseConnection, id: i32) -> Result<(), errors::ModelError> {
    Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}
