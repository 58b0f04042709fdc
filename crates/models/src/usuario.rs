use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set, SqlErr};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "usuario")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub email: String,
    pub nome: String,
    pub senha_hash: String,
    pub senha_algorithm: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations defined here")
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_email(email: &str) -> Result<(), errors::ModelError> {
    if !email.contains('@') {
        return Err(errors::ModelError::Validation("email invalido".into()));
    }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    email: &str,
    nome: &str,
    senha_hash: &str,
    senha_algorithm: &str,
) -> Result<Model, errors::ModelError> {
    validate_email(email)?;
    if nome.trim().is_empty() {
        return Err(errors::ModelError::Validation("nome obrigatorio".into()));
    }
    if senha_hash.trim().is_empty() {
        return Err(errors::ModelError::Validation("senha hash obrigatorio".into()));
    }
    let now = Utc::now().into();
    let am = ActiveModel {
        email: Set(email.to_string()),
        nome: Set(nome.to_string()),
        senha_hash: Set(senha_hash.to_string()),
        senha_algorithm: Set(senha_algorithm.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            errors::ModelError::Duplicate("Email ja cadastrado".into())
        }
        _ => errors::ModelError::Db(e.to_string()),
    })
}

pub async fn set_senha(
    db: &DatabaseConnection,
    id: i32,
    senha_hash: &str,
    senha_algorithm: &str,
) -> Result<Model, errors::ModelError> {
    let found = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?
        .ok_or_else(|| errors::ModelError::Validation("usuario nao encontrado".into()))?;
    let mut am: ActiveModel = found.into();
    am.senha_hash = Set(senha_hash.to_string());
    am.senha_algorithm = Set(senha_algorithm.to_string());
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn hard_delete(db: &DatabaseConnection, id: i32) -> Result<(), errors::ModelError> {
    Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}
