use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde::Deserialize;
use tracing::info;

use models::documento;

use crate::errors::ServiceError;
use crate::repo;

const NOT_FOUND_MSG: &str = "Nenhum documento encontrado";

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDocumento {
    #[serde(rename = "userId")]
    pub user_id: i32,
    pub tipodocumento: String,
    pub numerodocumento: String,
    pub validade: String,
    pub status: String,
    #[serde(rename = "arquivoDocumento")]
    pub arquivo_documento: String,
    #[serde(default)]
    pub motivo: Option<String>,
}

/// Partial update: every field optional, absent fields stay untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDocumento {
    #[serde(default)]
    pub tipodocumento: Option<String>,
    #[serde(default)]
    pub numerodocumento: Option<String>,
    #[serde(default)]
    pub validade: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "arquivoDocumento")]
    pub arquivo_documento: Option<String>,
    #[serde(default)]
    pub motivo: Option<String>,
}

pub async fn create_documento(
    db: &DatabaseConnection,
    input: CreateDocumento,
) -> Result<documento::Model, ServiceError> {
    let created = documento::create(
        db,
        input.user_id,
        &input.tipodocumento,
        &input.numerodocumento,
        &input.validade,
        &input.status,
        &input.arquivo_documento,
        input.motivo,
    )
    .await?;
    info!(documento_id = created.id, user_id = created.user_id, "documento created");
    Ok(created)
}

pub async fn list_documentos(db: &DatabaseConnection) -> Result<Vec<documento::Model>, ServiceError> {
    let all = repo::find_all::<documento::Entity>(db).await?;
    if all.is_empty() {
        return Err(ServiceError::NotFound(NOT_FOUND_MSG.into()));
    }
    Ok(all)
}

pub async fn get_documento(db: &DatabaseConnection, id: i32) -> Result<documento::Model, ServiceError> {
    repo::find_by_id::<documento::Entity>(db, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(NOT_FOUND_MSG.into()))
}

pub async fn update_documento(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateDocumento,
) -> Result<documento::Model, ServiceError> {
    let found = repo::find_by_id::<documento::Entity>(db, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(NOT_FOUND_MSG.into()))?;
    let mut am: documento::ActiveModel = found.into();
    if let Some(tipodocumento) = input.tipodocumento {
        am.tipodocumento = Set(tipodocumento);
    }
    if let Some(numerodocumento) = input.numerodocumento {
        am.numerodocumento = Set(numerodocumento);
    }
    if let Some(validade) = input.validade {
        am.validade = Set(validade);
    }
    if let Some(status) = input.status {
        am.status = Set(status);
    }
    if let Some(arquivo) = input.arquivo_documento {
        am.arquivo_documento = Set(arquivo);
    }
    if let Some(motivo) = input.motivo {
        am.motivo = Set(Some(motivo));
    }
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn remove_documento(db: &DatabaseConnection, id: i32) -> Result<documento::Model, ServiceError> {
    let found = repo::find_by_id::<documento::Entity>(db, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(NOT_FOUND_MSG.into()))?;
    let deleted = repo::delete_by_id::<documento::Entity>(db, id).await?;
    if deleted == 0 {
        return Err(ServiceError::NotFound(NOT_FOUND_MSG.into()));
    }
    Ok(found)
}
