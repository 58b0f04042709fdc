use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, Set, SqlErr};
use sea_orm::ActiveModelTrait;
use serde::Deserialize;
use tracing::info;

use models::cliente;

use crate::download::{self, DownloadConfig};
use crate::errors::ServiceError;
use crate::repo::{self, Pagination};

/// Value written to `statusdownload` when the capability link is opened.
pub const LINK_ACCESSED_STATUS: &str = "ACESSOU LINK";

const NOT_FOUND_MSG: &str = "Nenhum cliente encontrado";

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCliente {
    pub cpf: String,
    pub nome: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telefone: Option<String>,
}

/// Partial update: only fields present in the payload change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCliente {
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telefone: Option<String>,
}

pub async fn create_cliente(
    db: &DatabaseConnection,
    input: CreateCliente,
) -> Result<cliente::Model, ServiceError> {
    if let Some(email) = &input.email {
        if !email.contains('@') {
            return Err(ServiceError::Validation("email invalido".into()));
        }
    }
    let created = cliente::create(db, &input.cpf, &input.nome, input.email, input.telefone).await?;
    info!(cliente_id = created.id, "cliente created");
    Ok(created)
}

/// List every cliente. An empty table is reported as not-found, which the
/// HTTP layer turns into a 404 with "Nenhum cliente encontrado".
pub async fn list_clientes(db: &DatabaseConnection) -> Result<Vec<cliente::Model>, ServiceError> {
    let all = repo::find_all::<cliente::Entity>(db).await?;
    if all.is_empty() {
        return Err(ServiceError::NotFound(NOT_FOUND_MSG.into()));
    }
    Ok(all)
}

pub async fn list_clientes_paginated(
    db: &DatabaseConnection,
    pagination: Pagination,
) -> Result<Vec<cliente::Model>, ServiceError> {
    let (page_idx, per_page) = pagination.normalize();
    let page = cliente::Entity::find()
        .paginate(db, per_page)
        .fetch_page(page_idx)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if page.is_empty() {
        return Err(ServiceError::NotFound(NOT_FOUND_MSG.into()));
    }
    Ok(page)
}

pub async fn get_cliente(db: &DatabaseConnection, id: i32) -> Result<cliente::Model, ServiceError> {
    repo::find_by_id::<cliente::Entity>(db, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(NOT_FOUND_MSG.into()))
}

pub async fn get_cliente_by_cpf(
    db: &DatabaseConnection,
    cpf: &str,
) -> Result<cliente::Model, ServiceError> {
    cliente::Entity::find()
        .filter(cliente::Column::Cpf.eq(cpf))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::NotFound(NOT_FOUND_MSG.into()))
}

pub async fn update_cliente(
    db: &DatabaseConnection,
    id: i32,
    input: UpdateCliente,
) -> Result<cliente::Model, ServiceError> {
    let found = repo::find_by_id::<cliente::Entity>(db, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(NOT_FOUND_MSG.into()))?;
    let mut am: cliente::ActiveModel = found.into();
    if let Some(cpf) = input.cpf {
        cliente::validate_cpf(&cpf)?;
        am.cpf = Set(cpf);
    }
    if let Some(nome) = input.nome {
        cliente::validate_nome(&nome)?;
        am.nome = Set(nome);
    }
    if let Some(email) = input.email {
        am.email = Set(Some(email));
    }
    if let Some(telefone) = input.telefone {
        am.telefone = Set(Some(telefone));
    }
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            ServiceError::Duplicate("CPF ja cadastrado".into())
        }
        _ => ServiceError::Db(e.to_string()),
    })
}

/// Remove a cliente, returning the removed record. A missing id is
/// not-found, never an internal error.
pub async fn remove_cliente(db: &DatabaseConnection, id: i32) -> Result<cliente::Model, ServiceError> {
    let found = repo::find_by_id::<cliente::Entity>(db, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(NOT_FOUND_MSG.into()))?;
    let deleted = repo::delete_by_id::<cliente::Entity>(db, id).await?;
    if deleted == 0 {
        return Err(ServiceError::NotFound(NOT_FOUND_MSG.into()));
    }
    Ok(found)
}

/// Sign the cliente id into a download token, build the public URL and
/// persist it on the record. Returns the URL.
pub async fn generate_link(
    db: &DatabaseConnection,
    cfg: &DownloadConfig,
    id: i32,
) -> Result<String, ServiceError> {
    let found = repo::find_by_id::<cliente::Entity>(db, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(NOT_FOUND_MSG.into()))?;
    let token = download::sign_id(cfg, id)?;
    let url = format!("{}{}", cfg.base_url, token);
    let mut am: cliente::ActiveModel = found.into();
    am.linkdownload = Set(Some(url.clone()));
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(cliente_id = id, "download link generated");
    Ok(url)
}

/// Resolve a download token back to its cliente and mark the link as
/// accessed. Invalid or expired tokens are indistinguishable from unknown
/// ones on purpose.
pub async fn record_download(
    db: &DatabaseConnection,
    cfg: &DownloadConfig,
    token: &str,
) -> Result<String, ServiceError> {
    let id = download::verify_id(cfg, token).ok_or(ServiceError::InvalidToken)?;
    let found = repo::find_by_id::<cliente::Entity>(db, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(NOT_FOUND_MSG.into()))?;
    let mut am: cliente::ActiveModel = found.into();
    am.statusdownload = Set(Some(LINK_ACCESSED_STATUS.to_string()));
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(cliente_id = id, "download link accessed");
    Ok(updated.statusdownload.unwrap_or_else(|| LINK_ACCESSED_STATUS.to_string()))
}
