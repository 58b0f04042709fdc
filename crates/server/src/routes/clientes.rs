use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use models::cliente;
use service::cliente_service::{self, CreateCliente, UpdateCliente};
use service::repo::Pagination;

use crate::errors::ApiError;
use crate::routes::auth::ServerState;

/// Response shape for a cliente: the internal timestamps stay internal.
#[derive(Debug, Serialize)]
pub struct ClienteOut {
    pub id: i32,
    pub cpf: String,
    pub nome: String,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub linkdownload: Option<String>,
    pub statusdownload: Option<String>,
}

impl From<cliente::Model> for ClienteOut {
    fn from(m: cliente::Model) -> Self {
        Self {
            id: m.id,
            cpf: m.cpf,
            nome: m.nome,
            email: m.email,
            telefone: m.telefone,
            linkdownload: m.linkdownload,
            statusdownload: m.statusdownload,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LinkOut {
    pub linkdownload: String,
}

#[derive(Debug, Serialize)]
pub struct DownloadStatusOut {
    pub statusdownload: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[utoipa::path(post, path = "/clientes", tag = "clientes", request_body = crate::openapi::CreateClienteRequest, responses((status = 200, description = "Created"), (status = 400, description = "CPF ja cadastrado")))]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateCliente>,
) -> Result<Json<ClienteOut>, ApiError> {
    let created = cliente_service::create_cliente(&state.db, input).await?;
    Ok(Json(created.into()))
}

#[utoipa::path(get, path = "/clientes", tag = "clientes", responses((status = 200, description = "All clientes"), (status = 404, description = "Nenhum cliente encontrado")))]
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ClienteOut>>, ApiError> {
    let rows = if query.page.is_some() || query.per_page.is_some() {
        let pagination = Pagination {
            page: query.page.unwrap_or(1),
            per_page: query.per_page.unwrap_or(20),
        };
        cliente_service::list_clientes_paginated(&state.db, pagination).await?
    } else {
        cliente_service::list_clientes(&state.db).await?
    };
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(get, path = "/clientes/{id}", tag = "clientes", params(("id" = i32, Path, description = "Cliente id")), responses((status = 200, description = "Found"), (status = 404, description = "Nenhum cliente encontrado")))]
pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<ClienteOut>, ApiError> {
    let found = cliente_service::get_cliente(&state.db, id).await?;
    Ok(Json(found.into()))
}

#[utoipa::path(get, path = "/clientes/cpf/{cpf}", tag = "clientes", params(("cpf" = String, Path, description = "Cliente CPF")), responses((status = 200, description = "Found"), (status = 404, description = "Nenhum cliente encontrado")))]
pub async fn get_by_cpf(
    State(state): State<ServerState>,
    Path(cpf): Path<String>,
) -> Result<Json<ClienteOut>, ApiError> {
    let found = cliente_service::get_cliente_by_cpf(&state.db, &cpf).await?;
    Ok(Json(found.into()))
}

#[utoipa::path(patch, path = "/clientes/{id}", tag = "clientes", params(("id" = i32, Path, description = "Cliente id")), request_body = crate::openapi::UpdateClienteRequest, responses((status = 200, description = "Updated"), (status = 404, description = "Nenhum cliente encontrado")))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateCliente>,
) -> Result<Json<ClienteOut>, ApiError> {
    let updated = cliente_service::update_cliente(&state.db, id, input).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(delete, path = "/clientes/{id}", tag = "clientes", params(("id" = i32, Path, description = "Cliente id")), responses((status = 200, description = "Removed"), (status = 404, description = "Nenhum cliente encontrado")))]
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<ClienteOut>, ApiError> {
    let removed = cliente_service::remove_cliente(&state.db, id).await?;
    Ok(Json(removed.into()))
}

#[utoipa::path(post, path = "/clientes/{id}/link", tag = "clientes", params(("id" = i32, Path, description = "Cliente id")), responses((status = 200, description = "Link generated"), (status = 404, description = "Nenhum cliente encontrado")))]
pub async fn link(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<LinkOut>, ApiError> {
    let url = cliente_service::generate_link(&state.db, &state.download, id).await?;
    Ok(Json(LinkOut { linkdownload: url }))
}

#[utoipa::path(get, path = "/download/{token}", tag = "clientes", params(("token" = String, Path, description = "Signed download token")), responses((status = 200, description = "Access recorded"), (status = 404, description = "Erro Token Invalido")))]
pub async fn download_status(
    State(state): State<ServerState>,
    Path(token): Path<String>,
) -> Result<Json<DownloadStatusOut>, ApiError> {
    let status = cliente_service::record_download(&state.db, &state.download, &token).await?;
    Ok(Json(DownloadStatusOut { statusdownload: status }))
}
