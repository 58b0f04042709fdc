pub mod auth;
pub mod biometrias;
pub mod clientes;
pub mod documentos;

use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::metrics;
use crate::openapi::ApiDoc;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service healthy")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health/metrics, entity CRUD, the
/// public download endpoint, login routes and the Swagger UI.
pub fn build_router(cors: CorsLayer, state: auth::ServerState) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics::metrics));

    let clientes_routes = Router::new()
        .route("/clientes", post(clientes::create).get(clientes::list))
        .route("/clientes/cpf/:cpf", get(clientes::get_by_cpf))
        .route(
            "/clientes/:id",
            get(clientes::get_one).patch(clientes::update).delete(clientes::remove),
        )
        .route("/clientes/:id/link", post(clientes::link))
        // Capability link: the token itself is the credential
        .route("/download/:token", get(clientes::download_status));

    let documentos_routes = Router::new()
        .route("/documentos", post(documentos::create).get(documentos::list))
        .route(
            "/documentos/:id",
            get(documentos::get_one).patch(documentos::update).delete(documentos::remove),
        );

    let biometrias_routes = Router::new()
        .route("/biometrias", get(biometrias::list))
        .route("/biometrias/:id", get(biometrias::get_one))
        .route("/biometrias/usuario/:user_id", get(biometrias::list_by_user));

    let auth_routes = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::me));

    Router::new()
        .merge(public)
        .merge(clientes_routes)
        .merge(documentos_routes)
        .merge(biometrias_routes)
        .merge(auth_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(middleware::from_fn(metrics::track_requests))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // Span per request with method and path, at INFO
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // Response log carries status code and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx and friends logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
