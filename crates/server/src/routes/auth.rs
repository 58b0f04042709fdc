use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use service::auth::domain::{LoginInput, RegisterInput};
use service::auth::repo::seaorm::SeaOrmAuthRepository;
use service::auth::service::{AuthConfig, AuthService};
use service::download::DownloadConfig;

use crate::errors::ApiError;

#[derive(Clone)]
pub struct ServerAuthConfig {
    pub jwt_secret: String,
}

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub auth: ServerAuthConfig,
    pub download: DownloadConfig,
}

#[derive(Serialize)]
pub struct RegisterOutput {
    pub usuario_id: i32,
}

#[derive(Serialize)]
pub struct LoginOutput {
    pub usuario_id: i32,
    pub email: String,
    pub nome: String,
    pub token: String,
}

#[derive(Serialize)]
pub struct MeOutput {
    pub usuario_id: i32,
    pub email: String,
}

fn auth_service(state: &ServerState) -> AuthService<SeaOrmAuthRepository> {
    let repo = Arc::new(SeaOrmAuthRepository { db: state.db.clone() });
    AuthService::new(
        repo,
        AuthConfig {
            jwt_secret: Some(state.auth.jwt_secret.clone()),
            password_algorithm: "argon2".into(),
        },
    )
}

#[utoipa::path(post, path = "/auth/register", tag = "auth", request_body = crate::openapi::RegisterRequest, responses((status = 200, description = "Registered"), (status = 400, description = "Email ja cadastrado")))]
pub async fn register(
    State(state): State<ServerState>,
    Json(input): Json<RegisterInput>,
) -> Result<Json<RegisterOutput>, ApiError> {
    models::usuario::validate_email(&input.email)
        .map_err(|e| ApiError::new(StatusCode::BAD_REQUEST, e.to_string()))?;
    let created = auth_service(&state).register(input).await?;
    Ok(Json(RegisterOutput { usuario_id: created.id }))
}

#[utoipa::path(post, path = "/auth/login", tag = "auth", request_body = crate::openapi::LoginRequest, responses((status = 200, description = "Logged in"), (status = 401, description = "Usuario ou senha invalidos")))]
pub async fn login(
    State(state): State<ServerState>,
    jar: CookieJar,
    Json(input): Json<LoginInput>,
) -> Result<(CookieJar, Json<LoginOutput>), ApiError> {
    let session = auth_service(&state).login(input).await?;
    let user = session.user;
    let token = session
        .token
        .ok_or_else(|| ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "token generation failed"))?;

    let mut cookie = Cookie::new("auth_token", token.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(false);
    cookie.set_same_site(axum_extra::extract::cookie::SameSite::Lax);
    let jar = jar.add(cookie);

    let out = LoginOutput { usuario_id: user.id, email: user.email, nome: user.nome, token };
    Ok((jar, Json(out)))
}

pub async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    let jar = jar.remove(Cookie::from("auth_token"));
    (jar, StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    uid: i32,
    #[allow(dead_code)]
    exp: usize,
}

// Authorization: Bearer takes precedence; the auth_token cookie is the
// fallback for browser clients.
fn extract_token(headers: &HeaderMap, jar: &CookieJar) -> Option<String> {
    if let Some(h) = headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        return h.strip_prefix("Bearer ").map(str::to_string);
    }
    jar.get("auth_token").map(|c| c.value().to_string())
}

pub async fn me(
    State(state): State<ServerState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Result<Json<MeOutput>, ApiError> {
    let token = extract_token(&headers, &jar)
        .ok_or_else(|| ApiError::new(StatusCode::UNAUTHORIZED, "Token ausente"))?;

    let key = DecodingKey::from_secret(state.auth.jwt_secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    match decode::<Claims>(&token, &key, &validation) {
        Ok(data) => Ok(Json(MeOutput { usuario_id: data.claims.uid, email: data.claims.sub })),
        Err(e) => {
            tracing::warn!(err = %e, "token validation failed");
            Err(ApiError::new(StatusCode::UNAUTHORIZED, "Token invalido ou expirado"))
        }
    }
}
