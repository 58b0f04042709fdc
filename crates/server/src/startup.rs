use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, auth};
use service::download::DownloadConfig;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8081);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // DB connection: prefer pool settings from config.toml, fall back to
    // DATABASE_URL alone.
    let db = match configs::load_default() {
        Ok(mut cfg) => {
            cfg.database.normalize_from_env();
            if cfg.database.validate().is_ok() {
                models::db::connect_with_config(&cfg.database).await?
            } else {
                models::db::connect().await?
            }
        }
        Err(_) => models::db::connect().await?,
    };
    migration::Migrator::up(&db, None).await?;

    // Download-link settings (HTML_URL / JWT_SECRET in the original deployment)
    let mut download_cfg = configs::load_default().map(|c| c.download).unwrap_or_default();
    download_cfg.normalize_from_env();
    let jwt_secret = if download_cfg.jwt_secret.trim().is_empty() {
        "dev-secret-change-me".to_string()
    } else {
        download_cfg.jwt_secret.clone()
    };

    let state = auth::ServerState {
        db,
        auth: auth::ServerAuthConfig { jwt_secret: jwt_secret.clone() },
        download: DownloadConfig::new(jwt_secret, download_cfg.base_url, download_cfg.token_ttl_secs),
    };

    // Build router
    let cors = build_cors();
    let app: Router = routes::build_router(cors, state);

    // Bind and serve
    let addr = load_bind_addr()?;
    info!(%addr, "starting server crate");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
