//! Signed download-link tokens.
//!
//! A cliente id is signed into an HS256 token and appended to the configured
//! base URL; later the token comes back through the public download page and
//! is decoded to find out which cliente opened the link.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

#[derive(Clone, Debug)]
pub struct DownloadConfig {
    pub jwt_secret: String,
    pub base_url: String,
    pub token_ttl_secs: u64,
}

impl DownloadConfig {
    pub fn new(jwt_secret: impl Into<String>, base_url: impl Into<String>, token_ttl_secs: u64) -> Self {
        Self { jwt_secret: jwt_secret.into(), base_url: base_url.into(), token_ttl_secs }
    }
}

// The id claim is a string, not a number: the original signer stringified
// the id and the download page round-trips it verbatim.
#[derive(Debug, Serialize, Deserialize)]
struct LinkClaims {
    id: String,
    exp: usize,
}

pub fn sign_id(cfg: &DownloadConfig, id: i32) -> Result<String, ServiceError> {
    let exp = (Utc::now() + chrono::Duration::seconds(cfg.token_ttl_secs as i64)).timestamp() as usize;
    let claims = LinkClaims { id: id.to_string(), exp };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(cfg.jwt_secret.as_bytes()))
        .map_err(|e| ServiceError::Token(e.to_string()))
}

/// Decode a download token back to the cliente id.
///
/// Every verification failure (garbled token, wrong signature, expired)
/// collapses to `None`; the caller maps that to a 404.
pub fn verify_id(cfg: &DownloadConfig, token: &str) -> Option<i32> {
    let key = DecodingKey::from_secret(cfg.jwt_secret.as_bytes());
    let validation = Validation::new(Algorithm::HS256);
    match decode::<LinkClaims>(token, &key, &validation) {
        Ok(data) => data.claims.id.parse::<i32>().ok(),
        Err(e) => {
            tracing::debug!(error = %e, "invalid download token");
            None
        }
    }
}
