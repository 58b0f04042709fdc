use thiserror::Error;

use models::errors::ModelError;

/// Error kinds returned by the service layer.
///
/// Services never select HTTP statuses themselves; the server crate maps
/// these kinds at the boundary (Duplicate/Validation -> 400, NotFound and
/// InvalidToken -> 404, the rest -> 500).
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Duplicate(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Erro Token Invalido")]
    InvalidToken,
    #[error("token error: {0}")]
    Token(String),
    #[error("{0}")]
    Db(String),
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
            ModelError::Duplicate(msg) => ServiceError::Duplicate(msg),
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}
