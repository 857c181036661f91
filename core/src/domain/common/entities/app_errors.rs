use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid input")]
    Invalid,

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl From<serde_json::Error> for CoreError {
    fn from(error: serde_json::Error) -> Self {
        CoreError::StorageError(format!("invalid stored value: {error}"))
    }
}
