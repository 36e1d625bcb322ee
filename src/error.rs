//! Error types for the cache service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache engine and request handlers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key absent or expired at read time
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Stored value cannot be used as an integer counter
    #[error("Value stored under '{0}' is not an integer")]
    TypeMismatch(String),

    /// Counter update would leave the i64 range
    #[error("Counter '{0}' would overflow")]
    Overflow(String),

    /// Empty key reached the engine
    #[error("missing key")]
    EmptyKey,

    /// Invalid request data
    #[error("{0}")]
    InvalidRequest(String),

    /// Internal storage failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CacheError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::EmptyKey | CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::TypeMismatch(_) | CacheError::Overflow(_) | CacheError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache service.
pub type Result<T> = std::result::Result<T, CacheError>;
