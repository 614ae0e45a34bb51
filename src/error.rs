//! Error types for the prime server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Prime Error Enum ==
/// Unified error type for the prime server.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrimeError {
    /// Requested bound is not a non-negative decimal integer
    #[error("Invalid bound: {0}")]
    InvalidBound(String),

    /// Sieve working memory could not be obtained for this bound
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    /// Cache refused an entry that would break its key/value invariant
    #[error("Cache rejected entry: {0}")]
    CacheRejected(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for PrimeError {
    fn into_response(self) -> Response {
        let status = match &self {
            PrimeError::InvalidBound(_) => StatusCode::BAD_REQUEST,
            PrimeError::ResourceExhausted(_) => StatusCode::SERVICE_UNAVAILABLE,
            PrimeError::CacheRejected(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PrimeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the prime server.
pub type Result<T> = std::result::Result<T, PrimeError>;
