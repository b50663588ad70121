//! Error types for the recipe gateway
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Service Error Enum ==
/// Unified error type for the gateway.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Requested meal or resource does not exist upstream
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Rejected configuration (zero capacity, zero TTL, ...)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Upstream request failed or returned a non-success status
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Upstream answered with a body that is not valid JSON
    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        // URLs may carry credentials; keep them out of messages
        ServiceError::Upstream(err.without_url().to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ServiceError::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the gateway.
pub type Result<T> = std::result::Result<T, ServiceError>;
