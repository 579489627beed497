//! API error handling
//!
//! Error responses carry a single `message` field, matching the rest of the
//! API's response bodies. Internal errors are reported generically; the
//! interesting details go to the log, which is the product here.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub message: String,
}

impl ErrorResponse {
    /// Build a response body with the given message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::Conflict(_) => {
                Self::Conflict("Username or email already exists".to_string())
            },
            ApplicationError::NotAuthorized(msg) => Self::Unauthorized(msg),
            ApplicationError::ExternalService(msg) => Self::Internal(msg),
            ApplicationError::Configuration(_) | ApplicationError::Internal(_) => {
                Self::Internal("Internal server error".to_string())
            },
        }
    }
}
