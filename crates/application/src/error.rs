//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Resource conflict (duplicate username or email)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Caller is not authenticated or credentials do not match
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// A dependency this operation cannot proceed without has failed
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
