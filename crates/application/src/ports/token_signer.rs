//! Bearer token signing port

use thiserror::Error;

use crate::error::ApplicationError;

/// Errors from token verification
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token's expiry has passed
    #[error("Token has expired")]
    Expired,

    /// The token is malformed or its signature does not verify
    #[error("Token is invalid: {0}")]
    Invalid(String),
}

/// Port for issuing and verifying signed, time-limited bearer tokens
///
/// Authorization is derived solely from the token signature and expiry;
/// session rows are never consulted.
pub trait TokenSignerPort: Send + Sync {
    /// Issue a signed token binding the given user id
    fn issue(&self, user_id: i64) -> Result<String, ApplicationError>;

    /// Verify a token and extract the bound user id
    fn verify(&self, token: &str) -> Result<i64, TokenError>;
}
