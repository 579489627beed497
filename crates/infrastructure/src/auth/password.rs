//! Argon2 password hashing.

use application::ApplicationError;
use application::ports::PasswordHasherPort;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Argon2id password hasher with default parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    /// Create a new hasher
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PasswordHasherPort for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, ApplicationError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| ApplicationError::Internal(format!("password hashing failed: {e}")))?;
        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, ApplicationError> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| ApplicationError::Internal(format!("stored hash is malformed: {e}")))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}
