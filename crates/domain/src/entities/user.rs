//! User entity
//!
//! An identity record created by registration. Users are never updated or
//! deleted by the core; username and email are each unique across all users.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Row id assigned by the store
    pub id: i64,
    /// Unique login name
    pub username: String,
    /// Unique email address
    pub email: String,
    /// Argon2 PHC hash of the password
    pub password_hash: String,
    /// When the user registered
    pub created_at: DateTime<Utc>,
}

/// Data for a user that has not been persisted yet
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    /// Create a new unpersisted user record
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }
}
