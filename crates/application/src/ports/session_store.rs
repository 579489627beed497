//! Session storage port

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::entities::NewSession;

use crate::error::ApplicationError;

/// Port for session persistence
///
/// Session writes are best-effort: callers are expected to log and swallow
/// insert failures rather than fail the login.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist a login session
    async fn insert(&self, session: NewSession) -> Result<(), ApplicationError>;

    /// Delete all sessions whose expiry has passed, returning the count removed
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, ApplicationError>;
}
