//! Session entity
//!
//! A best-effort record of a login event. Sessions are not consulted for
//! authorization - tokens carry their own signature and expiry - so a session
//! row that fails to persist degrades telemetry, not access.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted login session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Row id assigned by the store
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    /// The issued bearer token
    pub token: String,
    /// When the session (and its token) expires
    pub expires_at: DateTime<Utc>,
}

/// Data for a session that has not been persisted yet
#[derive(Debug, Clone)]
pub struct NewSession {
    pub user_id: i64,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}
