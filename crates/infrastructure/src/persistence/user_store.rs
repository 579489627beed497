//! SQLite-backed user store.

use application::ApplicationError;
use application::ports::UserStore;
use async_trait::async_trait;
use chrono::Utc;
use domain::entities::{NewUser, User};
use rusqlite::{OptionalExtension, params};
use tokio::task;
use tracing::debug;

use super::connection::ConnectionPool;

/// SQLite implementation of [`UserStore`]
#[derive(Clone)]
pub struct SqliteUserStore {
    pool: ConnectionPool,
}

impl std::fmt::Debug for SqliteUserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteUserStore").finish_non_exhaustive()
    }
}

impl SqliteUserStore {
    /// Create a new store backed by the given pool
    #[must_use]
    pub const fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn insert(&self, user: NewUser) -> Result<i64, ApplicationError> {
        let pool = self.pool.clone();
        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;
            let created_at = Utc::now();
            conn.execute(
                "INSERT INTO users (username, email, password_hash, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    user.username,
                    user.email,
                    user.password_hash,
                    created_at.to_rfc3339()
                ],
            )
            .map_err(|e| map_insert_error(&e))?;
            Ok(conn.last_insert_rowid())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApplicationError> {
        let pool = self.pool.clone();
        let username = username.to_string();
        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;
            let user = conn
                .query_row(
                    "SELECT id, username, email, password_hash, created_at
                     FROM users WHERE username = ?1",
                    params![username],
                    |row| {
                        let created_at: String = row.get(4)?;
                        Ok(User {
                            id: row.get(0)?,
                            username: row.get(1)?,
                            email: row.get(2)?,
                            password_hash: row.get(3)?,
                            created_at: chrono::DateTime::parse_from_rfc3339(&created_at)
                                .map(|dt| dt.with_timezone(&Utc))
                                .unwrap_or_default(),
                        })
                    },
                )
                .optional()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;
            debug!(found = user.is_some(), "User lookup complete");
            Ok(user)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }
}

/// Map a constraint violation on insert to a conflict
fn map_insert_error(e: &rusqlite::Error) -> ApplicationError {
    if let rusqlite::Error::SqliteFailure(err, _) = e {
        if err.code == rusqlite::ErrorCode::ConstraintViolation {
            return ApplicationError::Conflict("User already exists".to_string());
        }
    }
    ApplicationError::Internal(e.to_string())
}
