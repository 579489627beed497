//! SQLite-backed session store.

use application::ApplicationError;
use application::ports::SessionStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::entities::NewSession;
use rusqlite::params;
use tokio::task;
use tracing::debug;

use super::connection::ConnectionPool;

/// SQLite implementation of [`SessionStore`]
#[derive(Clone)]
pub struct SqliteSessionStore {
    pool: ConnectionPool,
}

impl std::fmt::Debug for SqliteSessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteSessionStore").finish_non_exhaustive()
    }
}

impl SqliteSessionStore {
    /// Create a new store backed by the given pool
    #[must_use]
    pub const fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn insert(&self, session: NewSession) -> Result<(), ApplicationError> {
        let pool = self.pool.clone();
        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;
            conn.execute(
                "INSERT INTO sessions (user_id, token, expires_at) VALUES (?1, ?2, ?3)",
                params![
                    session.user_id,
                    session.token,
                    session.expires_at.to_rfc3339()
                ],
            )
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
            Ok(())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, ApplicationError> {
        let pool = self.pool.clone();
        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;
            let removed = conn
                .execute(
                    "DELETE FROM sessions WHERE expires_at < ?1",
                    params![now.to_rfc3339()],
                )
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;
            if removed > 0 {
                debug!(removed, "Purged expired sessions");
            }
            Ok(removed)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use domain::entities::NewUser;

    use super::*;
    use crate::persistence::{SqliteUserStore, create_memory_pool, run_migrations};
    use application::ports::UserStore;

    async fn stores() -> (SqliteUserStore, SqliteSessionStore) {
        let pool = create_memory_pool();
        run_migrations(&pool).unwrap();
        (
            SqliteUserStore::new(pool.clone()),
            SqliteSessionStore::new(pool),
        )
    }

    #[tokio::test]
    async fn insert_persists_session() {
        let (users, sessions) = stores().await;
        let user_id = users
            .insert(NewUser::new("alice", "a@example.com", "h"))
            .await
            .unwrap();

        sessions
            .insert(NewSession {
                user_id,
                token: "tok".to_string(),
                expires_at: Utc::now() + Duration::hours(24),
            })
            .await
            .unwrap();

        let purged = sessions.purge_expired(Utc::now()).await.unwrap();
        assert_eq!(purged, 0);
    }

    #[tokio::test]
    async fn purge_removes_only_expired_sessions() {
        let (users, sessions) = stores().await;
        let user_id = users
            .insert(NewUser::new("bob", "b@example.com", "h"))
            .await
            .unwrap();

        sessions
            .insert(NewSession {
                user_id,
                token: "stale".to_string(),
                expires_at: Utc::now() - Duration::hours(1),
            })
            .await
            .unwrap();
        sessions
            .insert(NewSession {
                user_id,
                token: "fresh".to_string(),
                expires_at: Utc::now() + Duration::hours(1),
            })
            .await
            .unwrap();

        let purged = sessions.purge_expired(Utc::now()).await.unwrap();
        assert_eq!(purged, 1);
    }

    #[tokio::test]
    async fn insert_for_unknown_user_fails() {
        let (_, sessions) = stores().await;
        let result = sessions
            .insert(NewSession {
                user_id: 999,
                token: "tok".to_string(),
                expires_at: Utc::now(),
            })
            .await;
        assert!(result.is_err());
    }
}
