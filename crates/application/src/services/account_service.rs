//! Account service
//!
//! Orchestrates registration, login, and logout. Login treats session
//! persistence as a degraded-but-available dependency: a failed session
//! insert is logged and swallowed, and the signed token is returned anyway.

use std::sync::Arc;

use chrono::{Duration, Utc};
use domain::entities::{NewSession, NewUser};
use tracing::{debug, error, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{
    EventBusPort, PasswordHasherPort, SessionStore, TokenSignerPort, UserStore,
};

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Signed bearer token binding the user id
    pub token: String,
    /// Authenticated user id
    pub user_id: i64,
}

/// Service for account lifecycle operations
pub struct AccountService {
    users: Arc<dyn UserStore>,
    sessions: Arc<dyn SessionStore>,
    hasher: Arc<dyn PasswordHasherPort>,
    tokens: Arc<dyn TokenSignerPort>,
    events: Arc<dyn EventBusPort>,
    token_ttl: Duration,
}

impl std::fmt::Debug for AccountService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountService")
            .field("token_ttl", &self.token_ttl)
            .finish_non_exhaustive()
    }
}

impl AccountService {
    /// Create a new account service with a 24-hour token lifetime
    #[must_use]
    pub fn new(
        users: Arc<dyn UserStore>,
        sessions: Arc<dyn SessionStore>,
        hasher: Arc<dyn PasswordHasherPort>,
        tokens: Arc<dyn TokenSignerPort>,
        events: Arc<dyn EventBusPort>,
    ) -> Self {
        Self {
            users,
            sessions,
            hasher,
            tokens,
            events,
            token_ttl: Duration::hours(24),
        }
    }

    /// Override the token lifetime
    #[must_use]
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Register a new user, returning the assigned id
    ///
    /// Returns `ApplicationError::Conflict` when the username or email is
    /// already taken.
    #[instrument(skip(self, password), fields(username = %username))]
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<i64, ApplicationError> {
        info!("Registration request received");

        let password_hash = self.hasher.hash(password)?;
        let user_id = self
            .users
            .insert(NewUser::new(username, email, password_hash))
            .await?;

        info!(user_id, "User registered successfully");
        Ok(user_id)
    }

    /// Authenticate a user and issue a signed, time-limited token
    ///
    /// The session row is written best-effort; persistence failure does not
    /// fail the login.
    #[instrument(skip(self, password), fields(username = %username))]
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, ApplicationError> {
        info!("Login request received");

        let user = self.users.find_by_username(username).await?;
        let Some(user) = user else {
            warn!("Login failed: Invalid credentials");
            return Err(ApplicationError::NotAuthorized(
                "Invalid credentials".to_string(),
            ));
        };

        if !self.hasher.verify(password, &user.password_hash)? {
            warn!("Login failed: Invalid credentials");
            return Err(ApplicationError::NotAuthorized(
                "Invalid credentials".to_string(),
            ));
        }

        let token = self.tokens.issue(user.id)?;

        // Best-effort session write; login still succeeds on failure.
        let session = NewSession {
            user_id: user.id,
            token: token.clone(),
            expires_at: Utc::now() + self.token_ttl,
        };
        if let Err(e) = self.sessions.insert(session).await {
            error!(error = %e, "Database query failed: could not persist session, continuing without it");
        }

        info!(user_id = user.id, "User logged in successfully");
        Ok(LoginOutcome {
            token,
            user_id: user.id,
        })
    }

    /// Log a user out, best-effort-publishing a logout event
    ///
    /// Event-bus availability never blocks logout; this always succeeds.
    #[instrument(skip(self))]
    pub async fn logout(&self, user_id: i64) {
        info!(user_id, "Logout request received");

        if let Err(e) = self.events.publish_logout(user_id).await {
            debug!(error = %e, "Logout event not delivered, continuing");
        }

        info!(user_id, "User logged out successfully");
    }

    /// Delete all expired sessions, returning the number removed
    ///
    /// Invoked once at startup; failures are the caller's to log, and are
    /// never fatal.
    pub async fn cleanup_sessions(&self) -> Result<usize, ApplicationError> {
        self.sessions.purge_expired(Utc::now()).await
    }
}
