//! Bearer token authentication middleware
//!
//! Verifies the signed token from the Authorization header and injects the
//! authenticated user id into request extensions. With the auth-failure
//! switch enabled, every token is rejected as invalid regardless of its
//! actual signature, producing the rehearsed auth-outage telemetry.

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use application::ports::{TokenError, TokenSignerPort};
use axum::{
    extract::Request,
    http::header::AUTHORIZATION,
    response::{IntoResponse, Response},
};
use tower::{Layer, Service};
use tracing::{debug, error, warn};

use crate::error::ApiError;

/// Authenticated user id, injected into request extensions on success
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser(pub i64);

/// Layer that applies bearer token authentication
#[derive(Clone)]
pub struct BearerAuthLayer {
    tokens: Arc<dyn TokenSignerPort>,
    simulate_failure: bool,
}

impl std::fmt::Debug for BearerAuthLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerAuthLayer")
            .field("simulate_failure", &self.simulate_failure)
            .finish_non_exhaustive()
    }
}

impl BearerAuthLayer {
    /// Create a new auth layer
    ///
    /// `simulate_failure` comes from the immutable auth-failure switch.
    #[must_use]
    pub fn new(tokens: Arc<dyn TokenSignerPort>, simulate_failure: bool) -> Self {
        Self {
            tokens,
            simulate_failure,
        }
    }
}

impl<S> Layer<S> for BearerAuthLayer {
    type Service = BearerAuth<S>;

    fn layer(&self, inner: S) -> Self::Service {
        BearerAuth {
            inner,
            tokens: Arc::clone(&self.tokens),
            simulate_failure: self.simulate_failure,
        }
    }
}

/// Middleware service for bearer token authentication
#[derive(Clone)]
pub struct BearerAuth<S> {
    inner: S,
    tokens: Arc<dyn TokenSignerPort>,
    simulate_failure: bool,
}

impl<S> std::fmt::Debug for BearerAuth<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerAuth")
            .field("simulate_failure", &self.simulate_failure)
            .finish_non_exhaustive()
    }
}

impl<S> Service<Request> for BearerAuth<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        let tokens = Arc::clone(&self.tokens);
        let simulate_failure = self.simulate_failure;
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let header = req
                .headers()
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok());

            let Some(header) = header else {
                warn!("Missing authorization token");
                return Ok(unauthorized("Token is missing"));
            };

            // Accept both bare tokens and the "Bearer " prefix
            let token = header.strip_prefix("Bearer ").unwrap_or(header);

            if simulate_failure {
                error!(
                    "AuthService: Invalid token detected, token={}...",
                    truncate(token, 20)
                );
                return Ok(unauthorized("Token is invalid"));
            }

            match tokens.verify(token) {
                Ok(user_id) => {
                    debug!(user_id, "Token verified");
                    req.extensions_mut().insert(AuthenticatedUser(user_id));
                    inner.call(req).await
                }
                Err(TokenError::Expired) => {
                    error!("Token has expired");
                    Ok(unauthorized("Token has expired"))
                }
                Err(TokenError::Invalid(_)) => {
                    error!("Invalid token detected: {}...", truncate(token, 20));
                    Ok(unauthorized("Token is invalid"))
                }
            }
        })
    }
}

fn unauthorized(message: &str) -> Response {
    ApiError::Unauthorized(message.to_string()).into_response()
}

fn truncate(s: &str, max: usize) -> &str {
    let end = s
        .char_indices()
        .nth(max)
        .map_or_else(|| s.len(), |(i, _)| i);
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_string_is_unchanged() {
        assert_eq!(truncate("abc", 20), "abc");
    }

    #[test]
    fn truncate_limits_long_string() {
        let long = "a".repeat(50);
        assert_eq!(truncate(&long, 20).len(), 20);
    }
}
