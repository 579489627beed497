//! Route definitions

use std::sync::Arc;

use application::ports::TokenSignerPort;
use axum::{Json, Router, http::StatusCode, http::Uri, routing::get, routing::post};
use tracing::warn;

use crate::{error::ErrorResponse, handlers, middleware::BearerAuthLayer, state::AppState};

/// Create the main router with all routes
///
/// Authentication applies only to the protected sub-router, so unknown
/// paths fall through to the 404 handler instead of being rejected by the
/// auth layer.
pub fn create_router(state: AppState, tokens: Arc<dyn TokenSignerPort>) -> Router {
    let auth = BearerAuthLayer::new(tokens, state.faults.auth_failure);

    let protected = Router::new()
        .route("/order", post(handlers::orders::create_order))
        .route("/logout", post(handlers::accounts::logout))
        .route(
            "/send-notification",
            post(handlers::notifications::send_notification),
        )
        .route_layer(auth);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/register", post(handlers::accounts::register))
        .route("/login", post(handlers::accounts::login))
        .merge(protected)
        .fallback(not_found)
        .with_state(state)
}

/// Fallback for unknown paths
async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    warn!("Endpoint not found: {}", uri.path());
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Endpoint not found")),
    )
}
