//! Account handlers: register, login, logout
//!
//! Request fields are declared optional and checked by hand so that a
//! missing field yields a 400 with the API's usual `message` body rather
//! than an extractor rejection.

use axum::{Extension, Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// POST /register request body
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /register response body
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user_id: i64,
}

/// POST /login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// POST /login response body
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: i64,
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let (Some(username), Some(email), Some(password)) =
        (body.username, body.email, body.password)
    else {
        warn!("Registration failed: Missing required fields");
        return Err(ApiError::BadRequest("Missing required fields".to_string()));
    };

    let user_id = state.accounts.register(&username, &email, &password).await?;

    Ok(Json(RegisterResponse {
        message: "User registered successfully",
        user_id,
    }))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (Some(username), Some(password)) = (body.username, body.password) else {
        return Err(ApiError::BadRequest("Missing credentials".to_string()));
    };

    let outcome = state.accounts.login(&username, &password).await?;

    Ok(Json(LoginResponse {
        token: outcome.token,
        user_id: outcome.user_id,
    }))
}

/// POST /logout (requires a valid token)
pub async fn logout(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Json<serde_json::Value> {
    state.accounts.logout(user.0).await;
    Json(serde_json::json!({ "message": "Logged out successfully" }))
}
