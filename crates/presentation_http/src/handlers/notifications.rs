//! Notification handler

use axum::{Extension, Json, extract::State};
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// POST /send-notification request body
///
/// No field is required; the simulation runs with whatever is provided.
#[derive(Debug, Deserialize)]
pub struct NotificationRequest {
    pub email: Option<String>,
    pub message: Option<String>,
}

/// POST /send-notification (requires a valid token)
pub async fn send_notification(
    State(state): State<AppState>,
    Extension(_user): Extension<AuthenticatedUser>,
    Json(body): Json<NotificationRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .notifications
        .send(body.email.as_deref(), body.message.as_deref())
        .map_err(|_| ApiError::Internal("Failed to send notification".to_string()))?;

    Ok(Json(serde_json::json!({
        "message": "Notification sent successfully"
    })))
}
