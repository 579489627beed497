//! Health check handler

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use serde::Serialize;
use tokio::task;
use tracing::{error, info, warn};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: &'static str,
    /// Current timestamp
    pub timestamp: String,
}

/// Unhealthy response with the failing check's error
#[derive(Debug, Serialize)]
pub struct UnhealthyResponse {
    /// Service status
    pub status: &'static str,
    /// What the failing check reported
    pub error: String,
}

/// GET /health
///
/// Verifies the database answers a trivial query. The memory-pressure
/// switch only adds warning telemetry; it never fails the check.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    info!("Health check requested");

    let pool = state.pool.clone();
    let db_ok = task::spawn_blocking(move || {
        pool.get()
            .map_err(|e| e.to_string())
            .and_then(|conn| {
                conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
                    .map_err(|e| e.to_string())
            })
    })
    .await
    .map_err(|e| e.to_string())
    .and_then(|r| r);

    if let Err(e) = db_ok {
        error!("Health check failed: {e}");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(UnhealthyResponse {
                status: "unhealthy",
                error: e,
            }),
        )
            .into_response();
    }

    if state.faults.memory_pressure {
        warn!("Memory usage high: 89% of available memory used");
        warn!("Disk usage warning: 91% used on /dev/sda1");
    }

    info!("Health check passed");
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
    })
    .into_response()
}
