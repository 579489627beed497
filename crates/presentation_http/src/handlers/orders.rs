//! Order handler
//!
//! Payment failure is not an error here: the order row survives, and the
//! response reports the partial-failure state with a 402.

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use domain::entities::PaymentStatus;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// POST /order request body
#[derive(Debug, Deserialize)]
pub struct OrderRequest {
    pub product_name: Option<String>,
    pub amount: Option<f64>,
}

/// POST /order response body
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub message: &'static str,
    pub order_id: i64,
    pub payment_status: PaymentStatus,
}

/// POST /order (requires a valid token)
pub async fn create_order(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(body): Json<OrderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(product_name), Some(amount)) = (body.product_name, body.amount) else {
        return Err(ApiError::BadRequest("Missing order details".to_string()));
    };

    let outcome = state.orders.create_order(user.0, &product_name, amount).await?;

    let response = match outcome.payment {
        PaymentStatus::Completed => (
            StatusCode::OK,
            Json(OrderResponse {
                message: "Order created successfully",
                order_id: outcome.order_id,
                payment_status: PaymentStatus::Completed,
            }),
        ),
        PaymentStatus::Failed => (
            StatusCode::PAYMENT_REQUIRED,
            Json(OrderResponse {
                message: "Order created but payment failed",
                order_id: outcome.order_id,
                payment_status: PaymentStatus::Failed,
            }),
        ),
    };

    Ok(response)
}
