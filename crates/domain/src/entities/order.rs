//! Order entity and payment outcome
//!
//! Orders are written before payment runs and are never rolled back: a failed
//! payment leaves the row behind with status `pending`. The core never
//! transitions order status after insert - that partial-failure state is the
//! point of the demo, not a bug to reconcile.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A placed order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Row id assigned by the store
    pub id: i64,
    /// User who placed the order
    pub user_id: i64,
    /// Product being purchased
    pub product_name: String,
    /// Order amount in USD
    pub amount: f64,
    /// Lifecycle status (always `pending` as written by the core)
    pub status: OrderStatus,
    /// When the order was placed
    pub created_at: DateTime<Utc>,
}

/// Data for an order that has not been persisted yet
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: i64,
    pub product_name: String,
    pub amount: f64,
}

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Initial state; the core never moves an order past this
    #[default]
    Pending,
    Completed,
}

impl OrderStatus {
    /// Stable string form as stored in the database
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of payment processing as reported to the caller
///
/// Reported in the order response but never written back to the order row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Completed,
    Failed,
}

impl PaymentStatus {
    /// Stable string form used in API responses
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_status_default_is_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn order_status_strings() {
        assert_eq!(OrderStatus::Pending.as_str(), "pending");
        assert_eq!(OrderStatus::Completed.as_str(), "completed");
    }

    #[test]
    fn payment_status_strings() {
        assert_eq!(PaymentStatus::Completed.as_str(), "completed");
        assert_eq!(PaymentStatus::Failed.as_str(), "failed");
    }

    #[test]
    fn payment_status_display() {
        assert_eq!(PaymentStatus::Failed.to_string(), "failed");
    }

    #[test]
    fn order_serialization_uses_lowercase_status() {
        let order = Order {
            id: 1,
            user_id: 2,
            product_name: "widget".to_string(),
            amount: 9.99,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains("\"pending\""));
    }

    #[test]
    fn new_order_holds_fields() {
        let order = NewOrder {
            user_id: 3,
            product_name: "widget".to_string(),
            amount: 9.99,
        };
        assert_eq!(order.user_id, 3);
        assert!((order.amount - 9.99).abs() < f64::EPSILON);
    }
}
