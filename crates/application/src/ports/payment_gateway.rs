//! Payment gateway port

use async_trait::async_trait;
use thiserror::Error;

/// Errors from payment processing
#[derive(Debug, Error)]
pub enum PaymentError {
    /// The payment service did not respond within the timeout budget
    #[error("Payment service timeout")]
    Timeout,

    /// The gateway responded but declined the transaction
    #[error("Transaction declined")]
    Declined,

    /// The payment could not be completed after the (simulated) retries
    #[error("Payment processing failed after retries")]
    Failed,
}

/// Receipt returned on successful payment
#[derive(Debug, Clone)]
pub struct PaymentReceipt {
    /// Gateway transaction identifier
    pub transaction_id: String,
}

/// Port for processing a payment against an external gateway
#[async_trait]
pub trait PaymentGatewayPort: Send + Sync {
    /// Attempt to charge the given amount for an order
    async fn process(&self, order_id: i64, amount: f64)
    -> Result<PaymentReceipt, PaymentError>;
}
