//! Order service
//!
//! Persists the order first, then runs payment. The order row is never
//! rolled back on payment failure; the outcome reports the resulting
//! partial-failure state to the caller instead of reconciling it.

use std::sync::Arc;

use domain::entities::{NewOrder, PaymentStatus};
use tracing::{error, info, instrument};

use crate::error::ApplicationError;
use crate::ports::{OrderStore, PaymentGatewayPort};

/// Result of order placement
#[derive(Debug, Clone)]
pub struct OrderOutcome {
    /// Id of the persisted order row (present on both payment outcomes)
    pub order_id: i64,
    /// Whether payment completed or failed
    pub payment: PaymentStatus,
}

/// Service for order placement and payment orchestration
pub struct OrderService {
    orders: Arc<dyn OrderStore>,
    payment: Arc<dyn PaymentGatewayPort>,
}

impl std::fmt::Debug for OrderService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderService").finish_non_exhaustive()
    }
}

impl OrderService {
    /// Create a new order service
    #[must_use]
    pub fn new(orders: Arc<dyn OrderStore>, payment: Arc<dyn PaymentGatewayPort>) -> Self {
        Self { orders, payment }
    }

    /// Place an order and attempt payment
    ///
    /// The order row is written before payment runs and survives payment
    /// failure. Payment errors are reported in the outcome, not as `Err`.
    #[instrument(skip(self), fields(user_id, product = %product_name))]
    pub async fn create_order(
        &self,
        user_id: i64,
        product_name: &str,
        amount: f64,
    ) -> Result<OrderOutcome, ApplicationError> {
        info!(user_id, "Order creation request");

        let order_id = self
            .orders
            .insert(NewOrder {
                user_id,
                product_name: product_name.to_string(),
                amount,
            })
            .await?;

        match self.payment.process(order_id, amount).await {
            Ok(receipt) => {
                info!(order_id, transaction_id = %receipt.transaction_id, "Order completed successfully");
                Ok(OrderOutcome {
                    order_id,
                    payment: PaymentStatus::Completed,
                })
            },
            Err(e) => {
                error!(order_id, error = %e, "Payment failed for order");
                Ok(OrderOutcome {
                    order_id,
                    payment: PaymentStatus::Failed,
                })
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::mock;

    use super::*;
    use crate::ports::{PaymentError, PaymentReceipt};

    mock! {
        Orders {}

        #[async_trait]
        impl OrderStore for Orders {
            async fn insert(&self, order: NewOrder) -> Result<i64, ApplicationError>;
        }
    }

    mock! {
        Gateway {}

        #[async_trait]
        impl PaymentGatewayPort for Gateway {
            async fn process(
                &self,
                order_id: i64,
                amount: f64,
            ) -> Result<PaymentReceipt, PaymentError>;
        }
    }

    #[tokio::test]
    async fn successful_payment_reports_completed() {
        let mut orders = MockOrders::new();
        orders.expect_insert().returning(|_| Ok(42));
        let mut gateway = MockGateway::new();
        gateway.expect_process().returning(|order_id, _| {
            Ok(PaymentReceipt {
                transaction_id: format!("txn_{order_id}"),
            })
        });

        let svc = OrderService::new(Arc::new(orders), Arc::new(gateway));
        let outcome = svc.create_order(1, "widget", 9.99).await.unwrap();

        assert_eq!(outcome.order_id, 42);
        assert_eq!(outcome.payment, PaymentStatus::Completed);
    }

    #[tokio::test]
    async fn failed_payment_still_returns_order_id() {
        let mut orders = MockOrders::new();
        orders.expect_insert().returning(|_| Ok(7));
        let mut gateway = MockGateway::new();
        gateway
            .expect_process()
            .returning(|_, _| Err(PaymentError::Failed));

        let svc = OrderService::new(Arc::new(orders), Arc::new(gateway));
        let outcome = svc.create_order(1, "widget", 9.99).await.unwrap();

        assert_eq!(outcome.order_id, 7);
        assert_eq!(outcome.payment, PaymentStatus::Failed);
    }

    #[tokio::test]
    async fn timeout_reports_failed_payment() {
        let mut orders = MockOrders::new();
        orders.expect_insert().returning(|_| Ok(8));
        let mut gateway = MockGateway::new();
        gateway
            .expect_process()
            .returning(|_, _| Err(PaymentError::Timeout));

        let svc = OrderService::new(Arc::new(orders), Arc::new(gateway));
        let outcome = svc.create_order(1, "widget", 1.0).await.unwrap();

        assert_eq!(outcome.payment, PaymentStatus::Failed);
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let mut orders = MockOrders::new();
        orders
            .expect_insert()
            .returning(|_| Err(ApplicationError::Internal("db".to_string())));

        let svc = OrderService::new(Arc::new(orders), Arc::new(MockGateway::new()));
        let result = svc.create_order(1, "widget", 9.99).await;

        assert!(matches!(result, Err(ApplicationError::Internal(_))));
    }
}
