//! Payment gateway client.

use std::time::Duration;

use application::ports::{PaymentError, PaymentGatewayPort, PaymentReceipt};
use async_trait::async_trait;
use serde::Serialize;
use tracing::{error, info};

/// How long the timeout branch stalls before giving up
const SIMULATED_STALL: Duration = Duration::from_secs(6);

#[derive(Serialize)]
struct PaymentRequest {
    order_id: i64,
    amount: f64,
    currency: &'static str,
}

/// Reqwest-based payment gateway
///
/// With `simulate_timeout` set, every call stalls for six seconds and fails
/// with a timeout without touching the network. Otherwise a single POST is
/// attempted against the configured endpoint; a transport failure produces
/// the rehearsed retry and downstream stack-trace log lines before failing.
/// There is no real retry loop.
pub struct HttpPaymentGateway {
    client: reqwest::Client,
    base_url: String,
    simulate_timeout: bool,
}

impl std::fmt::Debug for HttpPaymentGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpPaymentGateway")
            .field("base_url", &self.base_url)
            .field("simulate_timeout", &self.simulate_timeout)
            .finish_non_exhaustive()
    }
}

impl HttpPaymentGateway {
    /// Create a gateway targeting the given base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout: Duration, simulate_timeout: bool) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.into(),
            simulate_timeout,
        }
    }

}

/// Emit the rehearsed retry and downstream stack-trace lines
///
/// Logging only; no request is re-attempted.
fn log_simulated_retry(order_id: i64) {
    info!("Retrying payment request for order_id={order_id}");
    info!("Retry attempt 1/3");
    error!("Payment gateway returned 500: \"Transaction declined by provider\"");
    error!("java.lang.NullPointerException");
    error!("    at com.ecommerce.payment.PaymentProcessor.process(PaymentProcessor.java:142)");
    error!("    at com.ecommerce.billing.BillingService.chargeUser(BillingService.java:85)");
}

#[async_trait]
impl PaymentGatewayPort for HttpPaymentGateway {
    async fn process(
        &self,
        order_id: i64,
        amount: f64,
    ) -> Result<PaymentReceipt, PaymentError> {
        info!(order_id, amount, "Processing payment for order {order_id}: amount=${amount}");

        if self.simulate_timeout {
            info!("Calling payment service: POST {}/process", self.base_url);
            tokio::time::sleep(SIMULATED_STALL).await;
            error!(
                "Timeout while calling payment-service: POST {}/process - took 6000ms",
                self.base_url
            );
            return Err(PaymentError::Timeout);
        }

        let request = PaymentRequest {
            order_id,
            amount,
            currency: "USD",
        };

        let response = self
            .client
            .post(format!("{}/process", self.base_url))
            .json(&request)
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => Ok(PaymentReceipt {
                transaction_id: format!("txn_{order_id}"),
            }),
            Ok(resp) => {
                error!(
                    "Payment gateway returned {}: \"Transaction declined by provider\"",
                    resp.status().as_u16()
                );
                Err(PaymentError::Declined)
            }
            Err(e) => {
                error!("Payment service connection failed: {e}");
                log_simulated_retry(order_id);
                Err(PaymentError::Failed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn successful_payment_returns_receipt() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/process"))
            .and(body_partial_json(serde_json::json!({
                "order_id": 7,
                "currency": "USD"
            })))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let gateway = HttpPaymentGateway::new(server.uri(), Duration::from_secs(5), false);
        let receipt = gateway.process(7, 9.99).await.unwrap();
        assert_eq!(receipt.transaction_id, "txn_7");
    }

    #[tokio::test]
    async fn non_success_status_is_declined() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/process"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let gateway = HttpPaymentGateway::new(server.uri(), Duration::from_secs(5), false);
        let result = gateway.process(7, 9.99).await;
        assert!(matches!(result, Err(PaymentError::Declined)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_fails_after_simulated_retries() {
        // Port 1 is never listening
        let gateway =
            HttpPaymentGateway::new("http://127.0.0.1:1", Duration::from_secs(5), false);
        let result = gateway.process(7, 9.99).await;
        assert!(matches!(result, Err(PaymentError::Failed)));
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_branch_stalls_six_seconds_then_times_out() {
        let gateway =
            HttpPaymentGateway::new("http://api.payments.internal", Duration::from_secs(5), true);

        let started = tokio::time::Instant::now();
        let result = gateway.process(7, 9.99).await;
        assert!(matches!(result, Err(PaymentError::Timeout)));
        assert_eq!(started.elapsed(), Duration::from_secs(6));
    }
}
