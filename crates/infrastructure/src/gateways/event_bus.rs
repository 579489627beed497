//! Event bus client for logout events.

use std::time::Duration;

use application::ApplicationError;
use application::ports::EventBusPort;
use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, error};
use uuid::Uuid;

#[derive(Serialize)]
struct LogoutEvent {
    event_type: &'static str,
    event_id: Uuid,
    user_id: i64,
    timestamp: String,
}

/// Reqwest-based event bus publisher
///
/// The configured bus is not reachable in practice; every caller treats
/// publish failures as best-effort and continues.
pub struct HttpEventBus {
    client: reqwest::Client,
    base_url: String,
}

impl std::fmt::Debug for HttpEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpEventBus")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl HttpEventBus {
    /// Create a publisher targeting the given base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl EventBusPort for HttpEventBus {
    async fn publish_logout(&self, user_id: i64) -> Result<(), ApplicationError> {
        let event = LogoutEvent {
            event_type: "user_logout",
            event_id: Uuid::new_v4(),
            user_id,
            timestamp: Utc::now().to_rfc3339(),
        };

        let result = self
            .client
            .post(format!("{}/events", self.base_url))
            .json(&event)
            .send()
            .await;

        match result {
            Ok(resp) if resp.status().is_success() => {
                debug!(user_id, "Logout event published");
                Ok(())
            }
            Ok(resp) => {
                error!(
                    user_id,
                    status = resp.status().as_u16(),
                    "Event bus rejected logout event"
                );
                Err(ApplicationError::ExternalService(
                    "event bus rejected event".to_string(),
                ))
            }
            Err(e) => {
                error!("Failed to send logout event to event-bus: {e}");
                Err(ApplicationError::ExternalService(e.to_string()))
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
    async fn publishes_logout_event() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/events"))
            .and(body_partial_json(serde_json::json!({
                "event_type": "user_logout",
                "user_id": 42
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let bus = HttpEventBus::new(server.uri(), Duration::from_secs(2));
        bus.publish_logout(42).await.unwrap();
    }

    #[tokio::test]
    async fn unreachable_bus_is_an_error() {
        let bus = HttpEventBus::new("http://127.0.0.1:1", Duration::from_secs(2));
        let result = bus.publish_logout(42).await;
        assert!(matches!(result, Err(ApplicationError::ExternalService(_))));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/events"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let bus = HttpEventBus::new(server.uri(), Duration::from_secs(2));
        let result = bus.publish_logout(42).await;
        assert!(result.is_err());
    }
}
