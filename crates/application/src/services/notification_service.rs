//! Notification service
//!
//! Pure simulation: no mail is ever delivered on either branch. The
//! email-failure switch selects between a scripted SMTP-style failure and an
//! unconditional success.

use tracing::{error, info, instrument};

use crate::error::ApplicationError;

/// Service simulating email notification delivery
#[derive(Debug, Clone)]
pub struct NotificationService {
    simulate_failure: bool,
}

impl NotificationService {
    /// Create a new notification service
    ///
    /// `simulate_failure` comes from the immutable email-failure switch.
    #[must_use]
    pub const fn new(simulate_failure: bool) -> Self {
        Self { simulate_failure }
    }

    /// Simulate sending a notification email
    #[instrument(skip(self, _message))]
    pub fn send(&self, email: Option<&str>, _message: Option<&str>) -> Result<(), ApplicationError> {
        let recipient = email.unwrap_or("unknown");
        info!(recipient, "Sending notification");

        if self.simulate_failure {
            error!("SMTP server not responding: [Errno 110] Connection timed out");
            error!(recipient, "Failed to send notification email");
            return Err(ApplicationError::ExternalService(
                "Failed to send notification".to_string(),
            ));
        }

        info!(recipient, "Notification sent successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_succeeds_when_failure_disabled() {
        let svc = NotificationService::new(false);
        assert!(svc.send(Some("a@x.com"), Some("hi")).is_ok());
    }

    #[test]
    fn send_fails_when_failure_enabled() {
        let svc = NotificationService::new(true);
        let result = svc.send(Some("a@x.com"), Some("hi"));
        assert!(matches!(result, Err(ApplicationError::ExternalService(_))));
    }

    #[test]
    fn missing_recipient_is_tolerated() {
        let svc = NotificationService::new(false);
        assert!(svc.send(None, None).is_ok());
    }
}
