//! HTTP clients for the downstream services.
//!
//! Both clients target endpoints that are never genuinely reachable; the
//! payment gateway in particular is a deterministic two-branch fault
//! generator keyed on the `payment_timeout` switch, with the rehearsed log
//! lines layered on as side effects.

mod event_bus;
mod payment;

pub use event_bus::HttpEventBus;
pub use payment::HttpPaymentGateway;
