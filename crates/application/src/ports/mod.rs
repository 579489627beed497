//! Ports (interfaces) implemented by the infrastructure layer

mod event_bus;
mod order_store;
mod password_hasher;
mod payment_gateway;
mod session_store;
mod token_signer;
mod user_store;

pub use event_bus::EventBusPort;
pub use order_store::OrderStore;
pub use password_hasher::PasswordHasherPort;
pub use payment_gateway::{PaymentError, PaymentGatewayPort, PaymentReceipt};
pub use session_store::SessionStore;
pub use token_signer::{TokenError, TokenSignerPort};
pub use user_store::UserStore;
