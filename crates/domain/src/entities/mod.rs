//! Domain entities

mod order;
mod session;
mod user;

pub use order::{NewOrder, Order, OrderStatus, PaymentStatus};
pub use session::{NewSession, Session};
pub use user::{NewUser, User};
