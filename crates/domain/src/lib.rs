//! Domain layer for FaultMart
//!
//! Contains the store's core entities and domain errors. This layer has no
//! external service dependencies and defines the ubiquitous language.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::DomainError;
