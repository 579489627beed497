//! Credential adapters: Argon2 password hashing and JWT bearer tokens.

mod password;
mod token;

pub use password::Argon2PasswordHasher;
pub use token::JwtTokenSigner;
