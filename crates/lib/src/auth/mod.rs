//! Credentials for account records.
//!
//! Account records never hold plaintext passwords, only the Argon2id hash
//! produced by [`hash_password`]. [`Instance::authenticate`](crate::Instance::authenticate)
//! checks a login attempt against it.

pub mod crypto;
pub mod errors;

// Re-export main types for easier access
pub use crypto::{hash_password, verify_password};
pub use errors::AuthError;
