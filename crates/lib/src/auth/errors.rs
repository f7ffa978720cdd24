//! Credential error types for the clubdb library.

use thiserror::Error as ThisError;

use crate::Error;

/// Errors that can occur while hashing or verifying account passwords.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum AuthError {
    /// The password does not match the stored hash.
    #[error("Invalid password")]
    InvalidPassword,

    /// The stored hash could not be parsed.
    #[error("Password verification failed")]
    PasswordVerificationFailed,

    /// Hashing a password failed.
    #[error("Password hashing failed: {reason}")]
    HashingFailed {
        /// Description of the hashing failure
        reason: String,
    },
}

impl AuthError {
    /// Check if this error means the caller supplied the wrong password.
    pub fn is_invalid_password(&self) -> bool {
        matches!(self, AuthError::InvalidPassword)
    }

    /// Check if this error points at a corrupt or unreadable stored hash.
    pub fn is_corrupt_hash(&self) -> bool {
        matches!(self, AuthError::PasswordVerificationFailed)
    }
}

impl From<AuthError> for Error {
    fn from(err: AuthError) -> Self {
        Error::Auth(err)
    }
}
