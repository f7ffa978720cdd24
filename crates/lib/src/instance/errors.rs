//! Instance error types for the clubdb library.

use thiserror::Error;

/// Errors that can occur while loading fixtures or seeding an instance.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstanceError {
    /// A fixture entry cannot be turned into a record.
    #[error("Invalid fixture in '{collection}': {reason}")]
    InvalidFixture {
        /// The collection the fixture was meant for
        collection: String,
        /// Why the fixture was rejected
        reason: String,
    },
}

impl InstanceError {
    /// Check if this error is caused by bad fixture data
    pub fn is_fixture_error(&self) -> bool {
        matches!(self, InstanceError::InvalidFixture { .. })
    }
}

impl From<InstanceError> for crate::Error {
    fn from(err: InstanceError) -> Self {
        crate::Error::Instance(err)
    }
}
