//! Error types for collection operations.
//!
//! Lookups that find nothing and updates that match nothing are not errors; they
//! come back as `None` or zero counts. The variants here are programmer errors
//! that should surface immediately.

use thiserror::Error;

/// Errors returned by [`Collection`](super::Collection) operations.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A record was inserted without an identifier
    #[error("Record inserted into '{collection}' has no '_id' field")]
    MissingId { collection: String },

    /// A record was inserted with an identifier that is not text
    #[error("Record inserted into '{collection}' has a non-text '_id' ({found})")]
    InvalidId { collection: String, found: String },
}

impl StoreError {
    /// Check if this error is about a record's identifier
    pub fn is_id_error(&self) -> bool {
        matches!(
            self,
            StoreError::MissingId { .. } | StoreError::InvalidId { .. }
        )
    }

    /// Get the collection name associated with this error
    pub fn collection(&self) -> &str {
        match self {
            StoreError::MissingId { collection } | StoreError::InvalidId { collection, .. } => {
                collection
            }
        }
    }
}

impl From<StoreError> for crate::Error {
    fn from(err: StoreError) -> Self {
        crate::Error::Store(err)
    }
}
