//! Error types for record operations.
//!
//! This module defines structured error types for path parsing and value
//! conversion on [`Doc`](super::Doc) records.

use thiserror::Error;

/// Structured error types for record operations.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocError {
    /// A dot-path could not be parsed
    #[error("Invalid field path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// Type mismatch when converting a value
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// A value could not be represented in a record
    #[error("Invalid value: {reason}")]
    InvalidValue { reason: String },
}

impl DocError {
    /// Check if this error is related to path parsing
    pub fn is_path_error(&self) -> bool {
        matches!(self, DocError::InvalidPath { .. })
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, DocError::TypeMismatch { .. })
    }

    /// Check if this error is related to unrepresentable values
    pub fn is_value_error(&self) -> bool {
        matches!(self, DocError::InvalidValue { .. })
    }
}

impl From<DocError> for crate::Error {
    fn from(err: DocError) -> Self {
        crate::Error::Doc(err)
    }
}
