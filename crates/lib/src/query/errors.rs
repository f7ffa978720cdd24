//! Error types for parsing queries and updates.
//!
//! Matching itself never fails. These errors only come out of the JSON parsers in
//! [`json`](super::json), where an operator the store does not understand is
//! rejected instead of silently matching nothing.

use thiserror::Error;

use crate::doc::DocError;

/// Errors produced while parsing a JSON query or update document.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The document, or an operator's operand, had to be a JSON object
    #[error("Expected a JSON object for {context}")]
    NotAnObject { context: String },

    /// An operator outside the supported set
    #[error("Unsupported operator '{operator}'")]
    UnsupportedOperator { operator: String },

    /// An operator was given an operand of the wrong shape
    #[error("Invalid operand for '{operator}': {reason}")]
    InvalidOperand { operator: String, reason: String },

    /// A field path or value could not be represented
    #[error(transparent)]
    Doc(#[from] DocError),
}

impl QueryError {
    /// Check if this error names an operator the store does not support
    pub fn is_unsupported(&self) -> bool {
        matches!(self, QueryError::UnsupportedOperator { .. })
    }

    /// Check if this error is about the shape of the input
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            QueryError::NotAnObject { .. } | QueryError::InvalidOperand { .. }
        )
    }

    /// Get the operator name if this error concerns one
    pub fn operator(&self) -> Option<&str> {
        match self {
            QueryError::UnsupportedOperator { operator }
            | QueryError::InvalidOperand { operator, .. } => Some(operator),
            _ => None,
        }
    }
}

impl From<QueryError> for crate::Error {
    fn from(err: QueryError) -> Self {
        crate::Error::Query(err)
    }
}
