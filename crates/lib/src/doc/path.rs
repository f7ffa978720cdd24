//! Dot-separated field paths.
//!
//! A [`FieldPath`] names a value inside a record by descending through nested
//! records (by key) and lists (by numeric index): `schedule_details.days` or
//! `participants.0`. Every query clause and update directive carries one, and all
//! of them are resolved by the same helpers on [`Doc`](super::Doc).
//!
//! # Usage
//!
//! ```rust
//! use clubdb::doc::FieldPath;
//! use std::str::FromStr;
//!
//! // Lenient construction normalizes stray dots
//! let path = FieldPath::from("schedule_details..days.");
//! assert_eq!(path.as_str(), "schedule_details.days");
//!
//! // Strict parsing rejects them
//! assert!(FieldPath::from_str("schedule_details..days").is_err());
//!
//! let components: Vec<&str> = path.components().collect();
//! assert_eq!(components, vec!["schedule_details", "days"]);
//! ```

use std::{fmt, str::FromStr};

use super::errors::DocError;

/// Normalizes a path string by dropping empty components.
///
/// - Empty string "" → empty string
/// - Leading dots ".days" → "days"
/// - Trailing dots "days." → "days"
/// - Consecutive dots "a..b" → "a.b"
///
/// ```rust
/// # use clubdb::doc::path::normalize_path;
/// assert_eq!(normalize_path(""), "");
/// assert_eq!(normalize_path(".days"), "days");
/// assert_eq!(normalize_path("a..b."), "a.b");
/// assert_eq!(normalize_path("..."), "");
/// ```
pub fn normalize_path(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    input
        .split('.')
        .filter(|component| !component.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// An owned, normalized path into a record.
///
/// The empty path is representable (it is what `FieldPath::from("")` yields) but
/// resolves to nothing, so a query clause built on it never matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    inner: String,
}

impl FieldPath {
    /// Creates a path by normalizing the input string. Never fails.
    pub fn normalize(path: &str) -> Self {
        Self {
            inner: normalize_path(path),
        }
    }

    /// Parses a path, rejecting empty paths and empty components.
    pub fn parse(path: &str) -> Result<Self, DocError> {
        if path.is_empty() {
            return Err(DocError::InvalidPath {
                path: path.to_string(),
                reason: "path is empty".to_string(),
            });
        }
        if path.split('.').any(str::is_empty) {
            return Err(DocError::InvalidPath {
                path: path.to_string(),
                reason: "path contains an empty component".to_string(),
            });
        }
        Ok(Self {
            inner: path.to_string(),
        })
    }

    /// Appends a path to the end of this one, normalizing the input.
    pub fn push(mut self, path: impl AsRef<str>) -> Self {
        let normalized = normalize_path(path.as_ref());
        if normalized.is_empty() {
            return self;
        }
        if self.inner.is_empty() {
            self.inner = normalized;
        } else {
            self.inner.push('.');
            self.inner.push_str(&normalized);
        }
        self
    }

    /// Returns an iterator over the path components.
    pub fn components(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.inner.split('.').filter(|s| !s.is_empty())
    }

    /// Returns the number of components in the path.
    pub fn len(&self) -> usize {
        self.components().count()
    }

    /// Returns `true` if the path has no components.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns `true` if this path names a single top-level field.
    pub fn is_top_level(&self) -> bool {
        !self.inner.is_empty() && !self.inner.contains('.')
    }

    /// Returns the last component, or `None` if empty.
    pub fn last(&self) -> Option<&str> {
        self.components().next_back()
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl FromStr for FieldPath {
    type Err = DocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<&str> for FieldPath {
    fn from(s: &str) -> Self {
        Self::normalize(s)
    }
}

impl From<String> for FieldPath {
    fn from(s: String) -> Self {
        Self::normalize(&s)
    }
}

impl From<&String> for FieldPath {
    fn from(s: &String) -> Self {
        Self::normalize(s)
    }
}

impl From<&FieldPath> for FieldPath {
    fn from(path: &FieldPath) -> Self {
        path.clone()
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}
