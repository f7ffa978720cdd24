//! Record model.
//!
//! This module provides the types every store operation is built on:
//!
//! - [`Doc`] - a record: an insertion-ordered mapping from field name to [`Value`]
//! - [`Value`] - everything a field can hold, including nested records and lists
//! - [`FieldPath`] - a parsed dot-path naming a value inside a record
//!
//! # Usage
//!
//! ```
//! use clubdb::doc::{Doc, FieldPath, Value};
//!
//! let mut schedule = Doc::new();
//! schedule.set("days", vec!["Monday", "Friday"]);
//!
//! let mut activity = Doc::new();
//! activity.set("max_participants", 12);
//! activity.set("schedule_details", schedule);
//!
//! let days = FieldPath::from("schedule_details.days");
//! assert_eq!(
//!     activity.get_path(&days),
//!     Some(&Value::from(vec!["Monday", "Friday"]))
//! );
//! assert_eq!(activity.get_as::<&str>("schedule_details.days.1"), Some("Friday"));
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub mod errors;
pub mod path;
pub mod value;

pub use errors::DocError;
pub use path::FieldPath;
pub use value::Value;

/// A record: an insertion-ordered mapping from field name to value.
///
/// Equality ignores field order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Doc {
    fields: IndexMap<String, Value>,
}

impl Doc {
    /// Creates a new empty record
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Returns true if this record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of top-level fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the given dot-path resolves to a value
    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.get(key).is_some()
    }

    /// Gets a value by key or dot-path.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Value> {
        self.get_path(&FieldPath::normalize(key.as_ref()))
    }

    /// Gets a mutable reference to a value by key or dot-path.
    pub fn get_mut(&mut self, key: impl AsRef<str>) -> Option<&mut Value> {
        self.get_path_mut(&FieldPath::normalize(key.as_ref()))
    }

    /// Gets a value by key or dot-path with conversion through `TryFrom`.
    ///
    /// Returns `None` when the path does not resolve or the value has another type.
    ///
    /// ```
    /// # use clubdb::doc::Doc;
    /// let mut doc = Doc::new();
    /// doc.set("display_name", "Mr. Chen");
    /// doc.set("max_participants", 12);
    ///
    /// assert_eq!(doc.get_as::<&str>("display_name"), Some("Mr. Chen"));
    /// assert_eq!(doc.get_as::<i64>("max_participants"), Some(12));
    /// assert_eq!(doc.get_as::<i64>("display_name"), None);
    /// ```
    pub fn get_as<'a, T>(&'a self, key: impl AsRef<str>) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = DocError>,
    {
        let value = self.get(key)?;
        T::try_from(value).ok()
    }

    /// Resolves a path by descending through records (by key) and lists (by index).
    ///
    /// The empty path resolves to nothing.
    pub fn get_path(&self, path: &FieldPath) -> Option<&Value> {
        let mut components = path.components();
        let mut current = self.fields.get(components.next()?)?;
        for segment in components {
            current = match current {
                Value::Doc(doc) => doc.fields.get(segment)?,
                Value::List(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Mutable counterpart of [`Doc::get_path`].
    pub fn get_path_mut(&mut self, path: &FieldPath) -> Option<&mut Value> {
        let mut components = path.components();
        let mut current = self.fields.get_mut(components.next()?)?;
        for segment in components {
            current = match current {
                Value::Doc(doc) => doc.fields.get_mut(segment)?,
                Value::List(items) => items.get_mut(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Sets a top-level field, returning the old value if present.
    ///
    /// The key is used verbatim; dots are not interpreted.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    /// Sets a value at a dot-path, creating intermediate records as needed.
    ///
    /// Writes go through records only: an intermediate that is missing or is not a
    /// record is replaced by an empty record.
    ///
    /// # Errors
    /// Returns [`DocError::InvalidPath`] for the empty path.
    pub fn set_path(
        &mut self,
        path: &FieldPath,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, DocError> {
        let segments: Vec<&str> = path.components().collect();
        let Some((last, parents)) = segments.split_last() else {
            return Err(DocError::InvalidPath {
                path: path.to_string(),
                reason: "cannot set the empty path".to_string(),
            });
        };

        let mut current = self;
        for segment in parents {
            let entry = current
                .fields
                .entry(segment.to_string())
                .or_insert(Value::Null);
            if !matches!(entry, Value::Doc(_)) {
                *entry = Value::Doc(Doc::new());
            }
            let Value::Doc(doc) = entry else {
                return Err(DocError::InvalidPath {
                    path: path.to_string(),
                    reason: format!("'{segment}' is not a record"),
                });
            };
            current = doc;
        }

        Ok(current.fields.insert(last.to_string(), value.into()))
    }

    /// Removes a top-level field, preserving the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.shift_remove(key)
    }

    /// Iterates over top-level fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Iterates over top-level field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }
}

impl<K, V> FromIterator<(K, V)> for Doc
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Doc {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Doc {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key:?}: {value}")?;
        }
        write!(f, "}}")
    }
}
