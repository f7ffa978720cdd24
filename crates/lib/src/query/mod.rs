//! Queries and updates over records.
//!
//! A [`Query`] is an ordered list of [`Clause`]s, each pairing a [`FieldPath`]
//! with a [`Condition`]. A record matches when every clause holds. There is no OR,
//! NOT or pattern matching.
//!
//! An [`Update`] lists push, pull and set directives that
//! [`Collection::update_one`](crate::store::Collection::update_one) applies to the
//! first matching record.
//!
//! # Usage
//!
//! ```
//! use clubdb::query::{Query, Update};
//!
//! // Activities meeting on a weekend that start no earlier than 10:00
//! let query = Query::new()
//!     .is_in("schedule_details.days", ["Saturday", "Sunday"])
//!     .gte("schedule_details.start_time", "10:00");
//! assert_eq!(query.clauses().len(), 2);
//!
//! let update = Update::new().push("participants", "ava@mergington.edu");
//! assert!(!update.is_empty());
//! ```

use std::{borrow::Cow, cmp::Ordering};

use crate::{
    constants::ID_FIELD,
    doc::{Doc, FieldPath, Value},
};

pub mod errors;
pub mod json;
pub mod update;

pub use errors::QueryError;
pub use update::Update;

/// The test a clause applies to the value found at its path.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// The value equals this one (deep structural equality)
    Equals(Value),
    /// The value is a list sharing at least one element with these candidates
    In(Vec<Value>),
    /// The value is ordered at or above this bound
    Min(Value),
    /// The value is ordered at or below this bound
    Max(Value),
}

impl Condition {
    /// Tests a resolved value.
    ///
    /// Bounds only hold between values of the same scalar type; see
    /// [`Value::compare`].
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Condition::Equals(expected) => value == expected,
            Condition::In(candidates) => value
                .as_list()
                .is_some_and(|items| items.iter().any(|item| candidates.contains(item))),
            Condition::Min(bound) => matches!(
                value.compare(bound),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            Condition::Max(bound) => {
                matches!(value.compare(bound), Some(Ordering::Less | Ordering::Equal))
            }
        }
    }
}

/// One `(path, condition)` pair of a query.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub path: FieldPath,
    pub condition: Condition,
}

impl Clause {
    pub fn new(path: impl Into<FieldPath>, condition: Condition) -> Self {
        Self {
            path: path.into(),
            condition,
        }
    }

    /// Tests the record stored under `id`.
    ///
    /// The path `_id` resolves to the identifier; any other path is resolved
    /// inside the record, and a path that does not resolve never matches.
    pub fn matches(&self, id: &str, doc: &Doc) -> bool {
        let value = if self.path.as_str() == ID_FIELD {
            Cow::Owned(Value::Text(id.to_string()))
        } else {
            match doc.get_path(&self.path) {
                Some(value) => Cow::Borrowed(value),
                None => return false,
            }
        };
        self.condition.matches(&value)
    }
}

/// A conjunction of clauses. The empty query matches every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    clauses: Vec<Clause>,
}

impl Query {
    /// Creates a query matching every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a query for the record stored under `id`.
    pub fn by_id(id: impl Into<String>) -> Self {
        let id: String = id.into();
        Self::new().eq(ID_FIELD, id)
    }

    /// Adds a clause.
    pub fn and(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Adds an equality clause.
    pub fn eq(self, path: impl Into<FieldPath>, value: impl Into<Value>) -> Self {
        self.and(Clause::new(path, Condition::Equals(value.into())))
    }

    /// Adds a list-membership clause.
    pub fn is_in<I>(self, path: impl Into<FieldPath>, candidates: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let candidates = candidates.into_iter().map(Into::into).collect();
        self.and(Clause::new(path, Condition::In(candidates)))
    }

    /// Adds an inclusive lower bound.
    pub fn gte(self, path: impl Into<FieldPath>, bound: impl Into<Value>) -> Self {
        self.and(Clause::new(path, Condition::Min(bound.into())))
    }

    /// Adds an inclusive upper bound.
    pub fn lte(self, path: impl Into<FieldPath>, bound: impl Into<Value>) -> Self {
        self.and(Clause::new(path, Condition::Max(bound.into())))
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The identifier this query pins, if any.
    ///
    /// This is the first `_id` equality clause with a text value. A collection
    /// uses it to replace the scan with a key lookup.
    pub fn id(&self) -> Option<&str> {
        self.clauses.iter().find_map(|clause| {
            match (&clause.condition, clause.path.as_str() == ID_FIELD) {
                (Condition::Equals(Value::Text(id)), true) => Some(id.as_str()),
                _ => None,
            }
        })
    }

    /// Tests the record stored under `id` against every clause.
    pub fn matches(&self, id: &str, doc: &Doc) -> bool {
        self.clauses.iter().all(|clause| clause.matches(id, doc))
    }
}
