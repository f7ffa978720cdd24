//! In-memory document collections.
//!
//! A [`Collection`] maps a unique text identifier to a [`Doc`]. Every operation is
//! a key lookup or a linear scan in insertion order; there are no indexes. The
//! identifier is the mapping key, never a stored field: it is stripped from
//! records on insert and merged back in as `_id` on every record handed out.
//!
//! # Usage
//!
//! ```
//! use clubdb::{
//!     doc::Doc,
//!     query::{Query, Update},
//!     store::Collection,
//! };
//!
//! let activities = Collection::new("activities");
//!
//! let mut chess = Doc::new();
//! chess.set("_id", "Chess Club");
//! chess.set("max_participants", 12);
//! chess.set("participants", vec!["michael@mergington.edu"]);
//! activities.insert_one(chess)?;
//!
//! let result = activities.update_one(
//!     &Query::by_id("Chess Club"),
//!     &Update::new().push("participants", "ava@mergington.edu"),
//! );
//! assert_eq!(result.modified_count, 1);
//!
//! let chess = activities.find_one(&Query::by_id("Chess Club")).unwrap();
//! assert_eq!(chess.get_as::<&str>("_id"), Some("Chess Club"));
//! assert_eq!(chess.get_as::<&str>("participants.1"), Some("ava@mergington.edu"));
//! # Ok::<(), clubdb::Error>(())
//! ```

use std::collections::BTreeSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    constants::{ID_FIELD, SCHEDULE_DAYS},
    doc::{Doc, FieldPath, Value},
    query::{Query, Update},
};

pub mod errors;

pub use errors::StoreError;

type Records = IndexMap<String, Doc>;

/// Outcome of [`Collection::insert_one`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertOneResult {
    /// The identifier the record was stored under
    pub inserted_id: String,
}

/// Outcome of [`Collection::update_one`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResult {
    /// 1 if the query matched a record, otherwise 0
    pub matched_count: u64,
    /// 1 if the query matched a record, otherwise 0
    pub modified_count: u64,
}

/// A named, in-memory collection of records keyed by identifier.
///
/// All access goes through one lock per collection. Reads share it; inserts and
/// updates hold it exclusively for their whole lookup-then-write.
#[derive(Debug)]
pub struct Collection {
    name: String,
    records: RwLock<Records>,
}

/// Returns a copy of `doc` with the identifier merged in as the first field.
///
/// The key always wins over a stored `_id` field.
fn with_id(id: &str, doc: &Doc) -> Doc {
    std::iter::once((ID_FIELD.to_string(), Value::from(id)))
        .chain(
            doc.iter()
                .filter(|(k, _)| k.as_str() != ID_FIELD)
                .map(|(k, v)| (k.clone(), v.clone())),
        )
        .collect()
}

/// Finds the position of the first record matching `query`.
///
/// A query pinning an `_id` is answered with a key lookup; the remaining clauses
/// still have to hold.
fn position(records: &Records, query: &Query) -> Option<usize> {
    if let Some(id) = query.id() {
        let (index, key, doc) = records.get_full(id)?;
        return query.matches(key, doc).then_some(index);
    }
    records.iter().position(|(id, doc)| query.matches(id, doc))
}

impl Collection {
    /// Creates a new, empty collection.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: RwLock::new(IndexMap::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // A panic while the lock was held cannot leave a record half-written: every
    // mutation is a single map insert or an update applied to one record.
    fn read(&self) -> RwLockReadGuard<'_, Records> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Records> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of records in the collection.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Returns the first record matching `query`, with `_id` attached.
    ///
    /// Records are scanned in insertion order.
    pub fn find_one(&self, query: &Query) -> Option<Doc> {
        let records = self.read();
        let index = position(&records, query)?;
        let (id, doc) = records.get_index(index)?;
        Some(with_id(id, doc))
    }

    /// Returns every record matching `query`, in insertion order, with `_id` attached.
    pub fn find(&self, query: &Query) -> Vec<Doc> {
        let records = self.read();
        tracing::trace!(
            collection = %self.name,
            clauses = query.clauses().len(),
            scanned = records.len(),
            "Scanning collection"
        );
        records
            .iter()
            .filter(|(id, doc)| query.matches(id, doc))
            .map(|(id, doc)| with_id(id, doc))
            .collect()
    }

    /// Returns every record, in insertion order, with `_id` attached.
    pub fn find_all(&self) -> Vec<Doc> {
        self.find(&Query::new())
    }

    /// Inserts a record under its `_id`, replacing any record already stored there.
    ///
    /// The `_id` field is removed from the stored fields. A replaced record keeps its
    /// position in the iteration order.
    ///
    /// # Errors
    /// Returns [`StoreError::MissingId`] if the record has no `_id` and
    /// [`StoreError::InvalidId`] if its `_id` is not text.
    pub fn insert_one(&self, mut doc: Doc) -> Result<InsertOneResult> {
        let id = match doc.remove(ID_FIELD) {
            Some(Value::Text(id)) => id,
            Some(other) => {
                return Err(StoreError::InvalidId {
                    collection: self.name.clone(),
                    found: other.type_name().to_string(),
                }
                .into());
            }
            None => {
                return Err(StoreError::MissingId {
                    collection: self.name.clone(),
                }
                .into());
            }
        };

        let replaced = self.write().insert(id.clone(), doc).is_some();
        tracing::debug!(collection = %self.name, id = %id, replaced, "Inserted record");

        Ok(InsertOneResult { inserted_id: id })
    }

    /// Applies `update` to the first record matching `query`.
    ///
    /// Reports one matched and one modified record whenever the query matched, even
    /// if the directives left the record unchanged. A query that matches nothing
    /// leaves the collection untouched.
    pub fn update_one(&self, query: &Query, update: &Update) -> UpdateResult {
        let mut records = self.write();
        let Some(index) = position(&records, query) else {
            tracing::debug!(collection = %self.name, "Update matched no record");
            return UpdateResult::default();
        };
        let Some((id, doc)) = records.get_index_mut(index) else {
            return UpdateResult::default();
        };
        update.apply(doc);
        tracing::debug!(collection = %self.name, id = %id, "Updated record");

        UpdateResult {
            matched_count: 1,
            modified_count: 1,
        }
    }

    /// Counts the records matching `query`. Always equal to `find(query).len()`.
    pub fn count_documents(&self, query: &Query) -> usize {
        self.read()
            .iter()
            .filter(|(id, doc)| query.matches(id, doc))
            .count()
    }

    /// Collects the distinct text elements of the list at `path` across all records.
    ///
    /// Records where the path is missing or not a list, and list elements that are
    /// not text, are skipped. The result is sorted.
    pub fn distinct_text(&self, path: impl Into<FieldPath>) -> Vec<String> {
        let path = path.into();
        let records = self.read();
        let values: BTreeSet<&str> = records
            .values()
            .filter_map(|doc| doc.get_path(&path)?.as_list())
            .flatten()
            .filter_map(Value::as_text)
            .collect();
        values.into_iter().map(str::to_string).collect()
    }

    /// Sorted distinct weekdays any activity is scheduled on.
    pub fn aggregate_distinct_days(&self) -> Vec<String> {
        self.distinct_text(SCHEDULE_DAYS)
    }
}
