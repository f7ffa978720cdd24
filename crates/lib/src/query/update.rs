//! Partial record updates.

use crate::{
    constants::ID_FIELD,
    doc::{Doc, FieldPath, Value},
};

/// Directives that address the identifier are never applied.
fn targets_id(path: &FieldPath) -> bool {
    path.components().next() == Some(ID_FIELD)
}

/// Push, pull and set directives for a single record.
///
/// Directives are applied in a fixed order regardless of how they were added:
/// every push, then every pull, then every set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Update {
    push: Vec<(FieldPath, Value)>,
    pull: Vec<(FieldPath, Value)>,
    set: Vec<(FieldPath, Value)>,
}

impl Update {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` to the list at `path`, creating the list if it is absent.
    pub fn push(mut self, path: impl Into<FieldPath>, value: impl Into<Value>) -> Self {
        self.push.push((path.into(), value.into()));
        self
    }

    /// Removes the first element equal to `value` from the list at `path`.
    pub fn pull(mut self, path: impl Into<FieldPath>, value: impl Into<Value>) -> Self {
        self.pull.push((path.into(), value.into()));
        self
    }

    /// Overwrites the value at `path`.
    pub fn set(mut self, path: impl Into<FieldPath>, value: impl Into<Value>) -> Self {
        self.set.push((path.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.push.is_empty() && self.pull.is_empty() && self.set.is_empty()
    }

    /// Applies every directive to `doc`.
    ///
    /// Pushing onto a value that is not a list, pulling from a missing or non-list
    /// field, and pulling a value the list does not contain leave the record as it
    /// was. Directives on `_id` (or anything below it) are skipped: the identifier
    /// is the collection key and cannot be changed by an update.
    pub fn apply(&self, doc: &mut Doc) {
        let directives = self.push.iter().chain(&self.pull).chain(&self.set);
        for (path, _) in directives.filter(|(path, _)| targets_id(path)) {
            tracing::warn!(path = %path, "Ignoring update of the record identifier");
        }

        for (path, value) in self.push.iter().filter(|(path, _)| !targets_id(path)) {
            match doc.get_path_mut(path) {
                Some(Value::List(items)) => items.push(value.clone()),
                Some(other) => {
                    tracing::warn!(
                        path = %path,
                        found = other.type_name(),
                        "Ignoring push onto a field that is not a list"
                    );
                }
                None => {
                    if let Err(e) = doc.set_path(path, Value::List(vec![value.clone()])) {
                        tracing::warn!(path = %path, "Ignoring push: {e}");
                    }
                }
            }
        }

        for (path, value) in self.pull.iter().filter(|(path, _)| !targets_id(path)) {
            if let Some(items) = doc.get_path_mut(path).and_then(Value::as_list_mut)
                && let Some(index) = items.iter().position(|item| item == value)
            {
                items.remove(index);
            }
        }

        for (path, value) in self.set.iter().filter(|(path, _)| !targets_id(path)) {
            if let Err(e) = doc.set_path(path, value.clone()) {
                tracing::warn!(path = %path, "Ignoring set: {e}");
            }
        }
    }
}
