//! Seed data for an [`Instance`](super::Instance).
//!
//! Fixtures are plain JSON:
//!
//! ```json
//! {
//!   "activities": {
//!     "Chess Club": {"max_participants": 12, "participants": [], "schedule_details": {"days": ["Monday"]}}
//!   },
//!   "teachers": [
//!     {"username": "mchen", "display_name": "Mr. Chen", "password": "chess456", "role": "teacher"}
//!   ]
//! }
//! ```
//!
//! Activity names become the activity records' identifiers. Teacher passwords are
//! plaintext in the fixture and are hashed before anything is stored.

use std::{fmt, path::Path};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::errors::InstanceError;
use crate::{
    Result,
    auth::hash_password,
    constants::{ACTIVITIES, ID_FIELD, TEACHERS},
    doc::Doc,
};

/// The Mergington High School catalog shipped with the library.
const DEFAULT_CATALOG: &str = include_str!("../../fixtures/default.json");

fn default_role() -> String {
    "teacher".to_string()
}

/// Seed catalog of activities and accounts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fixtures {
    /// Activity records keyed by activity name
    #[serde(default)]
    pub activities: IndexMap<String, Doc>,
    /// Teacher and administrator accounts
    #[serde(default)]
    pub teachers: Vec<TeacherFixture>,
}

impl Fixtures {
    /// The built-in catalog: 12 activities and 3 accounts.
    pub fn default_catalog() -> Result<Self> {
        Self::from_json_str(DEFAULT_CATALOG)
    }

    /// Parses fixtures from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads fixtures from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Builds the activity records, each carrying its name as `_id`.
    pub(crate) fn activity_records(&self) -> Result<Vec<Doc>> {
        self.activities
            .iter()
            .map(|(name, details)| -> Result<Doc> {
                if name.is_empty() {
                    return Err(InstanceError::InvalidFixture {
                        collection: ACTIVITIES.to_string(),
                        reason: "activity name is empty".to_string(),
                    }
                    .into());
                }
                let mut record: Doc = details
                    .iter()
                    .filter(|(key, _)| key.as_str() != ID_FIELD)
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                record.set(ID_FIELD, name);
                Ok(record)
            })
            .collect()
    }
}

/// An account as written in a fixture file.
///
/// The plaintext password is wiped from memory when the fixture is dropped.
#[derive(Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct TeacherFixture {
    pub username: String,
    pub display_name: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: String,
}

impl fmt::Debug for TeacherFixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TeacherFixture")
            .field("username", &self.username)
            .field("display_name", &self.display_name)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

impl TeacherFixture {
    /// Builds the account record, keyed by username, with the password hashed.
    pub fn to_record(&self) -> Result<Doc> {
        if self.username.is_empty() {
            return Err(InstanceError::InvalidFixture {
                collection: TEACHERS.to_string(),
                reason: format!("account '{}' has an empty username", self.display_name),
            }
            .into());
        }

        let mut record = Doc::new();
        record.set(ID_FIELD, &self.username);
        record.set("username", &self.username);
        record.set("display_name", &self.display_name);
        record.set("password", hash_password(&self.password)?);
        record.set("role", &self.role);
        Ok(record)
    }
}
