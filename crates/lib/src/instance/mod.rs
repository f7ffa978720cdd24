//!
//! Provides [`Instance`], the owner of the two collections the signup service works
//! with: the activity catalog and the teacher accounts.
//!
//! An `Instance` is constructed explicitly and handed to whatever layer serves
//! requests; there are no process-wide collections.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    auth::{AuthError, verify_password},
    constants::{ACTIVITIES, TEACHERS},
    doc::Doc,
    query::Query,
    store::Collection,
};

pub mod errors;
pub mod fixtures;

pub use errors::InstanceError;
pub use fixtures::{Fixtures, TeacherFixture};

/// Number of records written by [`Instance::init`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedReport {
    pub activities: usize,
    pub teachers: usize,
}

/// Internal state for Instance
#[derive(Debug)]
struct InstanceInternal {
    activities: Collection,
    teachers: Collection,
}

/// The activity and account collections of one signup service.
///
/// Instance is a cheap-to-clone handle around `Arc<InstanceInternal>`; clones share
/// the same collections.
///
/// ## Example
///
/// ```
/// # use clubdb::{Instance, Fixtures, query::Query};
/// let fixtures = Fixtures::from_json_str(r#"{
///     "activities": {"Chess Club": {"max_participants": 12, "participants": []}}
/// }"#)?;
/// let instance = Instance::open(&fixtures)?;
///
/// let chess = instance.activities().find_one(&Query::by_id("Chess Club")).unwrap();
/// assert_eq!(chess.get_as::<i64>("max_participants"), Some(12));
/// # Ok::<(), clubdb::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    inner: Arc<InstanceInternal>,
}

impl Default for Instance {
    fn default() -> Self {
        Self::new()
    }
}

impl Instance {
    /// Creates an instance with both collections empty.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(InstanceInternal {
                activities: Collection::new(ACTIVITIES),
                teachers: Collection::new(TEACHERS),
            }),
        }
    }

    /// Creates an instance and seeds it from `fixtures`.
    pub fn open(fixtures: &Fixtures) -> Result<Self> {
        let instance = Self::new();
        instance.init(fixtures)?;
        Ok(instance)
    }

    /// Seeds each collection from `fixtures` if, and only if, it is empty.
    ///
    /// Calling this on an instance that is already populated writes nothing, so
    /// records mutated since the first seeding are never reset.
    pub fn init(&self, fixtures: &Fixtures) -> Result<SeedReport> {
        let mut report = SeedReport::default();

        if self.activities().is_empty() {
            for record in fixtures.activity_records()? {
                self.activities().insert_one(record)?;
                report.activities += 1;
            }
        }

        if self.teachers().is_empty() {
            for teacher in &fixtures.teachers {
                self.teachers().insert_one(teacher.to_record()?)?;
                report.teachers += 1;
            }
        }

        tracing::info!(
            activities = report.activities,
            teachers = report.teachers,
            "Instance initialized"
        );
        Ok(report)
    }

    /// The activity catalog, keyed by activity name.
    pub fn activities(&self) -> &Collection {
        &self.inner.activities
    }

    /// Teacher and administrator accounts, keyed by username.
    pub fn teachers(&self) -> &Collection {
        &self.inner.teachers
    }

    /// Checks a login attempt.
    ///
    /// Returns the account record, without its password hash, when `password`
    /// matches. Unknown usernames, accounts without a password and wrong passwords
    /// all return `Ok(None)`.
    ///
    /// # Errors
    /// Returns an error if the stored hash cannot be parsed.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Option<Doc>> {
        let Some(mut account) = self.teachers().find_one(&Query::by_id(username)) else {
            tracing::debug!(username, "Login for unknown account");
            return Ok(None);
        };
        let Some(hash) = account.remove("password") else {
            return Ok(None);
        };
        let Some(hash) = hash.as_text() else {
            return Ok(None);
        };

        match verify_password(password, hash) {
            Ok(()) => Ok(Some(account)),
            Err(Error::Auth(AuthError::InvalidPassword)) => {
                tracing::debug!(username, "Login with wrong password");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
