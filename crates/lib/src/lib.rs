//!
//! clubdb: the in-memory document store behind the Mergington High School
//! activity signup service.
//!
//! ## Core Concepts
//!
//! * **Records (`doc::Doc`)**: Insertion-ordered field-to-value mappings. Values
//!   (`doc::Value`) are null, booleans, integers, text, nested records or lists.
//! * **Field paths (`doc::FieldPath`)**: Dot-separated references such as
//!   `schedule_details.days`, resolved through nested records and lists.
//! * **Queries (`query::Query`)**: Conjunctions of equality, list-membership (`$in`)
//!   and inclusive bound (`$gte`/`$lte`) clauses.
//! * **Updates (`query::Update`)**: Push, pull and set directives applied to one record.
//! * **Collections (`store::Collection`)**: Identifier-keyed record maps answering
//!   queries by key lookup or linear scan.
//! * **Instance (`Instance`)**: The activity and teacher collections of one service,
//!   seeded from `Fixtures`.

pub mod auth;
pub mod constants;
pub mod doc;
pub mod instance;
pub mod query;
pub mod store;

pub use doc::{Doc, FieldPath, Value};
pub use instance::{Fixtures, Instance, SeedReport};
pub use query::{Query, Update};
pub use store::{Collection, InsertOneResult, UpdateResult};

/// Result type used throughout the clubdb library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the clubdb library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured record errors from the doc module
    #[error(transparent)]
    Doc(doc::DocError),

    /// Structured parse errors from the query module
    #[error(transparent)]
    Query(query::QueryError),

    /// Structured collection errors from the store module
    #[error(transparent)]
    Store(store::StoreError),

    /// Structured credential errors from the auth module
    #[error(transparent)]
    Auth(auth::AuthError),

    /// Structured seeding errors from the instance module
    #[error(transparent)]
    Instance(instance::InstanceError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
            Error::Doc(_) => "doc",
            Error::Query(_) => "query",
            Error::Store(_) => "store",
            Error::Auth(_) => "auth",
            Error::Instance(_) => "instance",
        }
    }

    /// Check if this error is authentication-related.
    pub fn is_authentication_error(&self) -> bool {
        matches!(self, Error::Auth(_))
    }

    /// Check if this error comes from malformed input (paths, values, queries or fixtures).
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::Doc(_) | Error::Query(_) => true,
            Error::Store(store_err) => store_err.is_id_error(),
            Error::Instance(instance_err) => instance_err.is_fixture_error(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this error is a (de)serialization failure.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
