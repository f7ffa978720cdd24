//! Query integration tests
//!
//! This module tests query matching against stored activity records, both through
//! the builder API and through the JSON filter syntax used by request handlers.

mod json_filters;
mod matching;
