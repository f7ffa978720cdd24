//! Collection integration tests
//!
//! This module tests Collection behavior end to end: the signup flow the service
//! drives, identifier handling, and concurrent writers sharing one collection.

mod concurrency;
