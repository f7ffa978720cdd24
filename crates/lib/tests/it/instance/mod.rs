//! Instance integration tests
//!
//! This module tests seeding an Instance from fixtures and checking teacher
//! credentials against the seeded accounts.

mod seeding;
