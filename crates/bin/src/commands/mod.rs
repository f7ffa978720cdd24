//! Subcommand implementations.

use serde::Serialize;

pub mod activities;
pub mod days;
pub mod login;
pub mod query;

/// Print a value to stdout as pretty JSON.
fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
