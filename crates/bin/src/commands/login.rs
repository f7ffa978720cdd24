//! Credential check.

use clubdb::Instance;

use super::print_json;
use crate::cli::LoginArgs;

/// Run the login command
pub fn run(instance: &Instance, args: &LoginArgs) -> Result<(), Box<dyn std::error::Error>> {
    match instance.authenticate(&args.username, &args.password)? {
        Some(account) => print_json(&account),
        None => {
            tracing::warn!(username = %args.username, "Login rejected");
            Err("Invalid username or password".into())
        }
    }
}
