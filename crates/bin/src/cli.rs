//! CLI argument definitions for the clubdb binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Collection selector for raw queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CollectionName {
    /// The activity catalog
    Activities,
    /// Teacher and administrator accounts
    Teachers,
}

/// Mergington High School activity store
#[derive(Parser, Debug)]
#[command(name = "clubdb")]
#[command(about = "clubdb: in-memory activity and account store for the signup service")]
#[command(version)]
pub struct Cli {
    /// Fixture file to seed from. The built-in catalog is used when omitted.
    #[arg(short, long, global = true, env = "CLUBDB_FIXTURES")]
    pub fixtures: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List activities, optionally filtered by schedule
    Activities(ActivitiesArgs),
    /// List the distinct days activities meet on
    Days,
    /// Run a JSON filter against a collection
    ///
    /// Plain values are equality tests. Operator objects may use `$in`, `$gte`
    /// and `$lte`. Any other operator, such as `$regex` or `$gt`, is rejected
    /// with an error rather than treated as matching nothing.
    Query(QueryArgs),
    /// Check a teacher's credentials
    Login(LoginArgs),
}

/// Arguments for the activities command
#[derive(clap::Args, Debug, Default)]
pub struct ActivitiesArgs {
    /// Only activities meeting on this day
    #[arg(short, long)]
    pub day: Option<String>,

    /// Only activities starting at or after this time (HH:MM)
    #[arg(long)]
    pub start_after: Option<String>,

    /// Only activities ending at or before this time (HH:MM)
    #[arg(long)]
    pub end_before: Option<String>,
}

/// Arguments for the query command
#[derive(clap::Args, Debug)]
pub struct QueryArgs {
    /// Collection to query
    #[arg(value_enum)]
    pub collection: CollectionName,

    /// Filter document, e.g. '{"schedule_details.days": {"$in": ["Monday"]}}'
    #[arg(default_value = "{}")]
    pub filter: String,
}

/// Arguments for the login command
#[derive(clap::Args, Debug)]
pub struct LoginArgs {
    /// Account username
    pub username: String,

    /// Account password
    #[arg(short, long, env = "CLUBDB_PASSWORD", hide_env_values = true)]
    pub password: String,
}
