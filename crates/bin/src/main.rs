use clap::Parser;
use clubdb::{Fixtures, Instance};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("clubdb=info".parse()?))
        .init();

    let cli = Cli::parse();

    let fixtures = match &cli.fixtures {
        Some(path) => {
            tracing::info!("Loading fixtures from {}", path.display());
            Fixtures::from_path(path)?
        }
        None => Fixtures::default_catalog()?,
    };
    let instance = Instance::open(&fixtures)?;

    match &cli.command {
        Commands::Activities(args) => commands::activities::run(&instance, args),
        Commands::Days => commands::days::run(&instance),
        Commands::Query(args) => commands::query::run(&instance, args),
        Commands::Login(args) => commands::login::run(&instance, args),
    }
}
