//! podium — contest roster provisioning for a judge platform.
//!
//! Two passes over the same roster:
//! - `provision` diffs the roster against remote state and creates the
//!   missing organizations, teams, and users with generated credentials.
//! - `patch` replays the created accounts through the jury form channel to
//!   set the fields the structured API cannot (password, role, team).

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;
mod output;

use error::CliResult;

/// Contest roster provisioning
#[derive(Parser)]
#[command(name = "podium")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create missing organizations, teams, and users from the roster
    Provision(commands::provision::ProvisionArgs),

    /// Push generated credentials through the jury interface
    Patch(commands::patch::PatchArgs),
}

#[tokio::main]
async fn main() {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,podium_provision=debug")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Provision(args) => commands::provision::execute(args).await,
        Commands::Patch(args) => commands::patch::execute(args).await,
    }
}
