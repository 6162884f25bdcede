//! Headless rock clicker client.
//!
//! Loads configuration from the environment (and `.env`), sets up logging,
//! and drives a [`clicker_runtime::GameSession`] from the command line.
//!
//! ```bash
//! clicker play click:10 buy:stronger_pickaxe click status
//! clicker play --replay save
//! clicker events --summary
//! ```

mod commands;
mod intent;
mod logging;

use anyhow::Result;
use clap::Parser;
use clicker_runtime::RuntimeConfig;
use commands::{Events, Play, Upgrades};

/// Rock clicker
#[derive(Parser)]
#[command(name = "clicker")]
#[command(about = "Chip away at the rock, one event at a time", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Run a scripted play session
    Play(Play),

    /// Dump the event log
    Events(Events),

    /// List the upgrade catalog
    Upgrades(Upgrades),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = RuntimeConfig::from_env();
    let _guard = logging::setup_logging(&config.data_dir)?;

    tracing::debug!(
        data_dir = %config.data_dir.display(),
        persist_events = config.persist_events,
        "configuration loaded"
    );

    match cli.command {
        Command::Play(cmd) => cmd.execute(&config),
        Command::Events(cmd) => cmd.execute(&config),
        Command::Upgrades(cmd) => cmd.execute(),
    }
}
