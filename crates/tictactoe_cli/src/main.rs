//! Console tic-tac-toe entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::io;
use tictactoe_cli::{Console, GameConfig, Orchestrator};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = GameConfig::load_or_default(&cli.config)?;
    let config = if cli.hints {
        config.with_cell_hints(true)
    } else {
        config
    };

    initialize_tracing(config.log_filter());
    run_game(config)
}

/// Plays one game on stdin/stdout.
#[instrument(skip_all)]
fn run_game(config: GameConfig) -> Result<()> {
    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut orchestrator = Orchestrator::new(config, console);

    let status = orchestrator.run()?;
    info!(%status, moves = orchestrator.game().history().len(), "Game finished");
    Ok(())
}

/// Logs go to stderr so they never interleave with the board.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
