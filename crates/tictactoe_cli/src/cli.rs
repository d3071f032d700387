//! Command-line interface for the console game.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the console
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (used only if it exists)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Show cell numbers in empty cells
    #[arg(long)]
    pub hints: bool,
}
