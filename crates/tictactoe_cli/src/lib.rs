//! Two-player console tic-tac-toe.
//!
//! - [`Console`]: prompting and re-prompting for cell numbers
//! - [`Orchestrator`]: the turn loop and outcome announcement
//! - [`GameConfig`]: optional TOML configuration

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod input;
mod orchestrator;

pub use config::{ConfigError, ConfigProblem, GameConfig};
pub use input::{Console, ConsoleError, INVALID_INPUT, parse_cell};
pub use orchestrator::Orchestrator;
