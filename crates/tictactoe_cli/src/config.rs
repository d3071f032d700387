//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Console game configuration.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Prompt shown when asking for a cell number.
    prompt: String,

    /// Render empty cells with their cell number.
    cell_hints: bool,

    /// Tracing filter used when `RUST_LOG` is not set.
    log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            prompt: "Pick a case.".to_string(),
            cell_hints: false,
            log_filter: "warn".to_string(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(path, ConfigProblem::Unreadable(e.to_string())))?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(path, ConfigProblem::Malformed(e.message().to_string()))
        })?;

        info!(cell_hints = config.cell_hints, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from `path`, or the defaults if the file is absent.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the hint setting.
    pub fn with_cell_hints(mut self, cell_hints: bool) -> Self {
        self.cell_hints = cell_hints;
        self
    }
}

/// What went wrong with a game config file.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigProblem {
    /// The file exists but could not be read.
    #[display("file could not be read ({})", _0)]
    Unreadable(String),

    /// The file is not TOML matching the game settings.
    #[display("settings are not valid TOML ({})", _0)]
    Malformed(String),
}

/// Game config file that could not be used.
#[derive(Debug, Clone, Display, Error)]
#[display("Cannot use game config {}: {} [{}:{}]", path.display(), problem, file, line)]
pub struct ConfigError {
    /// Config file path.
    pub path: PathBuf,
    /// What went wrong.
    pub problem: ConfigProblem,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a config error for `path`, recording the caller location.
    #[track_caller]
    pub fn new(path: &Path, problem: ConfigProblem) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            path: path.to_path_buf(),
            problem,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
