//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::Player as Mark;
use tracing::{debug, info, instrument};

/// Settings for a console game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name shown for the human player.
    #[serde(default = "default_human_name")]
    human_name: String,

    /// Mark the human plays. X always moves first.
    #[serde(default = "default_human_mark")]
    human_mark: Mark,

    /// Name shown for the computer player.
    #[serde(default = "default_computer_name")]
    computer_name: String,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_human_name() -> String {
    "Player".to_string()
}

fn default_human_mark() -> Mark {
    Mark::X
}

fn default_computer_name() -> String {
    "Computer".to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human_name = %config.human_name, human_mark = %config.human_mark, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Mark played by the computer.
    pub fn computer_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, human_mark: Option<Mark>, human_name: Option<String>) -> Self {
        if let Some(mark) = human_mark {
            debug!(%mark, "Overriding human mark");
            self.human_mark = mark;
        }
        if let Some(name) = human_name {
            debug!(%name, "Overriding human name");
            self.human_name = name;
        }
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_name: default_human_name(),
            human_mark: default_human_mark(),
            computer_name: default_computer_name(),
            log_filter: default_log_filter(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
