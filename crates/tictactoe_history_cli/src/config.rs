//! Display and logging configuration for the CLI.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_history::Board;
use tracing::{debug, info, instrument};

/// CLI configuration, read from TOML.
///
/// Every field is optional in the file; missing ones take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CliConfig {
    /// Symbol drawn for X's squares.
    #[serde(default = "default_x_symbol")]
    x_symbol: String,

    /// Symbol drawn for O's squares.
    #[serde(default = "default_o_symbol")]
    o_symbol: String,

    /// Symbol drawn for empty squares.
    #[serde(default = "default_empty_symbol")]
    empty_symbol: String,

    /// Prompt printed before each interactive command.
    #[serde(default = "default_prompt")]
    prompt: String,

    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_x_symbol() -> String {
    "X".to_string()
}

fn default_o_symbol() -> String {
    "O".to_string()
}

fn default_empty_symbol() -> String {
    ".".to_string()
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            x_symbol: default_x_symbol(),
            o_symbol: default_o_symbol(),
            empty_symbol: default_empty_symbol(),
            prompt: default_prompt(),
            log_filter: default_log_filter(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(x = %config.x_symbol, o = %config.o_symbol, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Renders `board` with the configured symbols.
    pub fn render_board(&self, board: &Board) -> String {
        board.render(&self.x_symbol, &self.o_symbol, &self.empty_symbol)
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
