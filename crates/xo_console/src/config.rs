//! Console configuration.
//!
//! Sources, lowest precedence first: built-in defaults, the TOML file,
//! environment (`XO_STATE`, loaded through `.env` as well), command-line flags.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Environment variable holding an initial state word.
pub const STATE_ENV_VAR: &str = "XO_STATE";

/// Configuration for the console front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Alternate the opening player between sessions.
    #[serde(default)]
    switch_order: bool,

    /// Where `save`/`load` keep the state word.
    #[serde(default = "default_state_file")]
    state_file: PathBuf,

    /// Print the binary dump after every move.
    #[serde(default)]
    show_state_dump: bool,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Initial state word, decimal or hex.
    #[serde(default)]
    initial_state: Option<String>,
}

#[instrument]
fn default_state_file() -> PathBuf {
    PathBuf::from("xo_state.txt")
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            switch_order: false,
            state_file: default_state_file(),
            show_state_dump: false,
            log_filter: default_log_filter(),
            initial_state: None,
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(switch_order = config.switch_order, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file when given, defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Takes the initial state from `XO_STATE` when it is set.
    #[instrument(skip(self))]
    pub fn with_env(mut self) -> Self {
        if let Ok(word) = std::env::var(STATE_ENV_VAR) {
            debug!(%word, "Initial state from environment");
            self.initial_state = Some(word);
        }
        self
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, switch_order: bool, initial_state: Option<String>) -> Self {
        self.switch_order |= switch_order;
        if initial_state.is_some() {
            self.initial_state = initial_state;
        }
        self
    }

    /// Drops any initial state so play starts from the zeroed word.
    pub fn without_initial_state(mut self) -> Self {
        self.initial_state = None;
        self
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
