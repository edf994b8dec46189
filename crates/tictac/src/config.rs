//! Settings file for the terminal front-end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictac_core::GameMode;
use tracing::{debug, info, instrument};

/// File read when no path is given on the command line.
pub const DEFAULT_CONFIG_FILE: &str = "tictac.toml";

/// User settings for `tictac`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Mode a `play` session starts in.
    #[serde(default)]
    mode: GameMode,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Print the engine's suggestion before each human move.
    #[serde(default)]
    show_hints: bool,
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            log_filter: default_log_filter(),
            show_hints: false,
        }
    }
}

impl Settings {
    /// Returns a copy with the start mode replaced.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read settings file: {}", e))
        })?;

        let settings = Self::from_toml(&content)?;
        info!(mode = %settings.mode, "Settings loaded");
        Ok(settings)
    }

    /// File [`load`](Self::load) reads for `path`: the explicit path, else
    /// [`DEFAULT_CONFIG_FILE`] if it exists, else none.
    pub fn source(path: Option<&Path>) -> Option<PathBuf> {
        match path {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                default.exists().then(|| default.to_path_buf())
            }
        }
    }

    /// Loads settings from [`source`](Self::source), or the defaults when
    /// there is none.
    ///
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match Self::source(path) {
            Some(file) => Self::from_file(file),
            None => {
                debug!("No settings file, using defaults");
                Ok(Self::default())
            }
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
