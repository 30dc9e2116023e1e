//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Smallest cell that still fits a bordered mark.
pub const MIN_CELL_WIDTH: u16 = 3;
/// Smallest cell height.
pub const MIN_CELL_HEIGHT: u16 = 1;

/// Settings for a terminal game session.
///
/// Every field has a default, so an empty or missing file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Seed for the bot's tie-breaking. Random when unset.
    seed: Option<u64>,

    /// Width of one board cell in terminal columns.
    cell_width: u16,

    /// Height of one board cell in terminal rows.
    cell_height: u16,

    /// File the game logs to while the terminal UI is active.
    log_file: PathBuf,

    /// Default tracing filter; `RUST_LOG` takes precedence.
    log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            cell_width: 9,
            cell_height: 3,
            log_file: PathBuf::from("tictactoe.log"),
            log_filter: "info".to_string(),
        }
    }
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

        config.validate()?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides; `None` keeps the current value.
    #[instrument(skip(self))]
    pub fn with_overrides(
        self,
        seed: Option<u64>,
        cell_width: Option<u16>,
        cell_height: Option<u16>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            seed: seed.or(self.seed),
            cell_width: cell_width.unwrap_or(self.cell_width),
            cell_height: cell_height.unwrap_or(self.cell_height),
            ..self
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the cell dimensions.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_width < MIN_CELL_WIDTH {
            return Err(ConfigError::new(format!(
                "cell_width must be at least {}, got {}",
                MIN_CELL_WIDTH, self.cell_width
            )));
        }
        if self.cell_height < MIN_CELL_HEIGHT {
            return Err(ConfigError::new(format!(
                "cell_height must be at least {}, got {}",
                MIN_CELL_HEIGHT, self.cell_height
            )));
        }
        Ok(())
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
