//! Session settings loaded from TOML.

use crate::games::tictactoe::Mode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Longest accepted "thinking" delay for the automated opponent.
pub const MAX_THINK_DELAY_MS: u64 = 10_000;

/// User-configurable settings for a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Mode a new session starts in.
    mode: Mode,

    /// Delay before the automated opponent moves, in milliseconds.
    think_delay_ms: u64,

    /// Seed for the automated opponent's tie-breaks. Random when absent.
    seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            think_delay_ms: 500,
            seed: None,
        }
    }
}

impl Settings {
    /// Parses settings from TOML text and validates them.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;
        let settings = Self::from_toml(&content)?;
        info!(mode = %settings.mode, think_delay_ms = settings.think_delay_ms, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path`, falling back to defaults if the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            warn!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of file values.
    pub fn with_overrides(
        mut self,
        mode: Option<Mode>,
        think_delay_ms: Option<u64>,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(delay) = think_delay_ms {
            self.think_delay_ms = delay;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.think_delay_ms > MAX_THINK_DELAY_MS {
            return Err(ConfigError::new(format!(
                "think_delay_ms must be at most {}, got {}",
                MAX_THINK_DELAY_MS, self.think_delay_ms
            )));
        }
        Ok(())
    }

    /// The thinking delay as a [`Duration`].
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
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
