//! Game configuration loaded from TOML.

use crate::messages::Locale;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Column letters run from `A` to `Z`.
pub const MAX_COLS: usize = 26;

/// Settings for a series of matches.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Match wins needed to take the series.
    #[serde(default = "default_games_to_win")]
    games_to_win: u32,

    /// Board rows.
    #[serde(default = "default_size")]
    rows: usize,

    /// Board columns.
    #[serde(default = "default_size")]
    cols: usize,

    /// Language for prompts and messages.
    #[serde(default)]
    locale: Locale,

    /// Seed for the computer's random fallback; random when absent.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_games_to_win() -> u32 {
    3
}

#[instrument]
fn default_size() -> usize {
    3
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            games_to_win: default_games_to_win(),
            rows: default_size(),
            cols: default_size(),
            locale: Locale::default(),
            seed: None,
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
        info!(rows = config.rows, cols = config.cols, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides and re-validates.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        games_to_win: Option<u32>,
        rows: Option<usize>,
        cols: Option<usize>,
        locale: Option<Locale>,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if let Some(n) = games_to_win {
            self.games_to_win = n;
        }
        if let Some(r) = rows {
            self.rows = r;
        }
        if let Some(c) = cols {
            self.cols = c;
        }
        if let Some(l) = locale {
            self.locale = l;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks that the board can be played and named.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games_to_win == 0 {
            return Err(ConfigError::new("games_to_win must be at least 1".to_string()));
        }
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::new(format!(
                "Board must be at least 1x1, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.cols > MAX_COLS {
            return Err(ConfigError::new(format!(
                "Board has {} columns but only {} can be named",
                self.cols, MAX_COLS
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_three_by_three() {
        let config = GameConfig::default();
        assert_eq!(*config.rows(), 3);
        assert_eq!(*config.cols(), 3);
        assert_eq!(*config.games_to_win(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: GameConfig = toml::from_str("rows = 4\nseed = 9\n").unwrap();
        assert_eq!(*config.rows(), 4);
        assert_eq!(*config.cols(), 3);
        assert_eq!(*config.seed(), Some(9));
    }

    #[test]
    fn test_overrides_are_validated() {
        let err = GameConfig::default()
            .with_overrides(None, None, Some(27), None, None)
            .unwrap_err();
        assert!(err.message.contains("27 columns"));

        let err = GameConfig::default()
            .with_overrides(Some(0), None, None, None, None)
            .unwrap_err();
        assert!(err.message.contains("games_to_win"));
    }
}
