//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_connect_four::{Color, Quality};
use tracing::{debug, info, instrument};

/// File read when no `--config` is given.
pub const DEFAULT_CONFIG_PATH: &str = "connect_four.toml";

/// Settings for a play or duel session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Strength of the computer opponent.
    #[serde(default = "default_quality")]
    quality: Quality,

    /// Color played by the human in `play` mode.
    #[serde(default = "default_human")]
    human: Color,

    /// Seed for the computer's random choices; fresh entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Number of games in `duel` mode.
    #[serde(default = "default_games")]
    games: u32,
}

fn default_quality() -> Quality {
    Quality::Best
}

fn default_human() -> Color {
    Color::Red
}

fn default_games() -> u32 {
    1
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Overrides `quality`.
    pub quality: Option<Quality>,
    /// Overrides `human`.
    pub human: Option<Color>,
    /// Overrides `seed`.
    pub seed: Option<u64>,
    /// Overrides `games`.
    pub games: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            quality: default_quality(),
            human: default_human(),
            seed: None,
            games: default_games(),
        }
    }
}

impl GameConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(quality = %config.quality, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_PATH`] when it exists,
    /// else defaults.
    ///
    /// An explicitly named file must exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(self, overrides: ConfigOverrides) -> Self {
        Self {
            quality: overrides.quality.unwrap_or(self.quality),
            human: overrides.human.unwrap_or(self.human),
            seed: overrides.seed.or(self.seed),
            games: overrides.games.unwrap_or(self.games),
        }
    }

    /// Resolves the Red and Yellow strengths for a duel.
    ///
    /// A side without an explicit strength plays at the configured `quality`.
    pub fn duel_qualities(
        &self,
        red: Option<Quality>,
        yellow: Option<Quality>,
    ) -> (Quality, Quality) {
        (red.unwrap_or(self.quality), yellow.unwrap_or(self.quality))
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
