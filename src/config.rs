//! Player configuration loaded from TOML.

use crate::games::tictactoe::{Mark, Player};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default config file looked up when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// One seat's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name.
    name: String,
    /// Mark placed on the board.
    mark: Mark,
}

impl PlayerConfig {
    /// Creates a player configuration.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }
}

#[instrument]
fn default_player1() -> PlayerConfig {
    PlayerConfig::new("John", Mark::X)
}

#[instrument]
fn default_player2() -> PlayerConfig {
    PlayerConfig::new("Jane", Mark::O)
}

/// Configuration for a match: who sits where and with which mark.
///
/// ```toml
/// [player1]
/// name = "John"
/// mark = "X"
///
/// [player2]
/// name = "Jane"
/// mark = "O"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Moves first after every restart.
    #[serde(default = "default_player1")]
    player1: PlayerConfig,

    /// Moves second.
    #[serde(default = "default_player2")]
    player2: PlayerConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player1: default_player1(),
            player2: default_player2(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration from two seats.
    #[instrument]
    pub fn new(player1: PlayerConfig, player2: PlayerConfig) -> Self {
        Self { player1, player2 }
    }

    /// Parses and validates a TOML document.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(
            player1 = %config.player1.name,
            player2 = %config.player2.name,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if given, otherwise [`DEFAULT_CONFIG_PATH`] if it exists,
    /// otherwise the built-in defaults.
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

    /// Replaces player names given on the command line.
    #[instrument(skip(self))]
    pub fn with_names(
        mut self,
        player1: Option<String>,
        player2: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(name) = player1 {
            self.player1.name = name;
        }
        if let Some(name) = player2 {
            self.player2.name = name;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks names are non-empty and marks differ.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (seat, player) in [("player1", &self.player1), ("player2", &self.player2)] {
            if player.name.trim().is_empty() {
                return Err(ConfigError::new(format!("{} needs a name", seat)));
            }
        }
        if self.player1.mark == self.player2.mark {
            return Err(ConfigError::new(format!(
                "Both players use mark {}",
                self.player1.mark
            )));
        }
        Ok(())
    }

    /// Builds the two players, player 1 first.
    pub fn players(&self) -> (Player, Player) {
        (
            Player::new(self.player1.name.trim().to_string(), self.player1.mark),
            Player::new(self.player2.name.trim().to_string(), self.player2.mark),
        )
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
