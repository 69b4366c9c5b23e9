//! Configuration file loading for self-play runs.
//!
//! Settings come from an optional TOML file; command-line flags override
//! individual fields afterwards.

use chess_core::FenError;
use chess_engine::Board;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configured start position is not a valid FEN.
    #[error("Invalid start position: {0}")]
    InvalidStartFen(#[from] FenError),
    /// A numeric setting is out of range.
    #[error("Invalid setting: {0}")]
    InvalidValue(String),
}

/// Settings for a self-play run.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SelfPlayConfig {
    /// Number of games to play. Defaults to 10.
    #[serde(default = "default_games")]
    pub games: u32,
    /// Seed for move selection. Equal seeds replay equal games.
    #[serde(default)]
    pub seed: u64,
    /// Plies after which an undecided game is abandoned. Defaults to 300.
    #[serde(default = "default_max_plies")]
    pub max_plies: usize,
    /// Position every game starts from, in FEN.
    /// Defaults to the standard starting position.
    #[serde(default)]
    pub start_fen: Option<String>,
}

fn default_games() -> u32 {
    10
}

fn default_max_plies() -> usize {
    300
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            games: default_games(),
            seed: 0,
            max_plies: default_max_plies(),
            start_fen: None,
        }
    }
}

impl SelfPlayConfig {
    /// Loads the configuration.
    ///
    /// An explicit path must exist. Without one, [`Self::config_path()`] is
    /// read if present and defaults are used otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read, or
    /// [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::read(path),
            None => {
                let default_path = Self::config_path();
                if default_path.exists() {
                    Self::read(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Returns the default configuration file path: `selfplay.toml` in the
    /// current working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("selfplay.toml")
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Checks that the settings describe a run that can be played.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::InvalidValue("games must be at least 1".into()));
        }
        if self.max_plies == 0 {
            return Err(ConfigError::InvalidValue(
                "max_plies must be at least 1".into(),
            ));
        }
        if let Some(fen) = &self.start_fen {
            Board::from_fen(fen)?;
        }
        Ok(())
    }
}
