//! Match settings, loaded from TOML.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};
use shogi_core::{Engine, Player, SearchLimits};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown engine `{0}` (expected `minimax` or `random`)")]
    UnknownEngine(String),
}

/// Which engine plays a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineSpec {
    Minimax,
    Random,
}

impl EngineSpec {
    /// A fresh engine. Minimax scores for Sente but plays either side.
    pub fn build(self) -> Box<dyn Engine> {
        match self {
            EngineSpec::Minimax => Box::new(MinimaxEngine::new(Player::Sente)),
            EngineSpec::Random => Box::new(RandomEngine::new()),
        }
    }
}

impl FromStr for EngineSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimax" | "alphabeta" => Ok(EngineSpec::Minimax),
            "random" => Ok(EngineSpec::Random),
            _ => Err(ConfigError::UnknownEngine(s.to_string())),
        }
    }
}

impl fmt::Display for EngineSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineSpec::Minimax => write!(f, "minimax"),
            EngineSpec::Random => write!(f, "random"),
        }
    }
}

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Maximum time per move in milliseconds (None = no limit)
    pub move_time_ms: Option<u64>,
    /// Plies before the game is adjudicated a draw
    pub max_plies: u32,
    /// Whether engine1 takes Gote every other game
    pub alternate_sides: bool,
    pub engine1: EngineSpec,
    pub engine2: EngineSpec,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 3,
            move_time_ms: None,
            max_plies: 256,
            alternate_sides: true,
            engine1: EngineSpec::Minimax,
            engine2: EngineSpec::Random,
        }
    }
}

impl MatchConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Fresh search limits for one move (the clock starts with the search).
    pub fn search_limits(&self) -> SearchLimits {
        match self.move_time_ms {
            Some(ms) => SearchLimits::depth_and_time(self.depth, Duration::from_millis(ms)),
            None => SearchLimits::depth(self.depth),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
