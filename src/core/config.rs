//! Run configuration
//!
//! A run is described by two caller-supplied integers (how many games, how
//! many turns per game) plus knobs that do not change the probability law:
//! the seed and when to fan out across threads.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};

/// Games in a default run
pub const DEFAULT_GAMES: u32 = 1000;

/// Turns each simulated token takes per game
pub const DEFAULT_TURNS_PER_GAME: u32 = 100;

/// Configuration for a full simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of independent games to average over
    pub games: u32,

    /// Turns taken by the token in each game
    pub turns_per_game: u32,

    /// Base seed for the per-game random streams
    ///
    /// `None` draws a seed from entropy. The seed actually used is reported
    /// back in the output so any run can be replayed exactly.
    pub seed: Option<u64>,

    /// Minimum game count before games are spread across the rayon pool
    ///
    /// Below this, thread overhead exceeds the work of the games themselves.
    /// Results do not depend on this value.
    pub parallel_threshold: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: DEFAULT_GAMES,
            turns_per_game: DEFAULT_TURNS_PER_GAME,
            seed: None,
            parallel_threshold: 64,
        }
    }
}

impl SimulationConfig {
    /// Create a config for `games` × `turns_per_game` with defaults elsewhere
    pub fn new(games: u32, turns_per_game: u32) -> Self {
        Self {
            games,
            turns_per_game,
            ..Default::default()
        }
    }

    /// Builder-style seed override
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate configuration before any game is played
    pub fn validate(&self) -> Result<()> {
        if self.games == 0 {
            return Err(SimError::InvalidConfig(
                "game count must be at least 1".into(),
            ));
        }

        if self.turns_per_game == 0 {
            return Err(SimError::InvalidConfig(
                "turns per game must be at least 1".into(),
            ));
        }

        Ok(())
    }

    /// Parse a config from TOML text; missing fields take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }
}
