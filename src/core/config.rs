//! Board configuration.
//!
//! Callers configure the engine at startup by providing a `BoardConfig`:
//! - Grid dimensions
//! - Spawn distribution (chance of a 4 instead of a 2)
//! - Scoring rule
//! - Number of tiles placed when a session starts

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default board width and height.
pub const DEFAULT_SIZE: usize = 4;

/// How the score grows during play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreRule {
    /// Score grows by the value of every spawned tile.
    #[default]
    Spawned,
    /// Score grows by the value of every tile produced by a merge.
    Merged,
}

/// Complete board configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of columns.
    pub width: usize,

    /// Number of rows.
    pub height: usize,

    /// Probability that a spawned tile is a 4 rather than a 2.
    pub four_probability: f64,

    /// Scoring rule.
    pub score_rule: ScoreRule,

    /// Tiles placed by `GameSession::start`.
    pub starting_tiles: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            four_probability: 0.1,
            score_rule: ScoreRule::Spawned,
            starting_tiles: 2,
        }
    }
}

impl BoardConfig {
    /// Create a configuration for a `width` x `height` board.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the chance of spawning a 4.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    /// Set the scoring rule.
    #[must_use]
    pub fn with_score_rule(mut self, rule: ScoreRule) -> Self {
        self.score_rule = rule;
        self
    }

    /// Set the number of tiles spawned when a session starts.
    #[must_use]
    pub fn with_starting_tiles(mut self, tiles: usize) -> Self {
        self.starting_tiles = tiles;
        self
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Check that this configuration describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(ConfigError::InvalidProbability(self.four_probability));
        }
        if self.starting_tiles > self.cell_count() {
            return Err(ConfigError::TooManyStartingTiles {
                tiles: self.starting_tiles,
                cells: self.cell_count(),
            });
        }
        Ok(())
    }
}
