//! Tile spawning.

use log::debug;

use super::Board;
use crate::core::{GameRng, Position, ScoreRule};

impl Board {
    /// Value for a freshly spawned tile: 4 with the configured probability,
    /// otherwise 2.
    pub fn random_tile_value(&self, rng: &mut GameRng) -> u32 {
        if rng.gen_bool(self.four_probability) {
            4
        } else {
            2
        }
    }

    /// Place a tile on a uniformly chosen empty cell.
    ///
    /// `value` overrides the random 2/4 choice. Under
    /// [`ScoreRule::Spawned`] the score grows by the placed value.
    ///
    /// Returns where the tile landed, or `None` (board and score unchanged)
    /// when no cell is empty.
    ///
    /// ## Panics
    ///
    /// Panics if `value` is `Some(0)`.
    pub fn generate_tile(&mut self, rng: &mut GameRng, value: Option<u32>) -> Option<Position> {
        assert!(value != Some(0), "Tile values must be positive");

        let empty = self.empty_positions();
        let Some(&position) = rng.choose(&empty) else {
            debug!("spawn: no empty cell");
            return None;
        };

        let value = value.unwrap_or_else(|| self.random_tile_value(rng));
        self.set_cell(position.x, position.y, Some(value));

        if self.score_rule == ScoreRule::Spawned {
            self.add_score(u64::from(value));
        }

        debug!("spawn: {} at {}", value, position);
        Some(position)
    }
}
