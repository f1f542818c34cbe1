//! Seeded randomness for tile spawning.
//!
//! The board never owns an RNG. Spawning and random fills borrow a
//! `GameRng`, so a seed fixes every tile a game will ever place, and the
//! captured `GameRngState` lets a replay pick up mid-game.
//!
//! ```
//! use tile_slide::core::{GameRng, Position};
//!
//! let empty = [Position::new(0, 0), Position::new(3, 1), Position::new(2, 2)];
//! let mut game = GameRng::new(42);
//! let mut replay = GameRng::new(42);
//!
//! assert_eq!(game.choose(&empty), replay.choose(&empty));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// ChaCha8-backed RNG used for spawn cells, spawn values and random fills.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from system entropy, for interactive play.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Exponent for a random power-of-two tile.
    pub fn gen_exponent(&mut self, range: std::ops::RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// `true` with the given probability, which must lie in `[0, 1]`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Uniform pick from `slice`; `None` without drawing when it is empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Capture the stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume a stream captured with [`state`](Self::state).
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Seed plus ChaCha8 word position; restoring is O(1) however many tiles
/// have been spawned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}
