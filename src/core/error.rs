//! Error types for fallible parsing and configuration.
//!
//! Gameplay outcomes (illegal moves, full boards, empty undo) are not errors;
//! they are reported as `bool` or `Option` by the board itself.

use thiserror::Error;

/// A string could not be interpreted as a [`Direction`](super::Direction).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unrecognized direction `{input}` (expected up/down/left/right, wasd or hjkl)")]
pub struct ParseDirectionError {
    /// The rejected input.
    pub input: String,
}

/// A [`BoardConfig`](super::BoardConfig) that cannot produce a playable board.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Width or height of zero.
    #[error("board dimensions must be non-zero, got {width}x{height}")]
    EmptyBoard { width: usize, height: usize },

    /// Probability outside `[0, 1]`.
    #[error("four_probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    /// More starting tiles than the board has cells.
    #[error("{tiles} starting tiles do not fit on a board with {cells} cells")]
    TooManyStartingTiles { tiles: usize, cells: usize },
}
