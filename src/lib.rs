//! # tile-slide
//!
//! A deterministic tile-sliding puzzle engine in the style of 2048.
//!
//! ## Design Principles
//!
//! 1. **Value Semantics**: The grid is a persistent `im::Vector`, so the
//!    single undo snapshot is an O(1) copy that never aliases the live grid.
//!
//! 2. **Injected Randomness**: The board never owns an RNG. Spawning takes a
//!    seeded `GameRng`, which makes every game reproducible.
//!
//! 3. **Direction-Agnostic Moves**: Every move reads the board as aligned
//!    rows whose index 0 is the target edge, then resolves each row the same
//!    way.
//!
//! ## Modules
//!
//! - `core`: Directions, cells, RNG, configuration, errors
//! - `board`: The board engine (moves, validity, spawning, undo)
//! - `game`: Game sessions driving the turn loop

pub mod board;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, Cell, ConfigError, Direction, GameRng, GameRngState, ParseDirectionError,
    Position, ScoreRule,
};

pub use crate::board::{condense, AlignedRow, Board, Condensed};

pub use crate::game::{GameSession, TurnOutcome};
