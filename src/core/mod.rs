//! Core engine types: directions, cells, RNG, configuration, errors.
//!
//! These are the building blocks the board engine and the game session
//! share. Nothing here knows how tiles move.

pub mod cell;
pub mod config;
pub mod direction;
pub mod error;
pub mod rng;

pub use cell::{Cell, Position};
pub use config::{BoardConfig, ScoreRule, DEFAULT_SIZE};
pub use direction::Direction;
pub use error::{ConfigError, ParseDirectionError};
pub use rng::{GameRng, GameRngState};
