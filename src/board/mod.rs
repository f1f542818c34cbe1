//! The board engine.
//!
//! A `Board` owns a fixed grid of cells and resolves moves on it:
//! - `state`: construction, cell access, bulk fill, undo snapshot
//! - `moves`: aligned rows, move validity, game-over, move execution
//! - `spawn`: random tile placement
//! - `display`: text rendering
//!
//! The board never owns randomness. Operations that need it take a
//! [`GameRng`](crate::core::GameRng).

mod display;
mod moves;
mod spawn;
mod state;

pub use moves::{condense, AlignedRow, Condensed, LineValues};
pub use state::Board;
