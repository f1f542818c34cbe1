//! Game sessions.
//!
//! `GameSession` runs the turn loop a presentation layer drives:
//! attempt a move, spawn a tile if it changed the board, check for
//! game-over. Rendering and input mapping stay outside the crate.

mod session;

pub use session::{GameSession, TurnOutcome};
