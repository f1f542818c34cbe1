//! Grid positions and cells.

use serde::{Deserialize, Serialize};

/// A slot on the board, `(0, 0)` being the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// A board slot and the tile currently in it, if any.
///
/// The position is fixed when the board is built; only the value changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    position: Position,
    /// Tile magnitude, `None` when the slot is empty.
    pub value: Option<u32>,
}

impl Cell {
    /// Create an empty cell at a position.
    #[must_use]
    pub const fn empty(position: Position) -> Self {
        Self {
            position,
            value: None,
        }
    }

    /// Where this cell lives on the board.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Column index.
    #[must_use]
    pub const fn x(&self) -> usize {
        self.position.x
    }

    /// Row index.
    #[must_use]
    pub const fn y(&self) -> usize {
        self.position.y
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value {
            Some(value) => write!(f, "{}: {}", self.position, value),
            None => write!(f, "{}: -", self.position),
        }
    }
}
