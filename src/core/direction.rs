//! Move directions.
//!
//! Grid coordinates put `(0, 0)` in the top-left corner: `x` grows to the
//! right and `y` grows downward, so row 0 is the top row of the board.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ParseDirectionError;

/// One of the four directions a move can push tiles toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step `(dx, dy)` in grid coordinates.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The opposite direction.
    ///
    /// ```
    /// use tile_slide::core::Direction;
    ///
    /// assert_eq!(Direction::Up.inverse(), Direction::Down);
    /// assert_eq!(Direction::Left.inverse().inverse(), Direction::Left);
    /// ```
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True for `Left` and `Right`.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Iterate over all four directions.
    pub fn all() -> impl Iterator<Item = Direction> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "w" | "k" => Ok(Direction::Up),
            "down" | "s" | "j" => Ok(Direction::Down),
            "left" | "a" | "h" => Ok(Direction::Left),
            "right" | "d" | "l" => Ok(Direction::Right),
            _ => Err(ParseDirectionError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_is_involution() {
        for dir in Direction::all() {
            assert_ne!(dir.inverse(), dir);
            assert_eq!(dir.inverse().inverse(), dir);
        }
    }

    #[test]
    fn test_delta_opposes_inverse() {
        for dir in Direction::all() {
            let (dx, dy) = dir.delta();
            let (ix, iy) = dir.inverse().delta();
            assert_eq!((dx + ix, dy + iy), (0, 0));
            assert_eq!(dx.abs() + dy.abs(), 1);
            assert_eq!(dir.is_horizontal(), dx != 0);
        }
    }

    #[test]
    fn test_all_is_exhaustive() {
        let all: Vec<_> = Direction::all().collect();
        assert_eq!(all.len(), 4);
        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert!(all.contains(&dir));
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("UP".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!(" left ".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("s".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!("d".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!("l".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!("k".parse::<Direction>(), Ok(Direction::Up));
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for dir in Direction::all() {
            assert_eq!(dir.to_string().parse::<Direction>(), Ok(dir));
        }
    }
}
