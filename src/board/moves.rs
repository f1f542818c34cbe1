//! Move resolution: row alignment, validity checks and execution.
//!
//! ## Aligned rows
//!
//! Every move is resolved one line at a time. For a direction, the board is
//! read as a set of aligned rows whose index 0 is the edge the move pushes
//! toward:
//!
//! | Direction | Lines             | Read order               |
//! |-----------|-------------------|--------------------------|
//! | `Right`   | one per row       | right to left            |
//! | `Left`    | one per row       | left to right            |
//! | `Up`      | one per column    | top to bottom            |
//! | `Down`    | one per column    | bottom to top            |
//!
//! With that convention execution is direction-agnostic: collect the tiles,
//! condense equal neighbours, write them back from index 0 and pad with
//! empties.

use log::{debug, trace};
use smallvec::SmallVec;

use super::Board;
use crate::core::{Cell, Direction, Position, ScoreRule};

/// Inline capacity for line buffers. Boards up to 8 wide stay on the stack.
const LINE_CAPACITY: usize = 8;

/// Cells of one aligned row, index 0 nearest the target edge.
pub type AlignedRow = SmallVec<[Cell; LINE_CAPACITY]>;

/// Tile values of one line.
pub type LineValues = SmallVec<[u32; LINE_CAPACITY]>;

/// Result of condensing one line of tiles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Condensed {
    /// Tiles after merging, index 0 nearest the target edge.
    pub values: LineValues,
    /// Number of merges performed.
    pub merges: usize,
    /// Sum of the tiles produced by merges.
    pub merged_value: u64,
}

/// Merge equal neighbours in a gap-free line of tiles.
///
/// A single forward pass: each pair merges at most once and a freshly merged
/// tile never merges again in the same move, so `[2, 2, 2, 2]` becomes
/// `[4, 4]`, not `[8]`.
///
/// ## Panics
///
/// Panics if a merged tile would not fit in a `u32`.
///
/// ```
/// use tile_slide::board::condense;
///
/// assert_eq!(condense(&[2, 2, 4]).values.as_slice(), &[4, 4]);
/// assert_eq!(condense(&[2, 2, 2, 2]).values.as_slice(), &[4, 4]);
/// ```
#[must_use]
pub fn condense(tiles: &[u32]) -> Condensed {
    let mut result = Condensed::default();
    let mut i = 0;

    while i < tiles.len() {
        match tiles.get(i + 1) {
            Some(&next) if next == tiles[i] => {
                let Some(merged) = tiles[i].checked_add(next) else {
                    panic!("Merging two {} tiles overflows u32", next);
                };
                result.values.push(merged);
                result.merges += 1;
                result.merged_value += u64::from(merged);
                i += 2;
            }
            _ => {
                result.values.push(tiles[i]);
                i += 1;
            }
        }
    }

    result
}

/// True if resolving this aligned row would change it.
///
/// A row changes when a tile has an empty slot target-ward of it (it
/// slides) or two tiles are adjacent and equal (they merge).
fn row_can_change(values: &[Option<u32>]) -> bool {
    let mut seen_empty = false;
    let mut previous = None;

    for value in values {
        match value {
            None => seen_empty = true,
            Some(tile) => {
                if seen_empty || previous == Some(*tile) {
                    return true;
                }
                previous = Some(*tile);
            }
        }
    }

    false
}

impl Board {
    /// Number of aligned rows a move in `direction` resolves.
    #[must_use]
    pub fn line_count(&self, direction: Direction) -> usize {
        if direction.is_horizontal() {
            self.height()
        } else {
            self.width()
        }
    }

    /// Positions of aligned row `index`, index 0 nearest the target edge.
    ///
    /// ## Panics
    ///
    /// Panics if `index` is not below [`line_count`](Self::line_count).
    #[must_use]
    pub fn aligned_positions(
        &self,
        index: usize,
        direction: Direction,
    ) -> SmallVec<[Position; LINE_CAPACITY]> {
        assert!(
            index < self.line_count(direction),
            "Row {} out of range for {} moves",
            index,
            direction
        );

        match direction {
            Direction::Right => (0..self.width())
                .rev()
                .map(|x| Position::new(x, index))
                .collect(),
            Direction::Left => (0..self.width()).map(|x| Position::new(x, index)).collect(),
            Direction::Up => (0..self.height()).map(|y| Position::new(index, y)).collect(),
            Direction::Down => (0..self.height())
                .rev()
                .map(|y| Position::new(index, y))
                .collect(),
        }
    }

    /// Cells of aligned row `index` for `direction`.
    #[must_use]
    pub fn get_row(&self, index: usize, direction: Direction) -> AlignedRow {
        self.aligned_positions(index, direction)
            .into_iter()
            .map(|position| self.cells[self.offset(position)])
            .collect()
    }

    /// The whole board as aligned rows for `direction`.
    #[must_use]
    pub fn get_rotated_board(&self, direction: Direction) -> Vec<AlignedRow> {
        (0..self.line_count(direction))
            .map(|index| self.get_row(index, direction))
            .collect()
    }

    /// Values of an aligned row, empties kept in place.
    #[must_use]
    pub fn row_values(
        &self,
        index: usize,
        direction: Direction,
    ) -> SmallVec<[Option<u32>; LINE_CAPACITY]> {
        self.get_row(index, direction)
            .iter()
            .map(|cell| cell.value)
            .collect()
    }

    /// Tiles of an aligned row in order, empties dropped.
    #[must_use]
    pub fn condensed_values(&self, index: usize, direction: Direction) -> LineValues {
        self.get_row(index, direction)
            .iter()
            .filter_map(|cell| cell.value)
            .collect()
    }

    // === Validity ===

    /// True if a move in `direction` would slide or merge at least one tile.
    #[must_use]
    pub fn check_valid_move(&self, direction: Direction) -> bool {
        (0..self.line_count(direction))
            .any(|index| row_can_change(&self.row_values(index, direction)))
    }

    /// Relaxed check used for game-over detection: any empty cell in a
    /// line counts as a possible move.
    fn has_move_or_space(&self, direction: Direction) -> bool {
        (0..self.line_count(direction)).any(|index| {
            let values = self.row_values(index, direction);
            values.iter().any(Option::is_none) || row_can_change(&values)
        })
    }

    /// True when no direction offers a move.
    ///
    /// All four directions are checked; horizontal and vertical moves are
    /// independent.
    #[must_use]
    pub fn check_game_over(&self) -> bool {
        !Direction::all().any(|direction| self.has_move_or_space(direction))
    }

    /// Directions that would currently change the board.
    #[must_use]
    pub fn valid_moves(&self) -> SmallVec<[Direction; 4]> {
        Direction::all()
            .filter(|&direction| self.check_valid_move(direction))
            .collect()
    }

    // === Execution ===

    /// Slide and merge every tile toward `direction`.
    ///
    /// Returns `false` and leaves the board untouched if the move would not
    /// change anything. Otherwise the pre-move grid replaces the undo
    /// snapshot before any cell is written.
    pub fn move_pieces(&mut self, direction: Direction) -> bool {
        if !self.check_valid_move(direction) {
            debug!("move {}: rejected, board unchanged", direction);
            return false;
        }

        // Resolve every line before writing so a failed merge leaves the
        // board untouched.
        let resolved: Vec<_> = (0..self.line_count(direction))
            .map(|index| {
                let positions = self.aligned_positions(index, direction);
                let tiles: LineValues = positions
                    .iter()
                    .filter_map(|&position| self.cells[self.offset(position)].value)
                    .collect();
                let condensed = condense(&tiles);
                trace!(
                    "move {}: line {} {:?} -> {:?}",
                    direction,
                    index,
                    tiles.as_slice(),
                    condensed.values.as_slice()
                );
                (positions, condensed)
            })
            .collect();

        self.take_snapshot();

        let mut merges = 0;
        let mut merged_value = 0;

        for (positions, condensed) in resolved {
            for (slot, &position) in positions.iter().enumerate() {
                let offset = self.offset(position);
                self.cells[offset].value = condensed.values.get(slot).copied();
            }

            merges += condensed.merges;
            merged_value += condensed.merged_value;
        }

        if self.score_rule == ScoreRule::Merged {
            self.add_score(merged_value);
        }

        debug!("move {}: {} merge(s)", direction, merges);
        true
    }
}
