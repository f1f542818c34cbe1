//! Board state: grid ownership, cell access, score and the undo snapshot.
//!
//! The grid is an `im::Vector<Cell>` in row-major order. Cloning it is O(1)
//! and shares structure, so the undo snapshot is a true value copy: later
//! writes to the live grid never show through in the snapshot.

use im::Vector;
use log::debug;

use crate::core::{BoardConfig, Cell, Direction, GameRng, Position, ScoreRule};

/// Largest exponent used by [`Board::fill_random`] (2^11 = 2048).
const MAX_RANDOM_EXPONENT: u32 = 11;

/// A fixed-size grid of tiles plus score and a single-step undo snapshot.
#[derive(Clone, Debug)]
pub struct Board {
    width: usize,
    height: usize,
    pub(super) cells: Vector<Cell>,
    pub(super) last_cells: Option<Vector<Cell>>,
    pub(super) score: u64,
    pub(super) score_rule: ScoreRule,
    pub(super) four_probability: f64,
}

impl Default for Board {
    fn default() -> Self {
        Self::with_config(&BoardConfig::default())
    }
}

impl Board {
    /// Create an empty `width` x `height` board with default rules.
    ///
    /// A bare board places no starting tiles, so any non-zero size is valid.
    ///
    /// ## Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_config(&BoardConfig::new(width, height).with_starting_tiles(0))
    }

    /// Create an empty board from a configuration.
    ///
    /// ## Panics
    ///
    /// Panics if [`BoardConfig::validate`] rejects the configuration.
    #[must_use]
    pub fn with_config(config: &BoardConfig) -> Self {
        if let Err(err) = config.validate() {
            panic!("Invalid board configuration: {}", err);
        }

        let cells = (0..config.height)
            .flat_map(|y| (0..config.width).map(move |x| Cell::empty(Position::new(x, y))))
            .collect();

        Self {
            width: config.width,
            height: config.height,
            cells,
            last_cells: None,
            score: 0,
            score_rule: config.score_rule,
            four_probability: config.four_probability,
        }
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Scoring rule in effect.
    #[must_use]
    pub fn score_rule(&self) -> ScoreRule {
        self.score_rule
    }

    pub(super) fn offset(&self, position: Position) -> usize {
        position.y * self.width + position.x
    }

    pub(super) fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    // === Cell Access ===

    /// Read the cell at `(x, y)`, or `None` outside the board.
    #[must_use]
    pub fn get_cell(&self, x: usize, y: usize) -> Option<Cell> {
        let position = Position::new(x, y);
        if !self.contains(position) {
            return None;
        }
        self.cells.get(self.offset(position)).copied()
    }

    /// Read the cell one step from `position` in `direction`.
    ///
    /// Returns `None` when the step leaves the board, so shift-until-blocked
    /// loops can treat the edge as "no neighbor".
    #[must_use]
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Cell> {
        let (dx, dy) = direction.delta();
        let x = position.x.checked_add_signed(dx as isize)?;
        let y = position.y.checked_add_signed(dy as isize)?;
        self.get_cell(x, y)
    }

    /// Write the value of the cell at `(x, y)`.
    ///
    /// ## Panics
    ///
    /// Panics if `(x, y)` is outside the board or `value` is `Some(0)`.
    pub fn set_cell(&mut self, x: usize, y: usize, value: Option<u32>) -> Cell {
        let position = Position::new(x, y);
        assert!(
            self.contains(position),
            "Cell {} outside {}x{} board",
            position,
            self.width,
            self.height
        );
        assert!(value != Some(0), "Tile values must be positive");

        let offset = self.offset(position);
        let cell = &mut self.cells[offset];
        cell.value = value;
        *cell
    }

    /// Iterate over all cells, row by row from the top.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Positions of every empty cell, row by row from the top.
    #[must_use]
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|cell| cell.is_empty())
            .map(Cell::position)
            .collect()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Largest tile on the board, `None` when the board is empty.
    #[must_use]
    pub fn max_value(&self) -> Option<u32> {
        self.cells.iter().filter_map(|cell| cell.value).max()
    }

    /// Read-only snapshot of the grid: rows from the top, cells from the left.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Option<u32>>> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| self.cells[y * self.width + x].value)
                    .collect()
            })
            .collect()
    }

    // === Bulk Fill ===

    /// Set every cell to `value`. `None` clears the board.
    ///
    /// ## Panics
    ///
    /// Panics if `value` is `Some(0)`.
    pub fn fill(&mut self, value: Option<u32>) {
        assert!(value != Some(0), "Tile values must be positive");
        for cell in self.cells.iter_mut() {
            cell.value = value;
        }
    }

    /// Fill every cell with a random power of two from 2 to 2048.
    pub fn fill_random(&mut self, rng: &mut GameRng) {
        for cell in self.cells.iter_mut() {
            cell.value = Some(1 << rng.gen_exponent(1..=MAX_RANDOM_EXPONENT));
        }
    }

    // === Undo ===

    /// True if a snapshot is available for [`undo`](Self::undo).
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.last_cells.is_some()
    }

    /// Restore the grid as it was before the last successful move.
    ///
    /// Consumes the snapshot: a second call without an intervening move is
    /// a no-op. The score is left untouched. Returns whether anything was
    /// restored.
    pub fn undo(&mut self) -> bool {
        match self.last_cells.take() {
            Some(previous) => {
                debug!("undo: restoring previous grid");
                self.cells = previous;
                true
            }
            None => false,
        }
    }

    /// Capture the current grid as the undo snapshot, replacing any older one.
    pub(super) fn take_snapshot(&mut self) {
        self.last_cells = Some(self.cells.clone());
    }

    pub(super) fn add_score(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4, 4);
        assert_eq!(board.width(), 4);
        assert_eq!(board.height(), 4);
        assert_eq!(board.score(), 0);
        assert_eq!(board.empty_count(), 16);
        assert!(!board.can_undo());
        assert_eq!(board.max_value(), None);
    }

    #[test]
    fn test_default_is_four_by_four() {
        let board = Board::default();
        assert_eq!((board.width(), board.height()), (4, 4));
    }

    #[test]
    fn test_every_position_maps_to_one_cell() {
        let board = Board::new(3, 5);
        for y in 0..5 {
            for x in 0..3 {
                let cell = board.get_cell(x, y).unwrap();
                assert_eq!(cell.position(), Position::new(x, y));
            }
        }
        assert_eq!(board.cells().count(), 15);
    }

    #[test]
    fn test_get_cell_out_of_bounds() {
        let board = Board::new(4, 3);
        assert!(board.get_cell(4, 0).is_none());
        assert!(board.get_cell(0, 3).is_none());
        assert!(board.get_cell(3, 2).is_some());
    }

    #[test]
    fn test_set_cell() {
        let mut board = Board::new(4, 4);
        let cell = board.set_cell(1, 2, Some(8));
        assert_eq!(cell.position(), Position::new(1, 2));
        assert_eq!(board.get_cell(1, 2).unwrap().value, Some(8));
        assert_eq!(board.rows()[2][1], Some(8));

        board.set_cell(1, 2, None);
        assert!(board.get_cell(1, 2).unwrap().is_empty());
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_set_cell_out_of_bounds_panics() {
        let mut board = Board::new(4, 4);
        board.set_cell(4, 0, Some(2));
    }

    #[test]
    #[should_panic(expected = "positive")]
    fn test_set_cell_zero_panics() {
        let mut board = Board::new(4, 4);
        board.set_cell(0, 0, Some(0));
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_zero_width_panics() {
        let _ = Board::new(0, 4);
    }

    #[test]
    fn test_single_cell_board() {
        let board = Board::new(1, 1);
        assert_eq!(board.empty_count(), 1);
    }

    #[test]
    #[should_panic(expected = "four_probability")]
    fn test_out_of_range_four_probability_panics() {
        let _ = Board::with_config(&BoardConfig::default().with_four_probability(1.5));
    }

    #[test]
    #[should_panic(expected = "starting tiles")]
    fn test_too_many_starting_tiles_panics() {
        let _ = Board::with_config(&BoardConfig::new(2, 2).with_starting_tiles(5));
    }

    #[test]
    fn test_neighbor() {
        let mut board = Board::new(4, 4);
        board.set_cell(1, 0, Some(2));

        let origin = Position::new(0, 0);
        assert_eq!(board.neighbor(origin, Direction::Right).unwrap().value, Some(2));
        assert!(board.neighbor(origin, Direction::Up).is_none());
        assert!(board.neighbor(origin, Direction::Left).is_none());
        assert_eq!(
            board.neighbor(origin, Direction::Down).unwrap().position(),
            Position::new(0, 1)
        );
        assert!(board.neighbor(Position::new(3, 3), Direction::Right).is_none());
    }

    #[test]
    fn test_fill() {
        let mut board = Board::new(3, 3);
        board.fill(Some(4));
        assert!(board.is_full());
        assert_eq!(board.max_value(), Some(4));

        board.fill(None);
        assert_eq!(board.empty_count(), 9);
    }

    #[test]
    fn test_fill_random_uses_powers_of_two() {
        let mut board = Board::new(4, 4);
        let mut rng = GameRng::new(9);
        board.fill_random(&mut rng);

        for cell in board.cells() {
            let value = cell.value.unwrap();
            assert!(value.is_power_of_two());
            assert!((2..=2048).contains(&value));
        }
    }

    #[test]
    fn test_empty_positions() {
        let mut board = Board::new(2, 2);
        board.fill(Some(2));
        board.set_cell(1, 1, None);
        assert_eq!(board.empty_positions(), vec![Position::new(1, 1)]);
    }

    #[test]
    fn test_undo_without_snapshot_is_noop() {
        let mut board = Board::new(4, 4);
        board.set_cell(0, 0, Some(2));
        let before = board.rows();

        assert!(!board.undo());
        assert_eq!(board.rows(), before);
    }

    #[test]
    fn test_snapshot_is_not_aliased() {
        let mut board = Board::new(2, 2);
        board.set_cell(0, 0, Some(2));
        board.take_snapshot();

        board.set_cell(0, 0, Some(4));
        board.set_cell(1, 1, Some(8));

        assert!(board.undo());
        assert_eq!(board.rows(), vec![vec![Some(2), None], vec![None, None]]);
        assert!(!board.can_undo());
    }
}
