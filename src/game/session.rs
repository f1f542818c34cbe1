//! A single game session: board, RNG and the turn loop.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{BoardConfig, Direction, GameRng, GameRngState, Position};

/// What happened when a direction was played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The move would not change the board. Nothing happened.
    Rejected,
    /// The move was applied and the game continues.
    Moved {
        /// Where the new tile landed, if there was room for one.
        spawned: Option<Position>,
    },
    /// The move was applied and no further move is possible.
    GameOver {
        /// Where the new tile landed, if there was room for one.
        spawned: Option<Position>,
    },
}

impl TurnOutcome {
    /// True if the board changed.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, TurnOutcome::Rejected)
    }

    /// True if the game ended on this turn.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, TurnOutcome::GameOver { .. })
    }
}

/// One game from start to game-over.
///
/// ```
/// use tile_slide::core::{BoardConfig, Direction};
/// use tile_slide::game::GameSession;
///
/// let mut game = GameSession::new(BoardConfig::default(), 42);
/// game.start();
/// assert_eq!(game.board().empty_count(), 14);
///
/// let _ = game.play(Direction::Left);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    config: BoardConfig,
    board: Board,
    rng: GameRng,
    moves: u32,
}

impl GameSession {
    /// Create a session with an empty board and a seeded RNG.
    ///
    /// ## Panics
    ///
    /// Panics if [`BoardConfig::validate`] rejects the configuration.
    #[must_use]
    pub fn new(config: BoardConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Create a session with an empty board and the given RNG.
    ///
    /// ## Panics
    ///
    /// Panics if [`BoardConfig::validate`] rejects the configuration.
    #[must_use]
    pub fn with_rng(config: BoardConfig, rng: GameRng) -> Self {
        let board = Board::with_config(&config);
        Self {
            config,
            board,
            rng,
            moves: 0,
        }
    }

    /// Place the configured number of starting tiles.
    pub fn start(&mut self) {
        for _ in 0..self.config.starting_tiles {
            if self.board.generate_tile(&mut self.rng, None).is_none() {
                break;
            }
        }
        info!(
            "game started: {}x{} board, seed {}",
            self.board.width(),
            self.board.height(),
            self.rng.seed()
        );
    }

    /// Play one turn: move, then spawn and check for game-over if the move
    /// changed the board.
    pub fn play(&mut self, direction: Direction) -> TurnOutcome {
        if !self.board.move_pieces(direction) {
            return TurnOutcome::Rejected;
        }

        self.moves += 1;
        let spawned = self.board.generate_tile(&mut self.rng, None);

        if self.board.check_game_over() {
            info!(
                "game over after {} moves, score {}",
                self.moves,
                self.board.score()
            );
            TurnOutcome::GameOver { spawned }
        } else {
            TurnOutcome::Moved { spawned }
        }
    }

    /// Revert the last accepted move, spawned tile included. The move no
    /// longer counts toward [`moves`](Self::moves); the score is kept.
    ///
    /// Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let restored = self.board.undo();
        if restored {
            self.moves = self.moves.saturating_sub(1);
            debug!("session undo, {} move(s) remain", self.moves);
        }
        restored
    }

    /// Read-only access to the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the board, for setting up positions.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// The configuration this session was built from.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.board.score()
    }

    /// Number of accepted moves.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// True when no direction offers a move.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.board.check_game_over()
    }

    /// RNG state, for replaying the session's spawns.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_places_starting_tiles() {
        let mut game = GameSession::new(BoardConfig::default(), 1);
        game.start();
        assert_eq!(game.board().empty_count(), 14);
        assert!(game.score() >= 4);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_start_stops_when_board_is_full() {
        let config = BoardConfig::new(1, 1).with_starting_tiles(1);
        let mut game = GameSession::new(config, 1);
        game.start();
        assert!(game.board().is_full());
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = GameSession::new(BoardConfig::default(), 5);
        game.board_mut().set_cell(0, 0, Some(2));
        let rng_before = game.rng_state();

        assert_eq!(game.play(Direction::Left), TurnOutcome::Rejected);
        assert_eq!(game.play(Direction::Up), TurnOutcome::Rejected);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.score(), 0);
        assert_eq!(game.board().empty_count(), 15);
        assert_eq!(game.rng_state(), rng_before);
    }

    #[test]
    fn test_accepted_move_spawns() {
        let mut game = GameSession::new(BoardConfig::default(), 5);
        game.board_mut().set_cell(0, 0, Some(2));

        let outcome = game.play(Direction::Right);
        assert!(outcome.is_accepted());
        assert!(!outcome.is_game_over());
        assert_eq!(game.moves(), 1);
        assert_eq!(game.board().empty_count(), 14);
        assert_eq!(game.board().get_cell(3, 0).unwrap().value, Some(2));
    }

    #[test]
    fn test_last_move_reports_game_over() {
        // One merge left; after it the spawn fills the only gap and the
        // alternating pattern leaves no moves.
        let config = BoardConfig::new(2, 2).with_four_probability(0.0);
        let mut game = GameSession::new(config, 0);
        let board = game.board_mut();
        board.set_cell(0, 0, Some(4));
        board.set_cell(1, 0, Some(4));
        board.set_cell(0, 1, Some(16));
        board.set_cell(1, 1, Some(8));

        let outcome = game.play(Direction::Left);
        assert_eq!(
            outcome,
            TurnOutcome::GameOver {
                spawned: Some(Position::new(1, 0))
            }
        );
        assert!(game.is_over());
    }

    #[test]
    fn test_undo_removes_spawn_but_keeps_score() {
        let mut game = GameSession::new(BoardConfig::default(), 11);
        game.board_mut().set_cell(0, 0, Some(2));
        let before = game.board().rows();

        assert!(game.play(Direction::Down).is_accepted());
        let score = game.score();
        assert!(score > 0);

        assert!(game.undo());
        assert_eq!(game.board().rows(), before);
        assert_eq!(game.score(), score);
        assert!(!game.undo());
    }

    #[test]
    fn test_undo_rolls_back_move_count() {
        let mut game = GameSession::new(BoardConfig::default(), 11);
        game.board_mut().set_cell(0, 0, Some(2));

        assert!(game.play(Direction::Down).is_accepted());
        assert_eq!(game.moves(), 1);

        assert!(game.undo());
        assert_eq!(game.moves(), 0);

        assert!(!game.undo());
        assert_eq!(game.moves(), 0);
    }

    #[test]
    #[should_panic(expected = "four_probability")]
    fn test_invalid_probability_rejected_at_construction() {
        let _ = GameSession::new(BoardConfig::default().with_four_probability(1.5), 0);
    }

    #[test]
    #[should_panic(expected = "starting tiles")]
    fn test_too_many_starting_tiles_rejected_at_construction() {
        let _ = GameSession::new(BoardConfig::new(2, 2).with_starting_tiles(5), 0);
    }

    #[test]
    fn test_same_seed_same_game() {
        let moves = [
            Direction::Left,
            Direction::Up,
            Direction::Right,
            Direction::Down,
        ];
        let mut a = GameSession::new(BoardConfig::default(), 77);
        let mut b = GameSession::new(BoardConfig::default(), 77);
        a.start();
        b.start();

        for direction in moves.iter().cycle().take(40) {
            assert_eq!(a.play(*direction), b.play(*direction));
        }
        assert_eq!(a.board().rows(), b.board().rows());
        assert_eq!(a.score(), b.score());
    }
}
