//! Game state transitions for tic-tac-toe.
//!
//! [`GameEngine`] is mutated in place and reused across games. A rejected
//! move is a normal result, not an error: out-of-range coordinates, an
//! occupied cell, or a decided game all leave the state untouched.

use crate::board::{Board, Cell};
use crate::error::StateError;
use crate::mask::{Occupancy, WinLine};
use crate::types::{Mark, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Result of [`GameEngine::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    /// The move was not applied; nothing changed.
    Rejected,
    /// The move was applied and `next` is now to move.
    Continue {
        /// The new mover.
        next: Player,
    },
    /// The move decided the game.
    Finished(Outcome),
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEngine")]
pub struct GameEngine {
    board: Board,
    outcome: Outcome,
    mover: Player,
    x_mask: Occupancy,
    o_mask: Occupancy,
    winning_line: Option<WinLine>,
}

/// Unchecked wire form of [`GameEngine`].
#[derive(Deserialize)]
struct RawEngine {
    board: Board,
    outcome: Outcome,
    mover: Player,
    x_mask: Occupancy,
    o_mask: Occupancy,
    winning_line: Option<WinLine>,
}

impl TryFrom<RawEngine> for GameEngine {
    type Error = StateError;

    /// Accepts the state only if the masks are disjoint and agree with the board.
    fn try_from(raw: RawEngine) -> Result<Self, Self::Error> {
        for (cell, mark) in raw.board.cells() {
            let (in_x, in_o) = (raw.x_mask.contains(cell), raw.o_mask.contains(cell));
            if in_x && in_o {
                return Err(StateError::OverlappingMasks { cell });
            }
            let owner = match (in_x, in_o) {
                (true, _) => Some(Player::X),
                (_, true) => Some(Player::O),
                _ => None,
            };
            if mark.player() != owner {
                return Err(StateError::MaskMismatch { cell });
            }
        }

        Ok(Self {
            board: raw.board,
            outcome: raw.outcome,
            mover: raw.mover,
            x_mask: raw.x_mask,
            o_mask: raw.o_mask,
            winning_line: raw.winning_line,
        })
    }
}

impl GameEngine {
    /// Creates an empty running game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            outcome: Outcome::Running,
            mover: Player::X,
            x_mask: Occupancy::EMPTY,
            o_mask: Occupancy::EMPTY,
            winning_line: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the player to move.
    pub fn mover(&self) -> Player {
        self.mover
    }

    /// Returns the occupancy mask of `player`.
    pub fn mask(&self, player: Player) -> Occupancy {
        match player {
            Player::X => self.x_mask,
            Player::O => self.o_mask,
        }
    }

    /// Returns the line that decided the game, if it was won.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }

    /// Places the mover's mark at (col, row).
    ///
    /// Returns `false` without touching any state when the coordinates are
    /// off the board, the game is decided, or the cell is taken. Does not
    /// evaluate the outcome or switch the mover.
    #[instrument(skip(self), fields(mover = %self.mover))]
    pub fn apply_move(&mut self, col: usize, row: usize) -> bool {
        if !self.outcome.is_running() {
            debug!(outcome = %self.outcome, "Move rejected: game is decided");
            return false;
        }

        let Some(cell) = Cell::new(col, row) else {
            debug!("Move rejected: off the board");
            return false;
        };

        if !self.board.mark(cell).is_empty() {
            debug!("Move rejected: cell occupied");
            return false;
        }

        self.board.set(cell, Mark::from(self.mover));
        match self.mover {
            Player::X => self.x_mask = self.x_mask.with(cell),
            Player::O => self.o_mask = self.o_mask.with(cell),
        }

        debug!(%cell, bit = cell.bit(), "Move applied");
        true
    }

    /// Hands the turn to the other player.
    #[instrument(skip(self), fields(from = %self.mover))]
    pub fn switch_mover(&mut self) {
        self.mover = self.mover.opponent();
    }

    /// Checks the mover's mask for a completed line, then for a full board.
    ///
    /// Only the player who just moved can have completed a line, so the
    /// opponent's mask is not inspected. A decided game keeps its outcome.
    #[instrument(skip(self), fields(mover = %self.mover))]
    pub fn evaluate_outcome(&mut self) -> Outcome {
        if !self.outcome.is_running() {
            return self.outcome;
        }

        if let Some(line) = self.mask(self.mover).winning_line() {
            self.outcome = Outcome::win_for(self.mover);
            self.winning_line = Some(line);
            info!(outcome = %self.outcome, ?line, "Game won");
        } else if self.board.is_full() {
            self.outcome = Outcome::Draw;
            info!("Game drawn");
        }

        self.outcome
    }

    /// Applies a move, evaluates it, and passes the turn if play continues.
    ///
    /// The mover only changes after an accepted move that leaves the game
    /// running.
    #[instrument(skip(self))]
    pub fn play(&mut self, col: usize, row: usize) -> Turn {
        if !self.apply_move(col, row) {
            return Turn::Rejected;
        }

        match self.evaluate_outcome() {
            Outcome::Running => {
                self.switch_mover();
                Turn::Continue { next: self.mover }
            }
            decided => Turn::Finished(decided),
        }
    }

    /// Clears the board and masks and starts a new game with X to move.
    #[instrument(skip(self), fields(outcome = %self.outcome))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.outcome = Outcome::Running;
        self.mover = Player::X;
        self.x_mask = Occupancy::EMPTY;
        self.o_mask = Occupancy::EMPTY;
        self.winning_line = None;
        info!("Game reset");
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let engine = GameEngine::new();
        assert_eq!(engine.outcome(), Outcome::Running);
        assert_eq!(engine.mover(), Player::X);
        assert_eq!(engine.board().empty_count(), 9);
        assert_eq!(engine.mask(Player::X), Occupancy::EMPTY);
        assert_eq!(engine.mask(Player::O), Occupancy::EMPTY);
    }

    #[test]
    fn test_apply_move_sets_mark_and_bit() {
        let mut engine = GameEngine::new();
        assert!(engine.apply_move(2, 1));
        assert_eq!(engine.board().get(2, 1), Some(Mark::X));
        assert_eq!(engine.mask(Player::X).bits(), 1 << 5);
        // The mover is the caller's business.
        assert_eq!(engine.mover(), Player::X);
    }

    #[test]
    fn test_apply_move_rejects_occupied() {
        let mut engine = GameEngine::new();
        assert!(engine.apply_move(0, 0));
        engine.switch_mover();
        let before = engine.clone();
        assert!(!engine.apply_move(0, 0));
        assert_eq!(engine, before);
    }

    #[test]
    fn test_apply_move_rejects_out_of_range() {
        let mut engine = GameEngine::new();
        assert!(!engine.apply_move(5, 5));
        assert!(!engine.apply_move(3, 0));
        assert!(!engine.apply_move(0, 3));
        assert_eq!(engine, GameEngine::new());
    }

    #[test]
    fn test_evaluate_only_checks_mover() {
        let mut engine = GameEngine::new();
        // X fills the top row without anyone switching the mover.
        for col in 0..3 {
            assert!(engine.apply_move(col, 0));
        }
        engine.switch_mover();
        assert_eq!(engine.evaluate_outcome(), Outcome::Running);
        engine.switch_mover();
        assert_eq!(engine.evaluate_outcome(), Outcome::XWins);
        assert_eq!(engine.winning_line(), Some(WinLine::TopRow));
    }

    #[test]
    fn test_switch_mover_toggles() {
        let mut engine = GameEngine::new();
        engine.switch_mover();
        assert_eq!(engine.mover(), Player::O);
        engine.switch_mover();
        assert_eq!(engine.mover(), Player::X);
    }

    #[test]
    fn test_reset_restores_x() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.play(1, 1), Turn::Continue { next: Player::O });
        engine.reset();
        assert_eq!(engine, GameEngine::new());
    }

    #[test]
    fn test_play_rejection_keeps_mover() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.play(0, 0), Turn::Continue { next: Player::O });
        assert_eq!(engine.play(0, 0), Turn::Rejected);
        assert_eq!(engine.mover(), Player::O);
    }
}
