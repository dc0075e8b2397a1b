//! Noughts engine - tic-tac-toe game state without any rendering.
//!
//! The engine owns the board, the mover and the outcome. A view calls
//! [`GameEngine::apply_move`], [`GameEngine::evaluate_outcome`] and
//! [`GameEngine::switch_mover`] in response to pointer input, then polls
//! the engine to decide what to draw.
//!
//! # Example
//!
//! ```
//! use noughts_engine::{GameEngine, Outcome, Turn};
//!
//! let mut engine = GameEngine::new();
//! for (col, row) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
//!     assert!(matches!(engine.play(col, row), Turn::Continue { .. }));
//! }
//! assert_eq!(engine.play(0, 2), Turn::Finished(Outcome::XWins));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod engine;
mod error;
mod mask;
mod types;

pub use board::{BOARD_SIZE, Board, Cell};
pub use engine::{GameEngine, Turn};
pub use error::StateError;
pub use mask::{Occupancy, WIN_PATTERNS, WinLine};
pub use types::{Mark, Outcome, Player};
