//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Occupancy of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
pub enum Mark {
    /// Cell claimed by X.
    X,
    /// Cell claimed by O.
    O,
    /// Unclaimed cell.
    #[default]
    #[display(".")]
    Empty,
}

impl Mark {
    /// Returns true if no player has claimed the cell.
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// Returns the player owning the cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
            Mark::Empty => None,
        }
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

/// Classification of the game: still running, or how it ended.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Outcome {
    /// Moves are still accepted.
    #[default]
    #[display("running")]
    Running,
    /// X completed a line.
    #[display("X wins")]
    XWins,
    /// O completed a line.
    #[display("O wins")]
    OWins,
    /// The board filled with no line completed.
    #[display("draw")]
    Draw,
}

impl Outcome {
    /// The win variant for `player`.
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::X => Outcome::XWins,
            Player::O => Outcome::OWins,
        }
    }

    /// Returns true while moves are accepted.
    pub fn is_running(self) -> bool {
        self == Outcome::Running
    }

    /// Returns true once the game is decided.
    pub fn is_terminal(self) -> bool {
        !self.is_running()
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::XWins => Some(Player::X),
            Outcome::OWins => Some(Player::O),
            Outcome::Running | Outcome::Draw => None,
        }
    }

    /// End-of-game prompt text, `None` while running.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Outcome::Running => None,
            Outcome::XWins => Some("X WINS"),
            Outcome::OWins => Some("O WINS"),
            Outcome::Draw => Some("CATS GAME"),
        }
    }
}
