//! Application state and logic.

use noughts_engine::{Cell, GameEngine, Outcome, Player, Turn};
use tracing::{debug, info, instrument};

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    engine: GameEngine,
    prompt: Option<Outcome>,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application with an empty board.
    pub fn new() -> Self {
        Self {
            engine: GameEngine::new(),
            prompt: None,
            status_message: to_move(Player::X),
            should_quit: false,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The decided outcome awaiting acknowledgement, if any.
    pub fn prompt(&self) -> Option<Outcome> {
        self.prompt
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Places the mover's mark at (col, row).
    ///
    /// Ignored while the end-of-game prompt is showing.
    #[instrument(skip(self))]
    pub fn click(&mut self, col: usize, row: usize) -> Turn {
        if self.prompt.is_some() {
            debug!("Click ignored while prompt is open");
            return Turn::Rejected;
        }

        let turn = self.engine.play(col, row);
        match turn {
            Turn::Rejected => {
                self.status_message = format!("Can't play there. {}", to_move(self.engine.mover()));
            }
            Turn::Continue { next } => {
                self.status_message = to_move(next);
            }
            Turn::Finished(outcome) => {
                info!(%outcome, "Game over");
                self.status_message = format!("{}. Press Enter for a new game.", outcome);
                self.prompt = Some(outcome);
            }
        }
        turn
    }

    /// Places a mark by keypad number, 1 (top-left) to 9 (bottom-right).
    pub fn press_digit(&mut self, digit: u32) -> Turn {
        match digit
            .checked_sub(1)
            .and_then(|bit| Cell::from_bit(bit as usize))
        {
            Some(cell) => self.click(cell.col(), cell.row()),
            None => Turn::Rejected,
        }
    }

    /// Dismisses the end-of-game prompt and starts a new game.
    #[instrument(skip(self))]
    pub fn acknowledge(&mut self) {
        if let Some(outcome) = self.prompt.take() {
            debug!(%outcome, "Prompt acknowledged");
            self.engine.reset();
            self.status_message = to_move(self.engine.mover());
        }
    }

    /// Asks the event loop to exit.
    pub fn quit(&mut self) {
        info!("Quit requested");
        self.should_quit = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn to_move(player: Player) -> String {
    format!("Player {}'s turn", player)
}
