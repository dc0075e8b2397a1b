//! Noughts terminal board.
//!
//! Draws a 3x3 board on a ratatui canvas, places marks on left mouse
//! presses (or keys 1-9), and shows a prompt when the game is decided.
//! Acknowledging the prompt starts a new game with X to move.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod error;
mod geometry;
mod input;
mod settings;
mod tui;
mod ui;

pub use app::App;
pub use cli::Cli;
pub use error::ConfigError;
pub use geometry::BoardGeometry;
pub use input::handle_event;
pub use settings::ViewSettings;
pub use tui::{init_tracing, run};
pub use ui::draw;
