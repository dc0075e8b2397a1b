//! Routes terminal events to the application.

use crate::app::App;
use crate::geometry::BoardGeometry;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tracing::{debug, trace};

/// Applies one terminal event to `app`.
///
/// `board` is where the board was last drawn, used to map mouse presses
/// to cells.
pub fn handle_event(app: &mut App, event: Event, board: &BoardGeometry) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => handle_press(app, column, row, board),
        other => trace!(?other, "Event ignored"),
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Enter | KeyCode::Char(' ') if app.prompt().is_some() => app.acknowledge(),
        KeyCode::Char(c) => {
            if let Some(digit) = c.to_digit(10) {
                app.press_digit(digit);
            }
        }
        _ => {}
    }
}

fn handle_press(app: &mut App, column: u16, row: u16, board: &BoardGeometry) {
    // Any press dismisses the prompt, like its OK button.
    if app.prompt().is_some() {
        app.acknowledge();
        return;
    }

    match board.cell_at(column, row) {
        Some((col, cell_row)) => {
            app.click(col, cell_row);
        }
        None => debug!(column, row, "Press outside the board"),
    }
}
