//! Terminal setup, logging and the event loop.

use crate::app::App;
use crate::geometry::BoardGeometry;
use crate::input::handle_event;
use crate::settings::ViewSettings;
use crate::ui;
use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::EnvFilter;

/// Sends logs to the configured file so they don't interfere with the board.
pub fn init_tracing(settings: &ViewSettings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Runs a restore action on drop, including on early `?` returns.
struct TerminalGuard<F: FnMut()> {
    restore: Option<F>,
}

impl<F: FnMut()> TerminalGuard<F> {
    fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        if let Some(mut restore) = self.restore.take() {
            debug!("Restoring terminal");
            restore();
        }
    }
}

/// Leaves raw mode and the alternate screen. Failures are logged, not raised.
fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        warn!(error = ?err, "Failed to disable raw mode");
    }
    let mut stdout = io::stdout();
    if let Err(err) = execute!(
        stdout,
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    ) {
        warn!(error = ?err, "Failed to leave alternate screen");
    }
}

/// Runs the board until the user quits.
#[instrument(skip_all)]
pub fn run(settings: &ViewSettings) -> Result<()> {
    info!("Starting noughts");

    enable_raw_mode()?;
    let _restore = TerminalGuard::new(restore_terminal);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(), *settings.padding());

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("Exiting noughts");
    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    padding: f64,
) -> Result<()> {
    let mut board = BoardGeometry::default();

    while !app.should_quit() {
        terminal.draw(|f| board = ui::draw(f, &app, padding))?;
        handle_event(&mut app, event::read()?, &board);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn fails_after_guard(restored: &Cell<bool>) -> Result<()> {
        let _restore = TerminalGuard::new(|| restored.set(true));
        anyhow::bail!("terminal setup failed");
    }

    #[test]
    fn test_guard_restores_on_early_error() {
        let restored = Cell::new(false);
        assert!(fails_after_guard(&restored).is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_guard_restores_once() {
        let count = Cell::new(0);
        {
            let _restore = TerminalGuard::new(|| count.set(count.get() + 1));
        }
        assert_eq!(count.get(), 1);
    }
}
