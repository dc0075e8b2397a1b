//! Noughts - two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts_tui::{Cli, ViewSettings};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = ViewSettings::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    if let Some(log_file) = cli.log_file {
        settings = settings.with_log_file(log_file);
    }

    noughts_tui::init_tracing(&settings)?;
    info!(config = %cli.config.display(), "Settings ready");

    noughts_tui::run(&settings)
}
