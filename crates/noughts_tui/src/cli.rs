//! Command-line interface for noughts.

use clap::Parser;
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe, played with the mouse", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Write logs here instead of the configured file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
