//! Command-line interface for the tic-tac-toe driver.

use clap::Parser;
use std::path::PathBuf;

/// Play tic-tac-toe in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML driver config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Omit the separator line under row 1
    #[arg(long)]
    pub no_separator: bool,

    /// Print a JSON summary of the finished game to stdout
    #[arg(long)]
    pub json: bool,

    /// Tracing filter used when RUST_LOG is unset (e.g. "debug")
    #[arg(long)]
    pub log_filter: Option<String>,
}
