//! Command-line interface for the tictactoe console.

use clap::Parser;
use tictactoe::ConsoleSettings;

/// Tic-tac-toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against another human in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter directive (e.g. "info" or "tictactoe=debug").
    /// Defaults to RUST_LOG, then "warn". Logs are written to stderr.
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Treat the pause command as invalid input
    #[arg(long)]
    pub no_pause: bool,
}

impl Cli {
    /// Console settings selected by the flags.
    pub fn settings(&self) -> ConsoleSettings {
        ConsoleSettings {
            pause_enabled: !self.no_pause,
        }
    }
}
