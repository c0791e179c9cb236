//! Tic-tac-toe - console game
//!
//! Two players share the terminal and take turns entering square numbers.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io;
use std::sync::Arc;
use tictactoe::{Console, GameEngine};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_filter.as_deref());

    info!("Starting tic-tac-toe console");

    let engine = Arc::new(GameEngine::new());
    let mut console = Console::new(engine, io::stdin().lock(), io::stdout().lock(), cli.settings());
    let summary = console.run().context("Console session failed")?;

    info!(
        moves = summary.moves_played,
        games = summary.games_completed,
        "Session ended"
    );
    Ok(())
}

/// Installs the stderr subscriber; an explicit filter wins over RUST_LOG.
fn init_tracing(filter: Option<&str>) {
    let filter = filter
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
