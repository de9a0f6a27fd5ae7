//! Tic-Tac-Toe - two-player console game.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use tictactoe::{GameEngine, TokenReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Play { state }) => play(state.as_deref()),
        Some(Command::Report { state }) => report(&state),
        None => play(None),
    }
}

/// Run the interactive game loop on stdin/stdout.
fn play(state: Option<&str>) -> Result<()> {
    let mut engine = match state {
        Some(serialized) => GameEngine::from_state(serialized)?,
        None => GameEngine::new(),
    };

    let stdin = io::stdin();
    let mut input = TokenReader::new(stdin.lock());
    let mut output = io::stdout().lock();

    let status = engine.run(&mut input, &mut output)?;
    info!(?status, "game finished");
    Ok(())
}

/// Print the offline verdict for a serialized board.
fn report(state: &str) -> Result<()> {
    let engine = GameEngine::from_state(state)?;
    let mut output = io::stdout().lock();
    engine.report(&mut output)?;
    Ok(())
}
