//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};

/// Tic-Tac-Toe - two-player console game
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player command-line tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run; defaults to an interactive game on an empty board
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// Starting position: 9 cells in row-major order ('X', 'O', ' ' or '_')
        #[arg(short, long)]
        state: Option<String>,
    },

    /// Report the result of a serialized board without playing
    Report {
        /// Board to evaluate: 9 cells in row-major order ('X', 'O', ' ' or '_')
        state: String,
    },
}
