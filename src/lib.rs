//! Two-player command-line tic-tac-toe.
//!
//! The core is the game-state and rule-evaluation logic: the [`Grid`] cell
//! store, the [`GameEngine`] turn loop, and the offline [`Verdict`]
//! evaluation for loaded states. Console I/O sits behind the
//! [`InputSource`] boundary and a plain [`std::io::Write`] sink, so the
//! whole loop is testable with scripted input.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tictactoe::{GameEngine, GameStatus, Player, TokenReader};
//!
//! # fn example() -> Result<(), tictactoe::GameError> {
//! let mut engine = GameEngine::new();
//! let mut input = TokenReader::new(Cursor::new("1 1\n2 1\n1 2\n2 2\n1 3\n"));
//! let mut output = Vec::new();
//!
//! let status = engine.run(&mut input, &mut output)?;
//! assert_eq!(status, GameStatus::Won(Player::X));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod engine;
mod error;
mod grid;
mod input;
mod rules;
mod types;

// Crate-level exports - engine
pub use engine::GameEngine;

// Crate-level exports - errors
pub use error::GameError;

// Crate-level exports - board
pub use grid::{DIMENSION, Grid};

// Crate-level exports - input boundary
pub use input::{InputSource, TokenReader};

// Crate-level exports - rules
pub use rules::{Verdict, evaluate, is_winner, winner};

// Crate-level exports - domain types
pub use types::{Cell, GameStatus, Player};
