//! The turn loop: move prompting, validation, and terminal detection.

use crate::error::GameError;
use crate::grid::{DIMENSION, Grid};
use crate::input::InputSource;
use crate::rules;
use crate::types::{Cell, GameStatus, Player};
use derive_getters::Getters;
use std::io::Write;
use tracing::{debug, info, instrument};

/// Two-player tic-tac-toe engine.
///
/// Owns the grid and the player to move exclusively; one instance drives
/// one game from start to a terminal state.
#[derive(Debug, Clone, Getters)]
pub struct GameEngine {
    /// The board.
    grid: Grid,
    /// Player whose move is requested next.
    current_player: Player,
}

impl GameEngine {
    /// Creates an engine with an empty board, X to move.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(DIMENSION, DIMENSION),
            current_player: Player::X,
        }
    }

    /// Creates an engine from a serialized starting state, X to move.
    ///
    /// # Errors
    ///
    /// Propagates [`Grid::load`] failures for a mis-sized or malformed
    /// state string.
    #[instrument]
    pub fn from_state(serialized: &str) -> Result<Self, GameError> {
        let mut grid = Grid::new(DIMENSION, DIMENSION);
        grid.load(serialized)?;
        Ok(Self {
            grid,
            current_player: Player::X,
        })
    }

    /// Runs the interactive turn loop until a terminal state.
    ///
    /// Each turn renders the board, prompts for a 1-indexed `row column`
    /// pair, applies the move, renders again, and checks the mover for a
    /// win before checking for a draw. Rejected input (non-numeric, out of
    /// range, occupied) produces a message on the output sink and a
    /// re-prompt, never a fatal error.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InputExhausted`] when the input provider runs
    /// dry mid-game, and [`GameError::Io`] on read/write failure.
    #[instrument(skip_all)]
    pub fn run<I, W>(&mut self, input: &mut I, output: &mut W) -> Result<GameStatus, GameError>
    where
        I: InputSource,
        W: Write,
    {
        info!(player = %self.current_player, "game started");
        writeln!(output, "{}", self.grid)?;

        loop {
            let (row, col) = self.prompt_move(input, output)?;
            self.grid.set(row, col, Cell::Occupied(self.current_player));
            debug!(row, col, player = %self.current_player, "move accepted");
            writeln!(output, "{}", self.grid)?;

            if rules::is_winner(&self.grid, self.current_player) {
                writeln!(output, "{} wins", self.current_player)?;
                info!(winner = %self.current_player, "game over");
                return Ok(GameStatus::Won(self.current_player));
            }
            if self.grid.is_full() {
                writeln!(output, "Draw")?;
                info!("game over in a draw");
                return Ok(GameStatus::Draw);
            }

            self.current_player = self.current_player.opponent();
        }
    }

    /// Renders the board and the offline verdict for a loaded state.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Io`] when writing to the sink fails.
    pub fn report<W: Write>(&self, output: &mut W) -> Result<(), GameError> {
        writeln!(output, "{}", self.grid)?;
        writeln!(output, "{}", rules::evaluate(&self.grid))?;
        Ok(())
    }

    /// Prompts until the current player supplies a valid move.
    ///
    /// Returns 0-indexed coordinates of a free cell. A non-numeric token
    /// discards exactly that token; range and occupancy failures discard
    /// the whole pair. Every rejection emits its message before retrying.
    fn prompt_move<I, W>(&self, input: &mut I, output: &mut W) -> Result<(usize, usize), GameError>
    where
        I: InputSource,
        W: Write,
    {
        loop {
            let Some(row) = self.read_number(input, output)? else {
                continue;
            };
            let Some(col) = self.read_number(input, output)? else {
                continue;
            };

            let range = 1..=DIMENSION as i64;
            if !range.contains(&row) || !range.contains(&col) {
                writeln!(output, "Coordinates should be from 1 to {DIMENSION}!")?;
                continue;
            }

            let (row, col) = (row as usize - 1, col as usize - 1);
            if matches!(self.grid.get(row, col), Cell::Occupied(_)) {
                writeln!(output, "This cell is occupied! Choose another one!")?;
                continue;
            }

            return Ok((row, col));
        }
    }

    /// Reads one token as an integer.
    ///
    /// `Ok(None)` means the token was not numeric and the message was
    /// emitted; the caller restarts the attempt.
    fn read_number<I, W>(&self, input: &mut I, output: &mut W) -> Result<Option<i64>, GameError>
    where
        I: InputSource,
        W: Write,
    {
        let token = input.next_token()?.ok_or(GameError::InputExhausted)?;
        match token.parse::<i64>() {
            Ok(number) => Ok(Some(number)),
            Err(_) => {
                debug!(token, "discarding non-numeric token");
                writeln!(output, "You should enter numbers!")?;
                Ok(None)
            }
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
