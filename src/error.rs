//! Game error types.

use derive_more::{Display, Error};

/// Errors that abort a game run.
///
/// Bad interactive input (non-numeric, out of range, occupied cell) is not
/// an error: the engine reports it on the output sink and re-prompts. Only
/// conditions the loop cannot recover from land here.
#[derive(Debug, Display, Error)]
pub enum GameError {
    /// Loaded state string has the wrong length.
    #[display("starting state must have a length of {expected}, got {actual}")]
    InvalidStateLength {
        /// Required character count (rows × columns).
        expected: usize,
        /// Character count actually supplied.
        actual: usize,
    },

    /// Loaded state string contains a character that is not a cell.
    #[display("unrecognized cell character {found:?} at index {index}")]
    InvalidStateChar {
        /// Offset of the offending character.
        index: usize,
        /// The character itself.
        found: char,
    },

    /// Input provider ran out of tokens mid-game.
    #[display("input exhausted while waiting for a move")]
    InputExhausted,

    /// Reading input or writing output failed.
    #[display("i/o error: {source}")]
    Io {
        /// Underlying i/o error.
        source: std::io::Error,
    },
}

impl From<std::io::Error> for GameError {
    fn from(source: std::io::Error) -> Self {
        GameError::Io { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_error_display() {
        let err = GameError::InvalidStateLength {
            expected: 9,
            actual: 8,
        };
        assert_eq!(
            err.to_string(),
            "starting state must have a length of 9, got 8"
        );
    }

    #[test]
    fn test_exhausted_display() {
        assert_eq!(
            GameError::InputExhausted.to_string(),
            "input exhausted while waiting for a move"
        );
    }
}
