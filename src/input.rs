//! Input provider boundary.
//!
//! The engine never touches the console directly: it pulls
//! whitespace-delimited tokens from an [`InputSource`], so tests drive the
//! turn loop with scripted strings instead of a real terminal.

use crate::error::GameError;
use std::collections::VecDeque;
use std::io::BufRead;

/// A source of whitespace/newline-delimited input tokens.
pub trait InputSource {
    /// Returns the next token, or `None` when input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Io`] when the underlying read fails.
    fn next_token(&mut self) -> Result<Option<String>, GameError>;
}

/// Token splitter over any buffered reader.
///
/// Reads one line at a time and hands out its tokens individually, which
/// lets a move attempt consume a row and a column from the same line or
/// from separate lines.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Creates a token reader over a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> InputSource for TokenReader<R> {
    fn next_token(&mut self) -> Result<Option<String>, GameError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn tokens(input: &str) -> Vec<String> {
        let mut reader = TokenReader::new(Cursor::new(input));
        let mut out = Vec::new();
        while let Some(token) = reader.next_token().expect("read") {
            out.push(token);
        }
        out
    }

    #[test]
    fn test_splits_within_a_line() {
        assert_eq!(tokens("1 3\n"), ["1", "3"]);
    }

    #[test]
    fn test_splits_across_lines() {
        assert_eq!(tokens("1\n3\n"), ["1", "3"]);
    }

    #[test]
    fn test_skips_blank_lines() {
        assert_eq!(tokens("\n\n  2  2 \n"), ["2", "2"]);
    }

    #[test]
    fn test_exhausted_input_yields_none() {
        let mut reader = TokenReader::new(Cursor::new(""));
        assert!(reader.next_token().expect("read").is_none());
    }
}
