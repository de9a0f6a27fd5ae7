//! The board cell store.

use crate::error::GameError;
use crate::types::{Cell, Player};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board dimension; the rule logic assumes a square 3×3 grid.
pub const DIMENSION: usize = 3;

/// A fixed-dimension 2D cell store, row-major.
///
/// `Grid` performs no range validation on `get`/`set`; the engine checks
/// coordinates before touching cells. Out-of-range access panics via slice
/// indexing, which the engine never triggers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with every cell set to [`Cell::Empty`].
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Loads cells from a flat string in row-major order.
    ///
    /// Accepts `'X'`, `'O'`, and the two empty markers `' '` and `'_'`,
    /// which both canonicalize to [`Cell::Empty`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidStateLength`] when the character count
    /// differs from `rows × cols`, and [`GameError::InvalidStateChar`] for
    /// any character outside the accepted set.
    pub fn load(&mut self, serialized: &str) -> Result<(), GameError> {
        let expected = self.rows * self.cols;
        let actual = serialized.chars().count();
        if actual != expected {
            return Err(GameError::InvalidStateLength { expected, actual });
        }

        for (i, c) in serialized.chars().enumerate() {
            let cell = match c {
                'X' => Cell::Occupied(Player::X),
                'O' => Cell::Occupied(Player::O),
                ' ' | '_' => Cell::Empty,
                found => return Err(GameError::InvalidStateChar { index: i, found }),
            };
            self.set(i / self.cols, i % self.cols, cell);
        }

        Ok(())
    }

    /// Returns the cell at the given 0-indexed coordinates.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Sets the cell at the given 0-indexed coordinates.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Checks if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Counts the cells occupied by the given player.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == Cell::Occupied(player))
            .count()
    }
}

impl fmt::Display for Grid {
    /// Renders the framed board:
    ///
    /// ```text
    /// ---------
    /// | X O   |
    /// |   X   |
    /// |     O |
    /// ---------
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---------")?;
        for row in 0..self.rows {
            write!(f, "| ")?;
            for col in 0..self.cols {
                write!(f, "{} ", self.get(row, col).symbol())?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "---------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_all_empty() {
        let grid = Grid::new(DIMENSION, DIMENSION);
        for row in 0..DIMENSION {
            for col in 0..DIMENSION {
                assert_eq!(grid.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_set_then_get() {
        let mut grid = Grid::new(DIMENSION, DIMENSION);
        grid.set(1, 2, Cell::Occupied(Player::O));
        assert_eq!(grid.get(1, 2), Cell::Occupied(Player::O));
        assert_eq!(grid.get(2, 1), Cell::Empty);
    }

    #[test]
    fn test_load_row_major_layout() {
        let mut grid = Grid::new(DIMENSION, DIMENSION);
        grid.load("XXXOO____").expect("valid state");

        assert_eq!(grid.get(0, 0), Cell::Occupied(Player::X));
        assert_eq!(grid.get(0, 1), Cell::Occupied(Player::X));
        assert_eq!(grid.get(0, 2), Cell::Occupied(Player::X));
        assert_eq!(grid.get(1, 0), Cell::Occupied(Player::O));
        assert_eq!(grid.get(1, 1), Cell::Occupied(Player::O));
        assert_eq!(grid.get(1, 2), Cell::Empty);
        assert_eq!(grid.get(2, 0), Cell::Empty);
    }

    #[test]
    fn test_load_accepts_both_empty_markers() {
        let mut grid = Grid::new(DIMENSION, DIMENSION);
        grid.load("X_O X_O  ").expect("valid state");
        assert_eq!(grid.get(0, 1), Cell::Empty);
        assert_eq!(grid.get(1, 0), Cell::Empty);
        assert_eq!(grid.get(2, 1), Cell::Empty);
    }

    #[test]
    fn test_load_rejects_short_state() {
        let mut grid = Grid::new(DIMENSION, DIMENSION);
        let err = grid.load("XXXOO___").unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidStateLength {
                expected: 9,
                actual: 8
            }
        ));
    }

    #[test]
    fn test_load_rejects_long_state() {
        let mut grid = Grid::new(DIMENSION, DIMENSION);
        let err = grid.load("XXXOO_____").unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidStateLength {
                expected: 9,
                actual: 10
            }
        ));
    }

    #[test]
    fn test_load_rejects_unknown_character() {
        let mut grid = Grid::new(DIMENSION, DIMENSION);
        let err = grid.load("XXXOO__Z_").unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidStateChar {
                index: 7,
                found: 'Z'
            }
        ));
    }

    #[test]
    fn test_is_full() {
        let mut grid = Grid::new(DIMENSION, DIMENSION);
        assert!(!grid.is_full());
        grid.load("XXOOOXXOX").expect("valid state");
        assert!(grid.is_full());
    }

    #[test]
    fn test_count() {
        let mut grid = Grid::new(DIMENSION, DIMENSION);
        grid.load("XXXOO____").expect("valid state");
        assert_eq!(grid.count(Player::X), 3);
        assert_eq!(grid.count(Player::O), 2);
    }

    #[test]
    fn test_display_frame() {
        let mut grid = Grid::new(DIMENSION, DIMENSION);
        grid.load("XO X O  X").expect("valid state");
        let rendered = grid.to_string();
        let expected = "---------\n\
                        | X O   |\n\
                        | X   O |\n\
                        |     X |\n\
                        ---------";
        assert_eq!(rendered, expected);
    }
}
