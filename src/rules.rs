//! Win, draw, and state-validity evaluation.

use crate::grid::Grid;
use crate::types::{Cell, Player};
use derive_more::Display;
use tracing::instrument;

/// The eight winning lines: three rows, three columns, two diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks whether the given player occupies all three cells of some line.
pub fn is_winner(grid: &Grid, player: Player) -> bool {
    let mark = Cell::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&(row, col)| grid.get(row, col) == mark))
}

/// Checks for a winner on the board.
///
/// Returns `Some(player)` if the player has three in a line, `None`
/// otherwise. On a board where both players hold a line (only reachable
/// through a loaded state), X is reported; [`evaluate`] flags such boards
/// as impossible before winner order matters.
pub fn winner(grid: &Grid) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| is_winner(grid, player))
}

/// Result of evaluating a loaded board offline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Verdict {
    /// Board violates the single-winner or move-count-parity invariants.
    #[display("Impossible")]
    Impossible,
    /// The player holds a winning line.
    #[display("{_0} wins")]
    Won(Player),
    /// Board is full with no winner.
    #[display("Draw")]
    Draw,
    /// No winner and empty cells remain.
    #[display("Game not finished")]
    Unfinished,
}

/// Evaluates a board for offline result reporting.
///
/// A board is impossible when both players hold a winning line, or when
/// the occupied-cell counts differ by more than one (turns alternate
/// strictly, so a legal board never drifts further apart). Otherwise the
/// verdict priority is X wins, O wins, draw, not finished.
#[instrument(skip(grid), fields(x = grid.count(Player::X), o = grid.count(Player::O)))]
pub fn evaluate(grid: &Grid) -> Verdict {
    let x_wins = is_winner(grid, Player::X);
    let o_wins = is_winner(grid, Player::O);
    let x_count = grid.count(Player::X);
    let o_count = grid.count(Player::O);

    if (x_wins && o_wins) || x_count.abs_diff(o_count) > 1 {
        Verdict::Impossible
    } else if x_wins {
        Verdict::Won(Player::X)
    } else if o_wins {
        Verdict::Won(Player::O)
    } else if grid.is_full() {
        Verdict::Draw
    } else {
        Verdict::Unfinished
    }
}
