//! Win detection logic for tic-tac-toe.

use crate::board::Grid;
use crate::types::{Cell, Mark};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Every winning line as `(row, column)` coordinates.
pub const LINES: [[(usize, usize); 3]; 8] = [
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

/// Checks if `mark` holds all three cells of any row, column or diagonal.
///
/// Empty cells never match, so sparse boards simply return `false`.
#[instrument(skip(grid))]
pub fn check_win(grid: &Grid, mark: Mark) -> bool {
    let target = Cell::Occupied(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|&(row, col)| grid[row][col] == target))
}

/// Returns the mark holding a complete line, if any.
#[instrument(skip(grid))]
pub fn winner(grid: &Grid) -> Option<Mark> {
    Mark::iter().find(|&mark| check_win(grid, mark))
}
