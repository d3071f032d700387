//! 3x3 board owning the grid of cells.

use crate::error::GameError;
use crate::types::{Cell, Mark};
use tracing::{debug, instrument};

/// Number of rows (and columns).
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// Row-major grid of cells, indexed `[row][column]`.
pub type Grid = [[Cell; SIZE]; SIZE];

const DIVIDER: &str = "---|---|---";

/// 3x3 tic-tac-toe board.
///
/// Cells are addressed by a 1-based cell number, left-to-right then
/// top-to-bottom. The filled count always matches the number of occupied
/// cells, and an occupied cell is never overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    grid: Grid,
    filled: usize,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps a cell number (1-9) to `(row, column)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidCell`] outside 1-9.
    pub fn coordinates(cell: usize) -> Result<(usize, usize), GameError> {
        if !(1..=CELL_COUNT).contains(&cell) {
            return Err(GameError::InvalidCell(cell));
        }
        let index = cell - 1;
        Ok((index / SIZE, index % SIZE))
    }

    /// Places `mark` at the numbered cell.
    ///
    /// The board is left untouched on error.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidCell`] if `cell` is outside 1-9.
    /// - [`GameError::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self), fields(filled = self.filled))]
    pub fn place(&mut self, mark: Mark, cell: usize) -> Result<(), GameError> {
        let (row, col) = Self::coordinates(cell)?;
        if !self.grid[row][col].is_empty() {
            return Err(GameError::CellOccupied(cell));
        }

        self.grid[row][col] = Cell::Occupied(mark);
        self.filled += 1;
        debug!(row, col, filled = self.filled, "Mark placed");
        Ok(())
    }

    /// Returns the state of a numbered cell, or `None` outside 1-9.
    pub fn cell(&self, cell: usize) -> Option<Cell> {
        Self::coordinates(cell)
            .ok()
            .map(|(row, col)| self.grid[row][col])
    }

    /// Returns the number of occupied cells.
    pub fn filled_count(&self) -> usize {
        self.filled
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.filled == CELL_COUNT
    }

    /// Returns a read-only view of the grid.
    pub fn snapshot(&self) -> &Grid {
        &self.grid
    }

    /// Cell numbers that are still empty, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        (1..=CELL_COUNT)
            .filter(|&cell| matches!(self.cell(cell), Some(Cell::Empty)))
            .collect()
    }

    /// Renders the board as text.
    ///
    /// With `hints`, empty cells show their cell number instead of a blank.
    pub fn render(&self, hints: bool) -> String {
        let mut out = String::from("Current Board:\n");
        for (row, cells) in self.grid.iter().enumerate() {
            let symbols: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell {
                    Cell::Occupied(mark) => mark.to_string(),
                    Cell::Empty if hints => (row * SIZE + col + 1).to_string(),
                    Cell::Empty => " ".to_string(),
                })
                .collect();
            out.push_str(&format!(" {} \n", symbols.join(" | ")));
            if row < SIZE - 1 {
                out.push_str(DIVIDER);
                out.push('\n');
            }
        }
        out
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_row_major() {
        assert_eq!(Board::coordinates(1), Ok((0, 0)));
        assert_eq!(Board::coordinates(3), Ok((0, 2)));
        assert_eq!(Board::coordinates(4), Ok((1, 0)));
        assert_eq!(Board::coordinates(5), Ok((1, 1)));
        assert_eq!(Board::coordinates(9), Ok((2, 2)));
    }

    #[test]
    fn test_place_writes_mark() {
        let mut board = Board::new();
        board.place(Mark::X, 6).unwrap();
        assert_eq!(board.snapshot()[1][2], Cell::Occupied(Mark::X));
        assert_eq!(board.cell(6), Some(Cell::Occupied(Mark::X)));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_place_out_of_range_leaves_board_unchanged() {
        let mut board = Board::new();
        board.place(Mark::O, 2).unwrap();
        for cell in [0, 10, 11, 100, usize::MAX] {
            assert_eq!(board.place(Mark::X, cell), Err(GameError::InvalidCell(cell)));
            assert_eq!(board.filled_count(), 1);
        }
    }

    #[test]
    fn test_place_occupied_rejected() {
        let mut board = Board::new();
        board.place(Mark::X, 5).unwrap();
        assert_eq!(board.place(Mark::O, 5), Err(GameError::CellOccupied(5)));
        assert_eq!(board.cell(5), Some(Cell::Occupied(Mark::X)));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_filled_count_matches_grid() {
        let mut board = Board::new();
        for (i, cell) in [1, 5, 9, 3].into_iter().enumerate() {
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            board.place(mark, cell).unwrap();
        }
        let occupied = board
            .snapshot()
            .iter()
            .flatten()
            .filter(|c| !c.is_empty())
            .count();
        assert_eq!(board.filled_count(), occupied);
        assert_eq!(board.empty_cells(), vec![2, 4, 6, 7, 8]);
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        for cell in 1..=CELL_COUNT {
            assert!(!board.is_full());
            board.place(Mark::X, cell).unwrap();
        }
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
    }

    #[test]
    fn test_render_blank_cells() {
        let mut board = Board::new();
        board.place(Mark::X, 1).unwrap();
        board.place(Mark::O, 5).unwrap();
        let expected = concat!(
            "Current Board:\n",
            " X |   |   \n",
            "---|---|---\n",
            "   | O |   \n",
            "---|---|---\n",
            "   |   |   \n",
        );
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_render_hints() {
        let mut board = Board::new();
        board.place(Mark::O, 9).unwrap();
        let rendered = board.render(true);
        assert!(rendered.contains(" 1 | 2 | 3 \n"));
        assert!(rendered.contains(" 7 | 8 | O \n"));
    }
}
