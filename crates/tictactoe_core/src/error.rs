//! Error types for tic-tac-toe game logic.

use crate::board::CELL_COUNT;

/// Error that can occur when building players or applying a placement.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The symbol is neither X nor O.
    #[display("Mark can only be X or O, got {:?}", _0)]
    InvalidMark(String),

    /// The cell number is outside 1-9.
    #[display("Invalid case {}, must be between 1 and {}", _0, CELL_COUNT)]
    InvalidCell(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for GameError {}
