//! Core domain types for tic-tac-toe.

use crate::error::GameError;
use std::str::FromStr;
use tracing::instrument;

/// Mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Mark {
    /// Mark X (always moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl FromStr for Mark {
    type Err = GameError;

    /// Parses `x`/`o` in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Mark::X),
            "o" => Ok(Mark::O),
            _ => Err(GameError::InvalidMark(s.to_string())),
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A participant in the game.
///
/// Holds the player's mark and display label. Whose turn it is lives in
/// [`crate::GameStatus`], not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    mark: Mark,
    label: String,
}

impl Player {
    /// Creates a player from a textual mark (`x` or `o`, any case).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMark`] for any other symbol.
    #[instrument]
    pub fn new(mark: &str) -> Result<Self, GameError> {
        let mark = mark.parse::<Mark>()?;
        Ok(Self::from_mark(mark))
    }

    /// Creates the player for a mark. X is "Player 1", O is "Player 2".
    pub fn from_mark(mark: Mark) -> Self {
        let label = match mark {
            Mark::X => "Player 1",
            Mark::O => "Player 2",
        };
        Self {
            mark,
            label: label.to_string(),
        }
    }

    /// Returns the player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the player's display label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} with mark {}", self.label, self.mark)
    }
}
