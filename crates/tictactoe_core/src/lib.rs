//! Pure tic-tac-toe game logic.
//!
//! No I/O lives here: the [`Board`] owns the grid, [`check_win`] inspects
//! it, and [`Game`] runs the turn state machine. Console front ends drive a
//! [`Game`] one cell number at a time.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, GameStatus};
//!
//! let mut game = Game::new();
//! for cell in [1, 4, 2, 5, 3] {
//!     game.play(cell)?;
//! }
//! assert_eq!(game.status(), GameStatus::WonX);
//! # Ok::<(), tictactoe_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod rules;
mod types;

pub use board::{Board, CELL_COUNT, Grid, SIZE};
pub use error::GameError;
pub use game::{Game, GameStatus};
pub use rules::{LINES, check_win, is_draw, winner};
pub use types::{Cell, Mark, Player};
