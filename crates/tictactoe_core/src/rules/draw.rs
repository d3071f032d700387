//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::board::Board;
use tracing::instrument;

/// A draw is a full board with no completed line.
#[instrument(skip(board), fields(filled = board.filled_count()))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board.snapshot()).is_none()
}
