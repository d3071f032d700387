//! Turn state machine for tic-tac-toe.
//!
//! A [`Game`] starts in [`GameStatus::AwaitingMoveX`] and moves between the
//! two awaiting states until a placement completes a line (`WonX`/`WonO`)
//! or fills the ninth cell without one (`Draw`). Terminal states accept no
//! further placements.

use crate::board::Board;
use crate::error::GameError;
use crate::rules::{check_win, winner};
use crate::types::{Cell, Mark, Player};
use tracing::{info, instrument, warn};

/// Current state of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum GameStatus {
    /// X is to move.
    AwaitingMoveX,
    /// O is to move.
    AwaitingMoveO,
    /// X completed a line.
    WonX,
    /// O completed a line.
    WonO,
    /// All nine cells filled with no line.
    Draw,
}

impl GameStatus {
    fn awaiting(mark: Mark) -> Self {
        match mark {
            Mark::X => GameStatus::AwaitingMoveX,
            Mark::O => GameStatus::AwaitingMoveO,
        }
    }

    fn won(mark: Mark) -> Self {
        match mark {
            Mark::X => GameStatus::WonX,
            Mark::O => GameStatus::WonO,
        }
    }

    /// Returns the side to move, or `None` once the game is over.
    pub fn to_move(self) -> Option<Mark> {
        match self {
            GameStatus::AwaitingMoveX => Some(Mark::X),
            GameStatus::AwaitingMoveO => Some(Mark::O),
            _ => None,
        }
    }

    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::WonX => Some(Mark::X),
            GameStatus::WonO => Some(Mark::O),
            _ => None,
        }
    }

    /// Checks if the game has ended.
    pub fn is_terminal(self) -> bool {
        self.to_move().is_none()
    }
}

/// A single game: the board, both players and the turn state.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    status: GameStatus,
    history: Vec<usize>,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            players: [Player::from_mark(Mark::X), Player::from_mark(Mark::O)],
            status: GameStatus::AwaitingMoveX,
            history: Vec::new(),
        }
    }

    /// Places the mark of the side to move at `cell` and advances the turn.
    ///
    /// Only the mark just placed is checked for a win. On error the game is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the game already ended.
    /// - [`GameError::InvalidCell`] if `cell` is outside 1-9.
    /// - [`GameError::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn play(&mut self, cell: usize) -> Result<GameStatus, GameError> {
        let mark = self.status.to_move().ok_or(GameError::GameOver)?;

        self.board.place(mark, cell)?;
        self.history.push(cell);

        self.status = if check_win(self.board.snapshot(), mark) {
            info!(%mark, moves = self.history.len(), "Line completed");
            GameStatus::won(mark)
        } else if self.board.is_full() {
            info!("Board full with no winner");
            GameStatus::Draw
        } else {
            GameStatus::awaiting(mark.opponent())
        };

        assert_invariants(self);
        Ok(self.status)
    }

    /// Replays a sequence of cell numbers from a fresh game.
    ///
    /// # Errors
    ///
    /// Returns the first placement error encountered.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, GameError> {
        let mut game = Self::new();
        for &cell in cells {
            game.play(cell)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the side to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Mark> {
        self.status.to_move()
    }

    /// Returns the player owning `mark`.
    pub fn player(&self, mark: Mark) -> &Player {
        match mark {
            Mark::X => &self.players[0],
            Mark::O => &self.players[1],
        }
    }

    /// Returns the player to move, or `None` once the game is over.
    pub fn current_player(&self) -> Option<&Player> {
        self.to_move().map(|mark| self.player(mark))
    }

    /// Returns the winning player, if any.
    pub fn winner(&self) -> Option<&Player> {
        self.status.winner().map(|mark| self.player(mark))
    }

    /// Cell numbers played so far, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Checks if the game has ended.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Board state is consistent: marks alternate and counts add up.
fn holds(game: &Game) -> bool {
    let cells = game.board.snapshot().iter().flatten();
    let x_count = cells.clone().filter(|c| **c == Cell::Occupied(Mark::X)).count();
    let o_count = cells.filter(|c| **c == Cell::Occupied(Mark::O)).count();

    let filled = game.board.filled_count();
    let valid = x_count + o_count == filled
        && filled == game.history.len()
        && (x_count == o_count || x_count == o_count + 1)
        && (game.status.winner().is_some() || winner(game.board.snapshot()).is_none());
    if !valid {
        warn!(x_count, o_count, filled, status = %game.status, "Game consistency violated");
    }
    valid
}

fn assert_invariants(game: &Game) {
    debug_assert!(holds(game), "Game consistency violated");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_awaits_x() {
        let game = Game::new();
        assert_eq!(game.status(), GameStatus::AwaitingMoveX);
        assert_eq!(game.to_move(), Some(Mark::X));
        assert_eq!(game.current_player().map(Player::label), Some("Player 1"));
        assert!(!game.is_over());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new();
        assert_eq!(game.play(5), Ok(GameStatus::AwaitingMoveO));
        assert_eq!(game.play(1), Ok(GameStatus::AwaitingMoveX));
        assert_eq!(game.board().cell(5), Some(Cell::Occupied(Mark::X)));
        assert_eq!(game.board().cell(1), Some(Cell::Occupied(Mark::O)));
    }

    #[test]
    fn test_failed_placement_keeps_turn() {
        let mut game = Game::new();
        game.play(5).unwrap();
        assert_eq!(game.play(5), Err(GameError::CellOccupied(5)));
        assert_eq!(game.play(0), Err(GameError::InvalidCell(0)));
        assert_eq!(game.status(), GameStatus::AwaitingMoveO);
        assert_eq!(game.history(), &[5]);
        assert!(holds(&game));
    }

    #[test]
    fn test_o_can_win() {
        let game = Game::replay(&[1, 4, 2, 5, 9, 6]).unwrap();
        assert_eq!(game.status(), GameStatus::WonO);
        assert_eq!(game.winner().map(Player::mark), Some(Mark::O));
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut game = Game::replay(&[1, 4, 2, 5, 3]).unwrap();
        assert_eq!(game.play(9), Err(GameError::GameOver));
        assert_eq!(game.board().filled_count(), 5);
    }

    #[test]
    fn test_win_on_ninth_move_is_not_draw() {
        // X O O / O X X / X O X, X completes the main diagonal last
        let game = Game::replay(&[1, 2, 5, 3, 6, 4, 7, 8, 9]).unwrap();
        assert_eq!(game.board().filled_count(), 9);
        assert_eq!(game.status(), GameStatus::WonX);
    }

    #[test]
    fn test_status_helpers() {
        assert!(GameStatus::Draw.is_terminal());
        assert_eq!(GameStatus::Draw.winner(), None);
        assert_eq!(GameStatus::WonO.winner(), Some(Mark::O));
        assert_eq!(GameStatus::AwaitingMoveO.to_move(), Some(Mark::O));
        assert_eq!(GameStatus::WonX.to_move(), None);
    }
}
