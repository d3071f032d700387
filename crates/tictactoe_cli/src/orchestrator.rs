//! Turn loop between the two console players.

use crate::config::GameConfig;
use crate::input::Console;
use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_core::{Game, GameError, GameStatus};
use tracing::{debug, info, instrument, warn};

/// Drives one game over a console: render, prompt, place, repeat.
pub struct Orchestrator<R, W> {
    game: Game,
    console: Console<R, W>,
    config: GameConfig,
}

impl<R: BufRead, W: Write> Orchestrator<R, W> {
    /// Creates an orchestrator for a fresh game.
    pub fn new(config: GameConfig, console: Console<R, W>) -> Self {
        Self {
            game: Game::new(),
            console,
            config,
        }
    }

    /// Runs the game loop until a win or a draw.
    ///
    /// The board is printed before every turn and once more at the end,
    /// followed by the outcome.
    ///
    /// # Errors
    ///
    /// Fails if the console closes or errors. Malformed input and occupied
    /// cells are handled by re-prompting.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<GameStatus> {
        info!("Starting game");

        loop {
            let board = self.game.board().render(*self.config.cell_hints());
            self.console.show(&board)?;

            if let Some(announcement) = self.announcement() {
                self.console.show(&announcement)?;
                info!(status = %self.game.status(), "Game over");
                return Ok(self.game.status());
            }

            self.take_turn()?;
        }
    }

    /// Reads cell numbers from the side to move until one is placed.
    fn take_turn(&mut self) -> Result<()> {
        let player = self
            .game
            .current_player()
            .ok_or(GameError::GameOver)?
            .to_string();
        self.console.show(&format!("{} to move.", player))?;

        loop {
            let cell = self.console.read_cell(self.config.prompt())?;
            match self.game.play(cell) {
                Ok(status) => {
                    debug!(%player, cell, %status, "Move applied");
                    return Ok(());
                }
                Err(GameError::CellOccupied(cell)) => {
                    warn!(%player, cell, "Occupied cell chosen");
                    self.console
                        .show(&format!("Cell {} is already taken. Pick another case.", cell))?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Outcome message for a finished game.
    fn announcement(&self) -> Option<String> {
        match self.game.status() {
            GameStatus::WonX | GameStatus::WonO => {
                self.game.winner().map(|winner| format!("{} wins!", winner))
            }
            GameStatus::Draw => Some("It's a draw! The board is full.".to_string()),
            GameStatus::AwaitingMoveX | GameStatus::AwaitingMoveO => None,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }
}
