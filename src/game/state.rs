use tracing::debug;

use crate::error::{ConfigError, MoveError};

use super::board::{Board, Position};
use super::player::Player;
use super::win::check_win;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Board plus turn and lifecycle tracking for a single game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    run_to_win: usize,
}

impl GameState {
    /// Create initial game state. Player one moves first.
    pub fn new(columns: usize, rows: usize, run_to_win: usize) -> Result<Self, ConfigError> {
        if run_to_win < 1 {
            return Err(ConfigError::InvalidRunToWin(run_to_win));
        }

        Ok(GameState {
            board: Board::new(columns, rows)?,
            current_player: Player::One,
            status: GameStatus::InProgress,
            run_to_win,
        })
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn run_to_win(&self) -> usize {
        self.run_to_win
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_over()
    }

    /// Get list of playable columns (none once the game is over)
    pub fn open_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.open_columns()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// On success returns where the piece landed and either ends the game or
    /// hands the turn to the other player. On error nothing changes.
    pub fn apply_move(&mut self, column: usize) -> Result<Position, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameAlreadyEnded);
        }

        let mover = self.current_player;
        let pos = self.board.place(column, mover)?;
        debug!(player = %mover, row = pos.row, col = pos.col, "piece placed");

        // Win takes precedence over a full board
        if check_win(&self.board, pos, mover, self.run_to_win) {
            self.status = GameStatus::Won(mover);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.current_player = mover.other();
        }

        Ok(pos)
    }
}
