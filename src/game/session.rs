//! A game session: the configuration plus the game being played under it.
//!
//! This is the surface a presentation layer drives. Every call returns a
//! value describing what happened, and nothing is retained between sessions.

use tracing::{debug, info, instrument, warn};

use crate::config::GameConfig;
use crate::error::{ConfigError, MoveError};

use super::board::{Board, Cell, Position};
use super::player::Player;
use super::state::{GameState, GameStatus};

/// Result of a [`Session::drop_piece`] call, with the game state that
/// followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Where the piece landed, or why the move was rejected
    pub result: Result<Position, MoveError>,
    pub status: GameStatus,
    /// Player to move next, or the winner once the game is won
    pub current_player: Player,
}

impl MoveOutcome {
    pub fn placed_at(&self) -> Option<Position> {
        self.result.as_ref().ok().copied()
    }

    pub fn is_accepted(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    config: GameConfig,
    game: GameState,
}

impl Session {
    /// Validate `config` and start a fresh game under it.
    #[instrument(
        skip(config),
        fields(
            columns = config.columns,
            rows = config.rows,
            run_to_win = config.run_to_win
        )
    )]
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let config = config.normalized();
        let game = GameState::new(config.columns, config.rows, config.run_to_win)?;
        if !config.is_winnable() {
            warn!("run_to_win exceeds both board dimensions, no win is possible");
        }
        info!("session started");
        Ok(Session { config, game })
    }

    /// Replace this session with a new one built from `config`. If `config`
    /// is invalid the current session is left as it was.
    pub fn reset(&mut self, config: GameConfig) -> Result<(), ConfigError> {
        *self = Session::new(config)?;
        Ok(())
    }

    /// Start over with the current configuration.
    pub fn restart(&mut self) {
        self.game = GameState::new(self.config.columns, self.config.rows, self.config.run_to_win)
            .expect("session config was validated");
        info!("session restarted");
    }

    /// Drop the current player's piece into `column`.
    #[instrument(skip(self), fields(player = %self.game.current_player()))]
    pub fn drop_piece(&mut self, column: usize) -> MoveOutcome {
        let result = self.game.apply_move(column);

        match (&result, self.game.status()) {
            (Err(err), _) => debug!(%err, "move rejected"),
            (Ok(_), GameStatus::Won(player)) => {
                info!(winner = %player, name = self.config.player_name(player), "game won")
            }
            (Ok(_), GameStatus::Draw) => info!("game drawn"),
            (Ok(_), GameStatus::InProgress) => {}
        }

        MoveOutcome {
            result,
            status: self.game.status(),
            current_player: self.game.current_player(),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    pub fn current_player(&self) -> Player {
        self.game.current_player()
    }

    /// Cell contents, or `None` outside the board. Row 0 is the bottom.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        self.game.board().cell_at(Position::new(row, col))
    }

    pub fn board(&self) -> &Board {
        self.game.board()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player_name(&self, player: Player) -> &str {
        self.config.player_name(player)
    }

    /// Name of the winning player, once there is one
    pub fn winner_name(&self) -> Option<&str> {
        self.status()
            .winner()
            .map(|player| self.config.player_name(player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(columns: usize, rows: usize, run_to_win: usize) -> Session {
        Session::new(GameConfig {
            columns,
            rows,
            run_to_win,
            ..GameConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_new_session() {
        let session = Session::new(GameConfig::default()).unwrap();
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.current_player(), Player::One);
        assert_eq!(session.board().columns(), 7);
        assert_eq!(session.board().rows(), 6);
        assert_eq!(session.cell_at(0, 0), Some(Cell::Empty));
        assert_eq!(session.cell_at(6, 0), None);
        assert_eq!(session.winner_name(), None);
    }

    #[test]
    fn test_new_session_rejects_oversized_board() {
        let err = Session::new(GameConfig {
            columns: usize::MAX,
            rows: 1,
            ..GameConfig::default()
        })
        .unwrap_err();
        assert_eq!(err.field(), Some("columns"));
    }

    #[test]
    fn test_new_session_accepts_unwinnable_run() {
        let mut session = session(2, 2, 3);
        for col in [0, 1, 0, 1] {
            session.drop_piece(col);
        }
        assert_eq!(session.status(), GameStatus::Draw);
    }

    #[test]
    fn test_new_session_trims_names() {
        let session = Session::new(GameConfig {
            player_names: ["  Ann ".into(), "Bo".into()],
            ..GameConfig::default()
        })
        .unwrap();
        assert_eq!(session.player_name(Player::One), "Ann");
    }

    #[test]
    fn test_new_session_rejects_invalid_config() {
        let err = Session::new(GameConfig {
            rows: 0,
            ..GameConfig::default()
        })
        .unwrap_err();
        assert_eq!(err.field(), Some("rows"));
    }

    #[test]
    fn test_vertical_win_scenario() {
        let mut session = session(7, 6, 4);
        let moves = [0, 1, 0, 1, 0, 1];
        for col in moves {
            let outcome = session.drop_piece(col);
            assert!(outcome.is_accepted());
            assert_eq!(outcome.status, GameStatus::InProgress);
        }

        let outcome = session.drop_piece(0);
        assert_eq!(outcome.placed_at(), Some(Position::new(3, 0)));
        assert_eq!(outcome.status, GameStatus::Won(Player::One));
        assert_eq!(outcome.current_player, Player::One);
        assert_eq!(session.winner_name(), Some("Player 1"));
    }

    #[test]
    fn test_single_column_draw_scenario() {
        let mut session = session(1, 4, 4);
        let mut last = None;
        for expected in [Player::One, Player::Two, Player::One, Player::Two] {
            assert_eq!(session.current_player(), expected);
            last = Some(session.drop_piece(0));
        }

        let outcome = last.unwrap();
        assert_eq!(outcome.placed_at(), Some(Position::new(3, 0)));
        assert_eq!(outcome.status, GameStatus::Draw);
        assert_eq!(session.status(), GameStatus::Draw);
        assert!(session.board().is_full());
    }

    #[test]
    fn test_column_full_scenario() {
        let mut session = session(2, 2, 4);
        session.drop_piece(0);
        session.drop_piece(0);

        let before = session.clone();
        let outcome = session.drop_piece(0);
        assert_eq!(outcome.result, Err(MoveError::ColumnFull { column: 0 }));
        assert_eq!(outcome.status, GameStatus::InProgress);
        assert_eq!(outcome.current_player, Player::One);
        assert_eq!(session, before);

        // Same player may retry elsewhere
        let outcome = session.drop_piece(1);
        assert_eq!(outcome.placed_at(), Some(Position::new(0, 1)));
        assert_eq!(outcome.current_player, Player::Two);
    }

    #[test]
    fn test_game_already_ended_scenario() {
        let mut session = session(7, 6, 2);
        session.drop_piece(0);
        session.drop_piece(3);
        let outcome = session.drop_piece(1);
        assert_eq!(outcome.status, GameStatus::Won(Player::One));

        let before = session.clone();
        let outcome = session.drop_piece(5);
        assert_eq!(outcome.result, Err(MoveError::GameAlreadyEnded));
        assert_eq!(outcome.status, GameStatus::Won(Player::One));
        assert_eq!(session, before);
    }

    #[test]
    fn test_invalid_column_is_rejected() {
        let mut session = session(3, 3, 3);
        let outcome = session.drop_piece(3);
        assert!(matches!(outcome.result, Err(MoveError::InvalidColumn { .. })));
        assert_eq!(outcome.current_player, Player::One);
        assert_eq!(session.board().turns_played(), 0);
    }

    #[test]
    fn test_reset_replaces_session() {
        let mut session = session(7, 6, 4);
        session.drop_piece(3);

        session
            .reset(GameConfig {
                columns: 5,
                player_names: ["Ann".into(), "Bo".into()],
                ..GameConfig::default()
            })
            .unwrap();
        assert_eq!(session.board().columns(), 5);
        assert_eq!(session.board().turns_played(), 0);
        assert_eq!(session.current_player(), Player::One);
        assert_eq!(session.player_name(Player::Two), "Bo");
    }

    #[test]
    fn test_invalid_reset_keeps_prior_session() {
        let mut session = session(7, 6, 4);
        session.drop_piece(3);
        let before = session.clone();

        let err = session
            .reset(GameConfig {
                player_names: ["".into(), "Bo".into()],
                ..GameConfig::default()
            })
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidPlayerName {
                player: Player::One
            }
        ));
        assert_eq!(session, before);
    }

    #[test]
    fn test_restart_keeps_config() {
        let mut session = session(4, 4, 3);
        session.drop_piece(0);
        session.drop_piece(1);

        session.restart();
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.current_player(), Player::One);
        assert_eq!(session.board().turns_played(), 0);
        assert_eq!(session.board().columns(), 4);
        assert_eq!(session.config().run_to_win, 3);
    }
}
