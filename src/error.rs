use std::path::PathBuf;

use crate::game::Player;

/// Errors that can occur when loading or validating a game configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid {player} name")]
    InvalidPlayerName { player: Player },

    #[error("Invalid Column Size: {0}")]
    InvalidColumns(usize),

    #[error("Invalid Row Size: {0}")]
    InvalidRows(usize),

    #[error("Invalid Run To Win: {0} (must be >= 1)")]
    InvalidRunToWin(usize),
}

impl ConfigError {
    /// Name of the configuration field that failed validation, if the error
    /// is a validation failure.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ConfigError::InvalidPlayerName { player: Player::One } => Some("player_names[0]"),
            ConfigError::InvalidPlayerName { player: Player::Two } => Some("player_names[1]"),
            ConfigError::InvalidColumns(_) => Some("columns"),
            ConfigError::InvalidRows(_) => Some("rows"),
            ConfigError::InvalidRunToWin(_) => Some("run_to_win"),
            ConfigError::FileRead { .. } | ConfigError::TomlParse(_) => None,
        }
    }
}

/// Reasons a move is rejected. A rejected move never changes game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("column {column} is out of range (board has {columns} columns)")]
    InvalidColumn { column: usize, columns: usize },

    #[error("game has already ended")]
    GameAlreadyEnded,
}
