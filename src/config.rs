use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{check_dimensions, Player};

/// Game settings, loadable from TOML. Fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub columns: usize,
    pub rows: usize,
    /// Consecutive same-owner pieces needed to win
    pub run_to_win: usize,
    /// Display names for player one and player two
    pub player_names: [String; 2],
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            columns: 7,
            rows: 6,
            run_to_win: 4,
            player_names: ["Player 1".to_string(), "Player 2".to_string()],
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values. Fields are checked in order and the
    /// first failure is reported.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for player in [Player::One, Player::Two] {
            if self.player_names[player.index()].trim().is_empty() {
                return Err(ConfigError::InvalidPlayerName { player });
            }
        }
        check_dimensions(self.columns, self.rows)?;
        if self.run_to_win < 1 {
            return Err(ConfigError::InvalidRunToWin(self.run_to_win));
        }
        Ok(())
    }

    /// Whether a run of `run_to_win` fits on the board at all
    pub fn is_winnable(&self) -> bool {
        self.run_to_win <= self.columns.max(self.rows)
    }

    /// Copy of this configuration with surrounding whitespace stripped from
    /// the player names.
    pub fn normalized(&self) -> Self {
        GameConfig {
            player_names: self.player_names.clone().map(|name| name.trim().to_string()),
            ..self.clone()
        }
    }

    /// Display name for `player`
    pub fn player_name(&self, player: Player) -> &str {
        &self.player_names[player.index()]
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}
