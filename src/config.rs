use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::Player;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub display: DisplayConfig,
}

/// Preset player labels. Seats left unset are asked for at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub player1: Option<String>,
    pub player2: Option<String>,
}

impl PlayersConfig {
    pub fn label(&self, player: Player) -> Option<&str> {
        match player {
            Player::Player1 => self.player1.as_deref(),
            Player::Player2 => self.player2.as_deref(),
        }
    }
}

/// How the console driver draws the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub player1_symbol: char,
    pub player2_symbol: char,
    pub empty_symbol: char,
    /// Clear the terminal before each redraw
    pub clear_screen: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            player1_symbol: 'X',
            player2_symbol: 'O',
            empty_symbol: '.',
            clear_screen: true,
        }
    }
}

impl DisplayConfig {
    pub fn symbol(&self, player: Player) -> char {
        match player {
            Player::Player1 => self.player1_symbol,
            Player::Player2 => self.player2_symbol,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let display = &self.display;
        let symbols = [
            ("display.player1_symbol", display.player1_symbol),
            ("display.player2_symbol", display.player2_symbol),
            ("display.empty_symbol", display.empty_symbol),
        ];

        for (name, symbol) in symbols {
            if symbol.is_whitespace() || symbol.is_control() {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a visible character"
                )));
            }
        }

        if display.player1_symbol == display.player2_symbol {
            return Err(ConfigError::Validation(
                "display.player1_symbol and display.player2_symbol must differ".into(),
            ));
        }
        if display.empty_symbol == display.player1_symbol
            || display.empty_symbol == display.player2_symbol
        {
            return Err(ConfigError::Validation(
                "display.empty_symbol must differ from the player symbols".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
