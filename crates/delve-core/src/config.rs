//! Game configuration
//!
//! A JSON document holding the optional RNG seed and the starting player
//! profile. Every field has a default, so `{}` is a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Invalid value {value} for '{field}'")]
    InvalidValue { field: &'static str, value: i64 },
}

/// Stats a new player starts with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerStart {
    pub hp: i32,
    pub mana: i32,
    pub intelligence: i32,
    pub food: u32,
    pub potions: u32,
    pub xp_to_next_level: i32,
    pub visibility_radius: i32,
}

impl Default for PlayerStart {
    fn default() -> Self {
        Self {
            hp: 20,
            mana: 10,
            intelligence: 5,
            food: 10,
            potions: 0,
            xp_to_next_level: 150,
            visibility_radius: 8,
        }
    }
}

/// Core game configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Fixed seed; `None` seeds from entropy
    pub seed: Option<u64>,
    pub player: PlayerStart,
}

impl GameConfig {
    /// Load a config from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse a config from a JSON string
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject starting stats the game cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.player;
        let positive = [
            ("player.hp", p.hp),
            ("player.intelligence", p.intelligence),
            ("player.xp_to_next_level", p.xp_to_next_level),
        ];
        for (field, value) in positive {
            if value <= 0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    value: value.into(),
                });
            }
        }
        let non_negative = [
            ("player.mana", p.mana),
            ("player.visibility_radius", p.visibility_radius),
        ];
        for (field, value) in non_negative {
            if value < 0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    value: value.into(),
                });
            }
        }
        Ok(())
    }
}
