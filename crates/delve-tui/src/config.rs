//! Front-end configuration
//!
//! One JSON file holds the display settings and, under `game`, the core
//! [`GameConfig`]. A missing file means defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use delve_core::{ConfigError, GameConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theme::ThemeChoice;

/// Config loading error
#[derive(Debug, Error)]
pub enum TuiConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid game settings: {0}")]
    Game(#[from] ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TuiConfig {
    pub theme: ThemeChoice,
    /// Pause between magic missile animation frames
    pub missile_frame_ms: u64,
    /// How long the level-up banner stays up
    pub levelup_banner_ms: u64,
    pub game: GameConfig,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Auto,
            missile_frame_ms: 50,
            levelup_banner_ms: 2000,
            game: GameConfig::default(),
        }
    }
}

impl TuiConfig {
    /// Load a config from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, TuiConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TuiConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parse a config from a JSON string
    pub fn parse(contents: &str) -> Result<Self, TuiConfigError> {
        let config: Self = serde_json::from_str(contents)?;
        config.game.validate()?;
        Ok(config)
    }

    /// Load `path`, or the default location when `None`.
    /// A file that does not exist yields the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, TuiConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_file(&path)
    }

    pub fn missile_frame(&self) -> Duration {
        Duration::from_millis(self.missile_frame_ms)
    }

    pub fn levelup_banner(&self) -> Duration {
        Duration::from_millis(self.levelup_banner_ms)
    }
}

/// `<config dir>/delve/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("delve").join("config.json"))
}

/// `<data dir>/delve/delve.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("delve").join("delve.log"))
}
