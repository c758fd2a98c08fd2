//! Process-level configuration.
//!
//! Read from environment variables:
//!
//! - `SNAKE_WIDTH`: window width in pixels (default 800)
//! - `SNAKE_HEIGHT`: window height in pixels (default 800)
//! - `SNAKE_DIFFICULTY`: easy | medium | hard | insane (default hard)
//! - `SNAKE_HIGH_SCORE_PATH`: high score file (default `high_score.txt`)
//!
//! Unset or empty variables fall back to the defaults. Present but invalid
//! values are errors.

use std::path::PathBuf;

use tui_snake_core::GridGeometry;

use crate::error::ConfigError;
use crate::types::{Difficulty, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_DIMENSION};

pub const ENV_WIDTH: &str = "SNAKE_WIDTH";
pub const ENV_HEIGHT: &str = "SNAKE_HEIGHT";
pub const ENV_DIFFICULTY: &str = "SNAKE_DIFFICULTY";
pub const ENV_HIGH_SCORE_PATH: &str = "SNAKE_HIGH_SCORE_PATH";

pub const DEFAULT_HIGH_SCORE_PATH: &str = "high_score.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    pub difficulty: Difficulty,
    pub high_score_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            difficulty: Difficulty::default(),
            high_score_path: PathBuf::from(DEFAULT_HIGH_SCORE_PATH),
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment, or a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();
        if let Some(v) = get(ENV_WIDTH) {
            config.width = parse_dimension("width", &v)?;
        }
        if let Some(v) = get(ENV_HEIGHT) {
            config.height = parse_dimension("height", &v)?;
        }
        if let Some(v) = get(ENV_DIFFICULTY) {
            config.difficulty =
                Difficulty::from_str(&v).ok_or(ConfigError::UnknownDifficulty(v))?;
        }
        if let Some(v) = get(ENV_HIGH_SCORE_PATH) {
            config.high_score_path = PathBuf::from(v);
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the window is large enough for one pixel per cell.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value < MIN_WINDOW_DIMENSION {
                return Err(ConfigError::InvalidDimension {
                    name,
                    value,
                    min: MIN_WINDOW_DIMENSION,
                });
            }
        }
        Ok(())
    }

    pub fn geometry(&self) -> GridGeometry {
        GridGeometry::new(self.width, self.height)
    }
}

fn parse_dimension(name: &'static str, value: &str) -> Result<u32, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        name,
        value: value.to_string(),
    })
}
