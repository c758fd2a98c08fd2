//! Error types for configuration and high-score storage.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Invalid startup configuration. Fatal: the game never starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a whole number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{name} must be at least {min} pixels, got {value}")]
    InvalidDimension {
        name: &'static str,
        value: u32,
        min: u32,
    },
    #[error("unknown difficulty {0:?} (expected easy, medium, hard or insane)")]
    UnknownDifficulty(String),
}

/// High-score storage failure. Recovered by the controller.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("high score file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("high score file {path} does not hold a number: {content:?}")]
    Corrupt { path: PathBuf, content: String },
    #[error("high score storage unavailable: {0}")]
    Unavailable(String),
}
