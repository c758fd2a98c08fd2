//! High score persistence.
//!
//! The store is a single non-negative integer. Nothing is cached between
//! sessions: every [`ScoreStore::commit`] re-reads storage so edits made
//! between runs are respected.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

pub trait ScoreStore {
    /// The stored high score, or 0 when nothing has been stored yet.
    fn read_high_score(&self) -> Result<u32, StorageError>;

    fn write_high_score(&mut self, value: u32) -> Result<(), StorageError>;

    /// Fold a finished session into the high score and return the result.
    ///
    /// Always writes, so repeating a commit with the same score is harmless.
    fn commit(&mut self, session_score: u32) -> Result<u32, StorageError> {
        let best = self.read_high_score()?.max(session_score);
        self.write_high_score(best)?;
        Ok(best)
    }
}

/// High score kept as decimal text in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    /// No file is touched until the first read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ScoreStore for FileScoreStore {
    fn read_high_score(&self) -> Result<u32, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(err) => return Err(self.io_error(err)),
        };

        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(0);
        }
        trimmed.parse().map_err(|_| StorageError::Corrupt {
            path: self.path.clone(),
            content: trimmed.to_string(),
        })
    }

    fn write_high_score(&mut self, value: u32) -> Result<(), StorageError> {
        fs::write(&self.path, value.to_string()).map_err(|err| self.io_error(err))
    }
}

/// In-memory store for headless runs and tests. Can be switched to fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryScoreStore {
    value: Option<u32>,
    failing: bool,
    writes: usize,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: u32) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    /// A store whose every operation fails.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn value(&self) -> Option<u32> {
        self.value
    }

    /// Successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.failing {
            let reason = "memory store set to fail".to_string();
            return Err(StorageError::Unavailable(reason));
        }
        Ok(())
    }
}

impl ScoreStore for MemoryScoreStore {
    fn read_high_score(&self) -> Result<u32, StorageError> {
        self.check()?;
        Ok(self.value.unwrap_or(0))
    }

    fn write_high_score(&mut self, value: u32) -> Result<(), StorageError> {
        self.check()?;
        self.value = Some(value);
        self.writes += 1;
        Ok(())
    }
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn read_high_score(&self) -> Result<u32, StorageError> {
        (**self).read_high_score()
    }

    fn write_high_score(&mut self, value: u32) -> Result<(), StorageError> {
        (**self).write_high_score(value)
    }

    fn commit(&mut self, session_score: u32) -> Result<u32, StorageError> {
        (**self).commit(session_score)
    }
}
