//! Game engine: the controller loop and everything it needs from the outside.
//!
//! - [`controller`]: `Menu -> Playing -> GameOver` loop over a session
//! - [`config`]: window size, difficulty and high score path from the environment
//! - [`score_store`]: high score persistence (file or in-memory)
//! - [`pacer`]: tick pacing
//! - [`layout`]: menu, game over and score text placement
//! - [`error`]: configuration and storage errors
//!
//! Rendering and input come in through [`types::Renderer`] and
//! [`types::InputSource`], so the whole loop runs headless in tests.

pub mod config;
pub mod controller;
pub mod error;
pub mod layout;
pub mod pacer;
pub mod score_store;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use config::GameConfig;
pub use controller::{ControllerState, ExitReason, GameController, GameOverSummary};
pub use error::{ConfigError, StorageError};
pub use pacer::{Pacer, RecordingPacer, ThreadPacer};
pub use score_store::{FileScoreStore, MemoryScoreStore, ScoreStore};
