//! Terminal input module.
//!
//! This module maps `crossterm` key events into [`crate::types::InputEvent`]
//! and provides two [`crate::types::InputSource`] implementations: the live
//! terminal and a scripted queue for headless runs and tests.
//!
//! Keys: arrows steer, Enter starts or restarts, `q`/`Q`/Ctrl-C quits.
//! Everything else is reported as an [`InputDecodeError`] and dropped.

pub mod map;
pub mod source;

pub use tui_snake_types as types;

pub use map::{decode_event, decode_key, should_quit, InputDecodeError};
pub use source::{CrosstermInput, QueuedInput};
