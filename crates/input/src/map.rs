//! Key mapping from terminal events to game input events.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use thiserror::Error;

use crate::types::{Direction, InputEvent};

/// A terminal event with no meaning for the game. Callers drop these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputDecodeError {
    #[error("unmapped key {0:?}")]
    Unmapped(KeyCode),
    #[error("key release or repeat")]
    NotAPress,
    #[error("not a key event")]
    NotAKey,
}

/// Map a key press to a game input event.
pub fn decode_key(key: KeyEvent) -> Result<InputEvent, InputDecodeError> {
    if key.kind != KeyEventKind::Press {
        return Err(InputDecodeError::NotAPress);
    }
    if should_quit(key) {
        return Ok(InputEvent::Quit);
    }

    match key.code {
        KeyCode::Up => Ok(InputEvent::Direction(Direction::Up)),
        KeyCode::Down => Ok(InputEvent::Direction(Direction::Down)),
        KeyCode::Left => Ok(InputEvent::Direction(Direction::Left)),
        KeyCode::Right => Ok(InputEvent::Direction(Direction::Right)),
        KeyCode::Enter => Ok(InputEvent::ConfirmStart),
        other => Err(InputDecodeError::Unmapped(other)),
    }
}

/// Map any terminal event; only key presses carry game input.
pub fn decode_event(event: &Event) -> Result<InputEvent, InputDecodeError> {
    match event {
        Event::Key(key) => decode_key(*key),
        _ => Err(InputDecodeError::NotAKey),
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
