//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead composes a simple framebuffer
//! that is flushed to the terminal with per-run diffing.
//!
//! Goals:
//! - Keep the game loop ignorant of the terminal (it only sees [`types::Renderer`])
//! - Fit the default 40x40 grid into an 80x24 terminal (two grid rows per line)
//! - Send only changed glyphs each frame

pub mod canvas;
pub mod fb;
pub mod palette;
pub mod renderer;

pub use tui_snake_types as types;

pub use canvas::{TerminalCanvas, Viewport};
pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use palette::{known_color, random_color, KnownColor, Palette};
pub use renderer::{
    changed_runs, encode_diff_into, encode_enter_into, encode_full_into, Run, TerminalScreen,
    WINDOW_TITLE,
};
