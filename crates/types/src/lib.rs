//! Core types module - shared data structures, constants and capability traits
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data (plus the two capability traits the game loop
//! talks to), so it can be used by the simulation, the terminal front end and
//! test doubles alike.
//!
//! # Grid
//!
//! The play area is a window measured in pixels that is divided into a fixed
//! number of cells per axis:
//!
//! - **Cell size**: `dimension / GRID_DIVISOR` (20px for the default 800px window)
//! - **Default window**: 800 x 800 pixels, i.e. a 40 x 40 cell grid
//! - **Coordinates**: `(x, y)` in cells, x grows right, y grows down
//!
//! # Tick Delays
//!
//! | Difficulty | Delay |
//! |------------|-------|
//! | Easy | 100ms |
//! | Medium | 75ms |
//! | Hard | 50ms |
//! | Insane | 25ms |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Cell, Difficulty, Direction};
//!
//! let head = Cell::new(20, 20);
//! assert_eq!(head.step(Direction::Up), Cell::new(20, 19));
//!
//! assert!(Direction::Up.is_opposite(Direction::Down));
//! assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
//! assert_eq!(Difficulty::Hard.tick_delay_ms(), 50);
//! ```

use std::time::Duration;

use arrayvec::ArrayVec;

/// Number of cells along each window axis; cell size is `dimension / GRID_DIVISOR`.
pub const GRID_DIVISOR: u32 = 40;

/// Points awarded per food consumed.
pub const FOOD_REWARD: u32 = 100;

/// Default window width in pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 800;

/// Default window height in pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 800;

/// Smallest accepted window dimension (one pixel per cell).
pub const MIN_WINDOW_DIMENSION: u32 = GRID_DIVISOR;

/// Upper bound on events returned by a single [`InputSource::poll`].
pub const MAX_EVENTS_PER_POLL: usize = 32;


/// A discrete grid coordinate (cells, not pixels).
///
/// Signed so that a head stepping off the grid is still representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Movement direction of the snake head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Cell offset for one step (y grows downward).
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game speed, fixed for the lifetime of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
    Insane,
}

impl Difficulty {
    /// Parse difficulty from string (case-insensitive, surrounding whitespace ignored)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("Medium"), Some(Difficulty::Medium));
    /// assert_eq!(Difficulty::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            "insane" => Some(Difficulty::Insane),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Insane => "insane",
        }
    }

    /// Delay between simulation ticks in milliseconds.
    pub fn tick_delay_ms(&self) -> u64 {
        match self {
            Difficulty::Easy => 100,
            Difficulty::Medium => 75,
            Difficulty::Hard => 50,
            Difficulty::Insane => 25,
        }
    }

    pub fn tick_delay(&self) -> Duration {
        Duration::from_millis(self.tick_delay_ms())
    }
}

/// Abstract input events produced by an [`InputSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Leave the game immediately.
    Quit,
    /// Start from the menu, or restart after game over.
    ConfirmStart,
    /// Steer the snake.
    Direction(Direction),
}

/// Events drained by one poll.
pub type InputBatch = ArrayVec<InputEvent, MAX_EVENTS_PER_POLL>;

/// What a drawn cell or text span represents; the renderer picks the actual color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Background,
    SnakeBody,
    Food,
    TitleText,
    BodyText,
    ScoreText,
    HighScoreText,
}

/// Text styles used by the screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Title,
    Body,
    Score,
}

/// Drawing capability consumed by the game loop.
///
/// All positions are grid cells. Implementations may buffer until [`Renderer::present`].
pub trait Renderer {
    /// Reset the whole play area to the background.
    fn clear(&mut self) -> anyhow::Result<()>;

    fn draw_cell(&mut self, cell: Cell, color: ColorRole) -> anyhow::Result<()>;

    fn draw_text(
        &mut self,
        content: &str,
        position: Cell,
        font: FontRole,
        color: ColorRole,
    ) -> anyhow::Result<()>;

    /// Make everything drawn since the last call visible.
    fn present(&mut self) -> anyhow::Result<()>;
}

/// Input capability consumed by the game loop.
pub trait InputSource {
    /// Non-blocking drain of pending events. Returns an empty batch when idle.
    fn poll(&mut self) -> anyhow::Result<InputBatch>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn clear(&mut self) -> anyhow::Result<()> {
        (**self).clear()
    }

    fn draw_cell(&mut self, cell: Cell, color: ColorRole) -> anyhow::Result<()> {
        (**self).draw_cell(cell, color)
    }

    fn draw_text(
        &mut self,
        content: &str,
        position: Cell,
        font: FontRole,
        color: ColorRole,
    ) -> anyhow::Result<()> {
        (**self).draw_text(content, position, font, color)
    }

    fn present(&mut self) -> anyhow::Result<()> {
        (**self).present()
    }
}

impl<I: InputSource + ?Sized> InputSource for &mut I {
    fn poll(&mut self) -> anyhow::Result<InputBatch> {
        (**self).poll()
    }
}
