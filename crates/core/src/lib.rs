//! Core game logic module - pure and testable
//!
//! This module contains the rules of the game: grid geometry, the snake body,
//! food placement and the per-session state machine. It has **no dependencies**
//! on the terminal, input handling or file I/O, which keeps it:
//!
//! - **Testable**: every rule is reachable from plain unit tests
//! - **Portable**: the same session runs under the terminal front end or headless
//! - **Allocation-free while playing**: the snake reserves the whole grid up front
//!   and food placement walks the grid instead of collecting candidates
//!
//! # Module Structure
//!
//! - [`grid`]: window pixels to cells, bounds and the interior ring
//! - [`snake`]: ordered body with move/grow and self-collision detection
//! - [`food`]: uniform food placement on free interior cells
//! - [`session`]: `Ready -> Running -> Over` state machine, one cell per tick
//!
//! # Rules
//!
//! - The snake starts as one cell at the grid center, heading up
//! - Each tick moves the head one cell; a reversal request is ignored
//! - Leaving the grid or running into the body ends the session
//! - Food scores 100 and grows the snake by one cell on the next move
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{FoodSpawner, GameSession, GridGeometry, SessionPhase, TickOutcome};
//! use tui_snake_types::{Cell, Direction};
//!
//! let mut session = GameSession::new(GridGeometry::new(800, 800), FoodSpawner::seeded(1));
//! session.start();
//! session.set_direction(Direction::Left);
//!
//! assert!(matches!(session.tick(), TickOutcome::Moved(_)));
//! assert_eq!(session.snake().head(), Cell::new(19, 20));
//! assert_eq!(session.phase(), SessionPhase::Running);
//! ```

pub mod food;
pub mod grid;
pub mod session;
pub mod snake;

pub use tui_snake_types as types;

pub use food::{FoodSpawner, SpawnError};
pub use grid::GridGeometry;
pub use session::{BoardDelta, GameOverCause, GameSession, SessionPhase, TickOutcome};
pub use snake::{MoveOutcome, Snake};
