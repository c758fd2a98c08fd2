//! Game session - one play-through from start to game over
//!
//! The session owns the snake, the current and latched direction, the food and
//! the score. It advances exactly one cell per [`GameSession::tick`] and reports
//! what changed so a renderer can redraw incrementally.
//!
//! Phases: `Ready -> Running -> Over`. `Over` is terminal; a new play-through
//! uses a new session.

use rand::rngs::StdRng;
use rand::Rng;

use crate::food::FoodSpawner;
use crate::grid::GridGeometry;
use crate::snake::{MoveOutcome, Snake};
use crate::types::{Cell, Direction, FOOD_REWARD};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Ready,
    Running,
    Over,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    /// The head left the grid.
    Wall,
    /// The head ran into the body.
    SelfCollision,
}

/// Cells that changed during one successful tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardDelta {
    pub head: Cell,
    /// Tail cell released by this move (None when the snake grew).
    pub vacated: Option<Cell>,
    /// Food placed during this tick.
    pub spawned_food: Option<Cell>,
    pub ate: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The session is not running; nothing happened.
    Idle,
    Moved(BoardDelta),
    Over(GameOverCause),
}

#[derive(Debug, Clone)]
pub struct GameSession<R = StdRng> {
    geometry: GridGeometry,
    spawner: FoodSpawner<R>,
    snake: Snake,
    direction: Direction,
    /// Direction to apply at the next tick boundary.
    pending: Option<Direction>,
    food: Option<Cell>,
    score: u32,
    phase: SessionPhase,
    over_cause: Option<GameOverCause>,
    ticks: u64,
}

impl<R: Rng> GameSession<R> {
    /// A `Ready` session: single-cell snake at the grid center, no food, score 0.
    pub fn new(geometry: GridGeometry, spawner: FoodSpawner<R>) -> Self {
        Self {
            snake: Snake::with_capacity(geometry.center(), geometry.cell_count()),
            geometry,
            spawner,
            direction: Direction::Up,
            pending: None,
            food: None,
            score: 0,
            phase: SessionPhase::Ready,
            over_cause: None,
            ticks: 0,
        }
    }

    /// A `Running` session with an explicit board layout.
    ///
    /// Useful for driving specific scenarios (edge of the grid, coiled snake).
    pub fn from_parts(
        geometry: GridGeometry,
        spawner: FoodSpawner<R>,
        mut snake: Snake,
        direction: Direction,
        food: Option<Cell>,
    ) -> Self {
        snake.reserve(geometry.cell_count().saturating_sub(snake.len()));
        Self {
            geometry,
            spawner,
            snake,
            direction,
            pending: None,
            food,
            score: 0,
            phase: SessionPhase::Running,
            over_cause: None,
            ticks: 0,
        }
    }

    /// `Ready -> Running`: place the first food and head up.
    pub fn start(&mut self) {
        if self.phase != SessionPhase::Ready {
            return;
        }
        self.phase = SessionPhase::Running;
        self.direction = Direction::Up;
        self.pending = None;
        self.food = self.spawner.spawn(&self.snake, &self.geometry, None).ok();
    }

    /// Latch a direction change for the next tick.
    ///
    /// Ignored unless running, and ignored when `dir` reverses the current
    /// direction. A later valid call before the tick replaces an earlier one.
    pub fn set_direction(&mut self, dir: Direction) {
        if self.phase != SessionPhase::Running || self.direction.is_opposite(dir) {
            return;
        }
        self.pending = Some(dir);
    }

    /// Advance the simulation by one cell.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != SessionPhase::Running {
            return TickOutcome::Idle;
        }
        self.ticks += 1;

        if let Some(dir) = self.pending.take() {
            self.direction = dir;
        }

        let new_head = self.snake.head().step(self.direction);
        if !self.geometry.contains(new_head) {
            return self.finish(GameOverCause::Wall);
        }

        let ate = self.food == Some(new_head);
        let mut spawned_food = None;
        if ate {
            self.snake.grow_on_next_move();
            self.score += FOOD_REWARD;
            self.food = None;
            // The head is not part of the body yet; keep food off it anyway.
            spawned_food = self
                .spawner
                .spawn(&self.snake, &self.geometry, Some(new_head))
                .ok();
            self.food = spawned_food;
        }

        match self.snake.advance(new_head) {
            MoveOutcome::Continued { vacated } => TickOutcome::Moved(BoardDelta {
                head: new_head,
                vacated,
                spawned_food,
                ate,
            }),
            MoveOutcome::SelfCollision => self.finish(GameOverCause::SelfCollision),
        }
    }

    fn finish(&mut self, cause: GameOverCause) -> TickOutcome {
        self.phase = SessionPhase::Over;
        self.over_cause = Some(cause);
        TickOutcome::Over(cause)
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == SessionPhase::Over
    }

    pub fn over_cause(&self) -> Option<GameOverCause> {
        self.over_cause
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Direction applied at the last tick.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction latched for the next tick, if any.
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Ticks processed while running.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
