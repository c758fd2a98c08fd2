//! GameController: the top-level loop.
//!
//! States: `Menu -> Playing -> GameOver -> Playing ...`, and any state goes to
//! `Terminated` on a quit event. Each [`GameController::step`] is one loop
//! iteration: drain input, wait one tick delay, advance the session if one is
//! running, render. The loop never exits the process itself; [`run`] returns an
//! [`ExitReason`] and the caller decides what to do with it.
//!
//! [`run`]: GameController::run

use std::ops::ControlFlow;

use anyhow::Result;
use tracing::{debug, info, warn};
use tui_snake_core::{
    BoardDelta, FoodSpawner, GameOverCause, GameSession, GridGeometry, TickOutcome,
};

use crate::layout::{self, TextLine};
use crate::pacer::Pacer;
use crate::score_store::ScoreStore;
use crate::types::{ColorRole, Difficulty, FontRole, InputBatch, InputEvent, InputSource, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Menu,
    Playing,
    GameOver,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The player asked to quit.
    Quit,
}

/// What the game-over screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverSummary {
    pub cause: GameOverCause,
    pub score: u32,
    /// Equals `score` when the store could not be used.
    pub high_score: u32,
    pub high_score_saved: bool,
}

pub struct GameController<R, I, S, P> {
    difficulty: Difficulty,
    geometry: GridGeometry,
    renderer: R,
    input: I,
    store: S,
    pacer: P,
    seed: Option<u64>,
    session: Option<GameSession>,
    state: ControllerState,
    last_result: Option<GameOverSummary>,
    sessions_started: u64,
}

impl<R, I, S, P> GameController<R, I, S, P>
where
    R: Renderer,
    I: InputSource,
    S: ScoreStore,
    P: Pacer,
{
    pub fn new(
        difficulty: Difficulty,
        geometry: GridGeometry,
        renderer: R,
        input: I,
        store: S,
        pacer: P,
    ) -> Self {
        Self {
            difficulty,
            geometry,
            renderer,
            input,
            store,
            pacer,
            seed: None,
            session: None,
            state: ControllerState::Menu,
            last_result: None,
            sessions_started: 0,
        }
    }

    /// Place food reproducibly: session `n` uses `seed + n`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Show the menu and loop until the player quits.
    pub fn run(&mut self) -> Result<ExitReason> {
        self.show_menu()?;
        loop {
            if let ControlFlow::Break(reason) = self.step()? {
                return Ok(reason);
            }
        }
    }

    /// Render the instructions and (re)enter the menu state.
    pub fn show_menu(&mut self) -> Result<()> {
        self.state = ControllerState::Menu;
        self.renderer.clear()?;
        self.draw_lines(&layout::menu_screen(&self.geometry))?;
        self.renderer.present()
    }

    /// One loop iteration.
    pub fn step(&mut self) -> Result<ControlFlow<ExitReason>> {
        if self.state == ControllerState::Terminated {
            return Ok(ControlFlow::Break(ExitReason::Quit));
        }

        let batch = self.input.poll()?;
        if let Some(reason) = self.handle_events(batch)? {
            return Ok(ControlFlow::Break(reason));
        }

        self.pacer.wait(self.difficulty.tick_delay());

        if self.state == ControllerState::Playing {
            self.advance()?;
        }
        Ok(ControlFlow::Continue(()))
    }

    fn handle_events(&mut self, batch: InputBatch) -> Result<Option<ExitReason>> {
        for event in batch {
            match event {
                InputEvent::Quit => {
                    info!(state = ?self.state, "quit requested");
                    self.state = ControllerState::Terminated;
                    return Ok(Some(ExitReason::Quit));
                }
                InputEvent::ConfirmStart => {
                    if matches!(
                        self.state,
                        ControllerState::Menu | ControllerState::GameOver
                    ) {
                        self.start_session()?;
                    }
                }
                InputEvent::Direction(dir) => {
                    if self.state == ControllerState::Playing {
                        if let Some(session) = self.session.as_mut() {
                            session.set_direction(dir);
                        }
                    }
                }
            }
        }
        Ok(None)
    }

    fn start_session(&mut self) -> Result<()> {
        let spawner = match self.seed {
            Some(seed) => FoodSpawner::seeded(seed.wrapping_add(self.sessions_started)),
            None => FoodSpawner::from_entropy(),
        };
        let mut session = GameSession::new(self.geometry, spawner);
        session.start();
        self.sessions_started += 1;
        info!(
            session = self.sessions_started,
            difficulty = self.difficulty.as_str(),
            "session started"
        );

        self.renderer.clear()?;
        for cell in session.snake().cells() {
            self.renderer.draw_cell(cell, ColorRole::SnakeBody)?;
        }
        if let Some(food) = session.food() {
            self.renderer.draw_cell(food, ColorRole::Food)?;
        }
        self.draw_score(session.score())?;
        self.renderer.present()?;

        self.session = Some(session);
        self.last_result = None;
        self.state = ControllerState::Playing;
        Ok(())
    }

    fn advance(&mut self) -> Result<()> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        let outcome = session.tick();
        let score = session.score();

        match outcome {
            TickOutcome::Idle => Ok(()),
            TickOutcome::Moved(delta) => {
                debug!(head = ?delta.head, ate = delta.ate, score, "tick");
                self.render_delta(delta, score)
            }
            TickOutcome::Over(cause) => self.finish_session(cause, score),
        }
    }

    fn render_delta(&mut self, delta: BoardDelta, score: u32) -> Result<()> {
        // Erase first: the head may move into the cell the tail just left.
        if let Some(vacated) = delta.vacated {
            self.renderer.draw_cell(vacated, ColorRole::Background)?;
        }
        self.renderer.draw_cell(delta.head, ColorRole::SnakeBody)?;
        if let Some(food) = delta.spawned_food {
            self.renderer.draw_cell(food, ColorRole::Food)?;
        }
        self.draw_score(score)?;
        self.renderer.present()
    }

    fn finish_session(&mut self, cause: GameOverCause, score: u32) -> Result<()> {
        let (high_score, high_score_saved) = match self.store.commit(score) {
            Ok(best) => (best, true),
            Err(err) => {
                warn!(%err, score, "could not update high score");
                (score, false)
            }
        };
        info!(?cause, score, high_score, "game over");

        self.last_result = Some(GameOverSummary {
            cause,
            score,
            high_score,
            high_score_saved,
        });
        self.state = ControllerState::GameOver;

        self.renderer.clear()?;
        self.draw_lines(&layout::game_over_screen(&self.geometry, score, high_score))?;
        self.renderer.present()
    }

    fn draw_score(&mut self, score: u32) -> Result<()> {
        self.renderer.draw_text(
            &score.to_string(),
            layout::score_position(&self.geometry),
            FontRole::Score,
            ColorRole::ScoreText,
        )
    }

    fn draw_lines(&mut self, lines: &[TextLine]) -> Result<()> {
        for line in lines {
            self.renderer
                .draw_text(&line.text, line.position, line.font, line.color)?;
        }
        Ok(())
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The current (or most recent) session.
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn last_result(&self) -> Option<GameOverSummary> {
        self.last_result
    }

    pub fn sessions_started(&self) -> u64 {
        self.sessions_started
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tui_snake_input::QueuedInput;

    use super::*;
    use crate::pacer::RecordingPacer;
    use crate::score_store::MemoryScoreStore;
    use crate::types::{Cell, Direction};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Draw {
        Clear,
        Cell(Cell, ColorRole),
        Text(String, Cell),
        Present,
    }

    #[derive(Debug, Default)]
    struct Recorder {
        draws: Vec<Draw>,
    }

    impl Recorder {
        fn texts(&self) -> Vec<&str> {
            self.draws
                .iter()
                .filter_map(|d| match d {
                    Draw::Text(t, _) => Some(t.as_str()),
                    _ => None,
                })
                .collect()
        }

        fn position(&self, draw: &Draw) -> Option<usize> {
            self.draws.iter().position(|d| d == draw)
        }
    }

    impl Renderer for Recorder {
        fn clear(&mut self) -> Result<()> {
            self.draws.push(Draw::Clear);
            Ok(())
        }

        fn draw_cell(&mut self, cell: Cell, color: ColorRole) -> Result<()> {
            self.draws.push(Draw::Cell(cell, color));
            Ok(())
        }

        fn draw_text(
            &mut self,
            text: &str,
            at: Cell,
            _font: FontRole,
            _color: ColorRole,
        ) -> Result<()> {
            self.draws.push(Draw::Text(text.to_string(), at));
            Ok(())
        }

        fn present(&mut self) -> Result<()> {
            self.draws.push(Draw::Present);
            Ok(())
        }
    }

    type TestController =
        GameController<Recorder, QueuedInput, MemoryScoreStore, RecordingPacer>;

    fn controller(input: QueuedInput, store: MemoryScoreStore) -> TestController {
        GameController::new(
            Difficulty::Hard,
            GridGeometry::new(800, 800),
            Recorder::default(),
            input,
            store,
            RecordingPacer::new(),
        )
        .with_seed(7)
    }

    fn snake_at(x: i32, y: i32) -> Draw {
        Draw::Cell(Cell::new(x, y), ColorRole::SnakeBody)
    }

    fn play_until_over(ctl: &mut TestController) {
        for _ in 0..100 {
            assert!(ctl.step().unwrap().is_continue());
            if ctl.state() == ControllerState::GameOver {
                return;
            }
        }
        panic!("session never ended");
    }

    fn started(store: MemoryScoreStore) -> TestController {
        let mut input = QueuedInput::new();
        input.push_batch([InputEvent::ConfirmStart]);
        let mut ctl = controller(input, store);
        ctl.show_menu().unwrap();
        ctl.step().unwrap();
        ctl
    }

    #[test]
    fn quit_from_menu_ends_run() {
        let mut input = QueuedInput::new();
        input.push_batch([InputEvent::Quit]);
        let mut ctl = controller(input, MemoryScoreStore::new());

        assert_eq!(ctl.run().unwrap(), ExitReason::Quit);
        assert_eq!(ctl.state(), ControllerState::Terminated);
        assert!(ctl.renderer().texts().contains(&"HOW TO PLAY:"));
        assert!(ctl.session().is_none());
        assert!(ctl.pacer().waits().is_empty());
        assert!(ctl.step().unwrap().is_break());
    }

    #[test]
    fn idle_menu_waits_one_tick() {
        let mut ctl = controller(QueuedInput::new(), MemoryScoreStore::new());
        assert!(ctl.step().unwrap().is_continue());
        assert_eq!(ctl.state(), ControllerState::Menu);
        assert_eq!(ctl.difficulty(), Difficulty::Hard);
        assert_eq!(ctl.pacer().waits(), &[Difficulty::Hard.tick_delay()]);
        assert_eq!(ctl.pacer().total(), Duration::from_millis(50));
    }

    #[test]
    fn directions_in_menu_are_ignored() {
        let mut input = QueuedInput::new();
        input.push_batch([InputEvent::Direction(Direction::Left)]);
        let mut ctl = controller(input, MemoryScoreStore::new());
        ctl.step().unwrap();
        assert_eq!(ctl.state(), ControllerState::Menu);
        assert!(ctl.session().is_none());
    }

    #[test]
    fn start_draws_board_then_ticks() {
        let ctl = started(MemoryScoreStore::new());
        assert_eq!(ctl.state(), ControllerState::Playing);
        assert_eq!(ctl.sessions_started(), 1);

        let session = ctl.session().unwrap();
        assert_eq!(session.ticks(), 1);
        assert_eq!(session.snake().head(), Cell::new(20, 19));

        let rec = ctl.renderer();
        let center = rec.position(&snake_at(20, 20)).unwrap();
        let head = rec.position(&snake_at(20, 19)).unwrap();
        assert!(center < head);
        let zero = Draw::Text("0".to_string(), Cell::new(1, 36));
        assert!(rec.draws.contains(&zero));
        if session.score() == 0 {
            let erased = rec.position(&Draw::Cell(Cell::new(20, 20), ColorRole::Background));
            assert!(erased.unwrap() < head);
        }
    }

    #[test]
    fn eating_redraws_food_and_score() {
        // Seed 147 puts the first food at (20,18), two cells above the center.
        let mut input = QueuedInput::new();
        input.push_batch([InputEvent::ConfirmStart]);
        let mut ctl = controller(input, MemoryScoreStore::new()).with_seed(147);
        ctl.show_menu().unwrap();
        ctl.step().unwrap();
        assert_eq!(ctl.session().unwrap().food(), Some(Cell::new(20, 18)));

        ctl.step().unwrap();
        let session = ctl.session().unwrap();
        assert_eq!(session.score(), 100);
        assert_eq!(session.snake().len(), 2);
        let food = session.food().unwrap();
        assert_ne!(food, Cell::new(20, 18));

        let rec = ctl.renderer();
        let eaten = rec.position(&snake_at(20, 18)).unwrap();
        let redrawn = rec.position(&Draw::Cell(food, ColorRole::Food)).unwrap();
        let score = rec.position(&Draw::Text("100".to_string(), Cell::new(1, 36)));
        assert!(eaten < redrawn);
        assert!(redrawn < score.unwrap());
        // The snake grew, so nothing was erased on the eating tick.
        assert!(!rec.draws[..eaten]
            .iter()
            .rev()
            .take_while(|d| **d != Draw::Present)
            .any(|d| matches!(d, Draw::Cell(_, ColorRole::Background))));

        play_until_over(&mut ctl);
        let summary = ctl.last_result().unwrap();
        assert_eq!(summary.score, 100);
        assert_eq!(summary.high_score, 100);
        assert_eq!(ctl.store().value(), Some(100));
    }

    #[test]
    fn direction_applies_on_next_tick() {
        let mut ctl = started(MemoryScoreStore::new());
        ctl.input_mut().push_batch([
            InputEvent::Direction(Direction::Down),
            InputEvent::Direction(Direction::Left),
        ]);
        ctl.step().unwrap();
        let session = ctl.session().unwrap();
        assert_eq!(session.direction(), Direction::Left);
        assert_eq!(session.snake().head(), Cell::new(19, 19));
    }

    #[test]
    fn wall_ends_session_and_commits_once() {
        let mut ctl = started(MemoryScoreStore::with_value(50));
        play_until_over(&mut ctl);

        let session = ctl.session().unwrap();
        // Heading straight up from row 20: the 21st move leaves the grid.
        assert_eq!(session.ticks(), 21);
        let summary = ctl.last_result().unwrap();
        assert_eq!(summary.cause, GameOverCause::Wall);
        assert_eq!(summary.score, session.score());
        assert_eq!(summary.high_score, session.score().max(50));
        assert!(summary.high_score_saved);
        assert_eq!(ctl.store().writes(), 1);

        let texts = ctl.renderer().texts();
        assert!(texts.contains(&"GAME OVER!"));
        let high = format!("High Score: {}", summary.high_score);
        assert!(texts.contains(&high.as_str()));

        for _ in 0..5 {
            ctl.step().unwrap();
        }
        assert_eq!(ctl.store().writes(), 1);
        assert_eq!(ctl.state(), ControllerState::GameOver);
    }

    #[test]
    fn failing_store_shows_session_score() {
        let mut ctl = started(MemoryScoreStore::failing());
        play_until_over(&mut ctl);

        let summary = ctl.last_result().unwrap();
        assert!(!summary.high_score_saved);
        assert_eq!(summary.high_score, summary.score);
        assert_eq!(ctl.state(), ControllerState::GameOver);
    }

    #[test]
    fn confirm_restarts_after_game_over() {
        let mut ctl = started(MemoryScoreStore::new());
        play_until_over(&mut ctl);

        ctl.input_mut().push_batch([InputEvent::ConfirmStart]);
        ctl.step().unwrap();
        assert_eq!(ctl.state(), ControllerState::Playing);
        assert_eq!(ctl.sessions_started(), 2);
        assert!(ctl.last_result().is_none());
        assert_eq!(ctl.session().unwrap().ticks(), 1);
    }

    #[test]
    fn quit_while_playing_skips_commit() {
        let mut ctl = started(MemoryScoreStore::new());
        ctl.input_mut().push_batch([InputEvent::Quit]);
        assert!(ctl.step().unwrap().is_break());
        assert_eq!(ctl.state(), ControllerState::Terminated);
        assert_eq!(ctl.store().writes(), 0);
    }
}
