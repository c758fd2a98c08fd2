//! Integration tests for session rules

use tui_snake::core::{
    BoardDelta, FoodSpawner, GameOverCause, GameSession, GridGeometry, SessionPhase, Snake,
    TickOutcome,
};
use tui_snake::types::{Cell, Difficulty, Direction, FOOD_REWARD};

fn grid() -> GridGeometry {
    GridGeometry::new(800, 800)
}

fn running(cells: &[(i32, i32)], direction: Direction, food: Option<Cell>) -> GameSession {
    let snake = Snake::from_cells(cells.iter().map(|&(x, y)| Cell::new(x, y))).unwrap();
    GameSession::from_parts(grid(), FoodSpawner::seeded(3), snake, direction, food)
}

#[test]
fn test_first_tick_from_center() {
    let g = grid();
    assert_eq!(g.cell_size(), (20, 20));
    assert_eq!(g.to_pixels(g.center()), (400, 400));
    assert_eq!(Difficulty::Hard.tick_delay_ms(), 50);

    let mut session = GameSession::from_parts(
        g,
        FoodSpawner::seeded(1),
        Snake::new(g.center()),
        Direction::Up,
        Some(Cell::new(5, 5)),
    );
    assert!(matches!(session.tick(), TickOutcome::Moved(_)));

    assert_eq!(g.to_pixels(session.snake().head()), (400, 380));
    assert_eq!(session.snake().len(), 1);
    assert_eq!(session.phase(), SessionPhase::Running);
}

#[test]
fn test_new_session_lifecycle() {
    let mut session = GameSession::new(grid(), FoodSpawner::seeded(9));
    assert_eq!(session.phase(), SessionPhase::Ready);
    assert!(session.food().is_none());
    assert_eq!(session.tick(), TickOutcome::Idle);

    session.start();
    assert_eq!(session.phase(), SessionPhase::Running);
    assert_eq!(session.direction(), Direction::Up);
    let food = session.food().unwrap();
    assert!(grid().is_interior(food));
    assert_ne!(food, grid().center());
}

#[test]
fn test_wall_on_every_edge() {
    let cases = [
        ((0, 10), Direction::Left),
        ((39, 10), Direction::Right),
        ((10, 0), Direction::Up),
        ((10, 39), Direction::Down),
    ];
    for ((x, y), dir) in cases {
        let mut session = running(&[(x, y)], dir, Some(Cell::new(20, 20)));
        assert_eq!(session.tick(), TickOutcome::Over(GameOverCause::Wall));
        assert_eq!(session.score(), 0);
        assert_eq!(session.snake().head(), Cell::new(x, y));
        assert_eq!(session.over_cause(), Some(GameOverCause::Wall));
        // Over is terminal.
        assert_eq!(session.tick(), TickOutcome::Idle);
    }
}

#[test]
fn test_reversal_is_rejected() {
    let mut session = running(&[(10, 10), (10, 11), (10, 12)], Direction::Up, None);
    session.set_direction(Direction::Down);
    assert_eq!(session.pending_direction(), None);

    session.tick();
    assert_eq!(session.direction(), Direction::Up);
    assert_eq!(session.snake().head(), Cell::new(10, 9));
}

#[test]
fn test_latest_turn_before_tick_wins() {
    let mut session = running(&[(10, 10)], Direction::Up, None);
    session.set_direction(Direction::Left);
    session.set_direction(Direction::Right);
    session.tick();
    assert_eq!(session.direction(), Direction::Right);
    assert_eq!(session.snake().head(), Cell::new(11, 10));
}

#[test]
fn test_eating_scores_and_grows() {
    let mut session = running(&[(10, 10)], Direction::Right, Some(Cell::new(11, 10)));

    let TickOutcome::Moved(delta) = session.tick() else {
        panic!("expected a move");
    };
    assert!(delta.ate);
    assert_eq!(delta.vacated, None);
    assert_eq!(session.score(), FOOD_REWARD);
    assert_eq!(session.snake().len(), 2);

    let food = delta.spawned_food.unwrap();
    assert_eq!(session.food(), Some(food));
    assert!(grid().is_interior(food));
    assert!(!session.snake().occupies(food));

    // Growth applies once.
    let TickOutcome::Moved(next) = session.tick() else {
        panic!("expected a move");
    };
    assert_eq!(next.vacated, Some(Cell::new(10, 10)));
    assert_eq!(session.snake().len(), 2);
}

#[test]
fn test_self_collision_leaves_body_in_place() {
    // Head at (5,5) turning down into the body.
    let cells = [(5, 5), (6, 5), (6, 6), (5, 6), (4, 6)];
    let mut session = running(&cells, Direction::Down, None);
    let before: Vec<Cell> = session.snake().cells().collect();

    let outcome = session.tick();
    assert_eq!(outcome, TickOutcome::Over(GameOverCause::SelfCollision));
    assert_eq!(session.snake().cells().collect::<Vec<_>>(), before);
    assert!(session.is_over());
}

#[test]
fn test_head_may_follow_the_tail() {
    let cells = [(5, 5), (6, 5), (6, 6), (5, 6)];
    let mut session = running(&cells, Direction::Down, None);

    assert_eq!(
        session.tick(),
        TickOutcome::Moved(BoardDelta {
            head: Cell::new(5, 6),
            vacated: Some(Cell::new(5, 6)),
            spawned_food: None,
            ate: false,
        })
    );
    assert_eq!(session.snake().len(), 4);
    assert_eq!(session.phase(), SessionPhase::Running);
}

#[test]
fn test_growing_snake_cannot_enter_its_tail() {
    let mut snake = Snake::from_cells([
        Cell::new(5, 5),
        Cell::new(6, 5),
        Cell::new(6, 6),
        Cell::new(5, 6),
    ])
    .unwrap();
    snake.grow_on_next_move();
    assert_eq!(
        snake.advance(Cell::new(5, 6)),
        tui_snake::core::MoveOutcome::SelfCollision
    );
    assert_eq!(snake.len(), 4);
}

#[test]
fn test_full_board_keeps_playing_without_food() {
    // 5x5 grid: the 3x3 interior is covered by the snake except (1,1), where the food is.
    let g = GridGeometry::new(5, 5);
    let cells = [
        (2, 1),
        (3, 1),
        (3, 2),
        (2, 2),
        (1, 2),
        (1, 3),
        (2, 3),
        (3, 3),
    ];
    let snake = Snake::from_cells(cells.iter().map(|&(x, y)| Cell::new(x, y))).unwrap();
    let mut session = GameSession::from_parts(
        g,
        FoodSpawner::seeded(5),
        snake,
        Direction::Left,
        Some(Cell::new(1, 1)),
    );

    let TickOutcome::Moved(delta) = session.tick() else {
        panic!("expected a move");
    };
    assert!(delta.ate);
    assert_eq!(delta.spawned_food, None);
    assert_eq!(session.food(), None);
    assert_eq!(session.score(), FOOD_REWARD);
    assert_eq!(session.snake().len(), 9);
    assert_eq!(session.phase(), SessionPhase::Running);
}
