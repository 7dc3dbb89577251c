use std::collections::{HashSet, VecDeque};
use std::time::{Duration, Instant};

use anyhow::Result;
use gridsnake::{
    Board, CollisionKind, Direction, GameLoop, GameState, InputEvent, InputSource, MoveOutcome, Point, Renderer,
    Session, Snake, Status, TickFlow,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

struct Scripted(VecDeque<InputEvent>);

impl InputSource for Scripted {
    fn poll_event(&mut self) -> Result<Option<InputEvent>> {
        Ok(self.0.pop_front())
    }
}

struct NoDraw;

impl Renderer for NoDraw {
    fn render_frame(&mut self, _board: &Board, _snake: &Snake, _state: &GameState) -> Result<()> {
        Ok(())
    }
}

fn body(session: &Session) -> Vec<Point> {
    session.snake().body().iter().copied().collect()
}

fn heading_east(board: &Board, head: Point) -> Snake {
    let segments: Vec<Point> = (0..5).map(|i| Point::new(head.x - i, head.y)).collect();
    Snake::from_segments(board, &segments, Direction::East)
}

fn assert_invariants(session: &Session) {
    let cells = body(session);
    let unique: HashSet<Point> = cells.iter().copied().collect();

    assert_eq!(unique.len(), cells.len(), "snake overlaps itself");
    assert!(cells.iter().all(|p| session.board().contains(*p)));
    assert!(cells.windows(2).all(|w| w[0].manhattan(w[1]) == 1));
    assert!(!unique.contains(&session.state().food()), "food under the snake");
    assert!((1..=10).contains(&session.state().level()));
}

#[test]
fn fresh_session_starts_centered() {
    let session = Session::new(Board::default(), 1, StdRng::seed_from_u64(42)).unwrap();

    assert_eq!(session.snake().head(), Point::new(15, 9));
    assert_eq!(session.snake().len(), 5);
    assert_eq!(session.snake().tail(), Point::new(19, 9));
    assert_eq!(session.state().status(), Status::Playing);
    assert_invariants(&session);
}

#[test]
fn eating_grows_scores_and_respawns_food() {
    let board = Board::default();
    let state = GameState::new(Point::new(11, 9), 4);
    let mut session = Session::from_parts(board, heading_east(&board, Point::new(10, 9)), state, StdRng::seed_from_u64(3));

    assert_eq!(session.advance().unwrap(), Some(MoveOutcome::AteFood));
    assert_eq!(session.snake().head(), Point::new(11, 9));
    assert_eq!(session.snake().len(), 6);
    assert_eq!(session.state().score(), 4);
    assert_invariants(&session);
}

#[test]
fn running_into_the_right_wall_ends_the_game() {
    let board = Board::default();
    let state = GameState::new(Point::new(0, 0), 1);
    let mut session = Session::from_parts(board, heading_east(&board, Point::new(29, 9)), state, StdRng::seed_from_u64(3));
    let before = body(&session);

    assert_eq!(session.advance().unwrap(), Some(MoveOutcome::Collided(CollisionKind::Wall)));
    assert_eq!(body(&session), before);
    assert_eq!(session.state().status(), Status::GameOver);

    session.steer(Direction::North);
    assert_eq!(session.advance().unwrap(), None);
    assert_eq!(body(&session), before);
}

#[test]
fn reversing_keeps_the_snake_on_course() {
    let board = Board::default();
    let state = GameState::new(Point::new(0, 0), 1);
    let mut session = Session::from_parts(board, heading_east(&board, Point::new(10, 9)), state, StdRng::seed_from_u64(3));

    session.steer(Direction::West);
    assert_eq!(session.snake().pending_direction(), Direction::East);
    assert_eq!(session.advance().unwrap(), Some(MoveOutcome::Continued));
    assert_eq!(session.snake().head(), Point::new(11, 9));
}

#[test]
fn long_random_walk_keeps_invariants() {
    let mut session = Session::new(Board::default(), 5, StdRng::seed_from_u64(2024)).unwrap();
    let turns = [Direction::North, Direction::East, Direction::South, Direction::West];
    let mut last_score = 0;

    for step in 0..400 {
        let old_len = session.snake().len();
        let old_head = session.snake().head();

        // Chase the food, one axis at a time.
        let food = session.state().food();
        let wanted = if food.x < old_head.x {
            Direction::West
        } else if food.x > old_head.x {
            Direction::East
        } else if food.y < old_head.y {
            Direction::North
        } else {
            Direction::South
        };
        session.steer(if step % 37 == 36 { turns[step % 4] } else { wanted });

        match session.advance().unwrap() {
            Some(MoveOutcome::Continued) => assert_eq!(session.snake().len(), old_len),
            Some(MoveOutcome::AteFood) => {
                assert_eq!(session.snake().len(), old_len + 1);
                assert_eq!(session.state().score(), last_score + 5);
            }
            Some(MoveOutcome::Collided(_)) | None => {
                assert_eq!(session.snake().len(), old_len);
                assert_eq!(session.snake().head(), old_head);
                break;
            }
        }

        assert_eq!(session.snake().head().manhattan(old_head), 1);
        assert!(session.state().score() >= last_score);
        last_score = session.state().score();
        assert_invariants(&session);
    }
}

#[test]
fn loop_plays_until_exit() {
    let start = Instant::now();
    let board = Board::default();
    let state = GameState::new(Point::new(13, 9), 10);
    let mut session = Session::from_parts(board, heading_east(&board, Point::new(10, 9)), state, StdRng::seed_from_u64(8));
    let mut game = GameLoop::new(Scripted(VecDeque::new()), NoDraw, start);

    for i in 1..=3 {
        let flow = game.tick(&mut session, start + Duration::from_millis(100 * i)).unwrap();
        assert_eq!(flow, TickFlow::Continue);
    }
    assert_eq!(session.snake().head(), Point::new(13, 9));
    assert_eq!(session.state().score(), 10);
    assert_eq!(session.snake().len(), 6);

    let mut game = GameLoop::new(Scripted(vec![InputEvent::Exit].into()), NoDraw, start);
    assert_eq!(game.tick(&mut session, start + Duration::from_secs(1)).unwrap(), TickFlow::Exit);
}
