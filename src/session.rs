use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::board::Board;
use crate::error::GameError;
use crate::game_state::GameState;
use crate::snake::{Direction, MoveOutcome, Snake};

pub const INITIAL_SNAKE_LENGTH: usize = 5;
pub const INITIAL_HEADING: Direction = Direction::West;

/// Everything one game owns. A new game is a new `Session`.
pub struct Session {
    board: Board,
    snake: Snake,
    state: GameState,
    rng: StdRng,
}

impl Session {
    /// Starts a game: the snake's head sits at the board center with its body
    /// stretching east, and food is dropped on a free cell.
    pub fn new(board: Board, level: u8, mut rng: StdRng) -> Result<Self, GameError> {
        let snake = Snake::new(&board, board.center(), INITIAL_SNAKE_LENGTH, INITIAL_HEADING);
        let food = board.random_empty_cell(snake.body(), &mut rng)?;
        let state = GameState::new(food, level);

        info!(level = state.level(), ?food, "session started");
        Ok(Session { board, snake, state, rng })
    }

    /// Assembles a session from prepared parts.
    pub fn from_parts(board: Board, snake: Snake, state: GameState, rng: StdRng) -> Self {
        debug_assert!(!snake.contains(state.food()));
        Session { board, snake, state, rng }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn steer(&mut self, direction: Direction) {
        if !self.state.is_game_over() {
            self.snake.set_pending_direction(direction);
        }
    }

    /// Steps the snake once and settles the consequences. Returns `None` once
    /// the game is over.
    pub fn advance(&mut self) -> Result<Option<MoveOutcome>, GameError> {
        if self.state.is_game_over() {
            return Ok(None);
        }

        let outcome = self.snake.advance(&self.board, self.state.food());
        match outcome {
            MoveOutcome::Continued => {}
            MoveOutcome::AteFood => {
                self.state.on_food_eaten(&self.board, &self.snake, &mut self.rng)?;
                debug!(
                    score = self.state.score(),
                    length = self.snake.len(),
                    food = ?self.state.food(),
                    "food eaten"
                );
            }
            MoveOutcome::Collided(kind) => {
                self.state.mark_game_over();
                info!(?kind, score = self.state.score(), length = self.snake.len(), "game over");
            }
        }

        Ok(Some(outcome))
    }
}
