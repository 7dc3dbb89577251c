use std::time::Duration;

use rand::Rng;

use crate::board::Board;
use crate::error::GameError;
use crate::point::Point;
use crate::snake::Snake;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 10;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Playing,
    GameOver,
}

/// Score, food and speed of one session. Once `GameOver` is reached nothing
/// here changes again.
#[derive(Debug, Clone)]
pub struct GameState {
    score: u32,
    food: Point,
    level: u8,
    status: Status,
}

impl GameState {
    /// `level` is clamped into `MIN_LEVEL..=MAX_LEVEL`.
    pub fn new(food: Point, level: u8) -> Self {
        GameState {
            score: 0,
            food,
            level: level.clamp(MIN_LEVEL, MAX_LEVEL),
            status: Status::Playing,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == Status::GameOver
    }

    /// Minimum wall-clock time between two snake steps: level 1 waits a
    /// second, level 10 a tenth of one.
    pub fn current_speed_interval(&self) -> Duration {
        Duration::from_millis((11 - u64::from(self.level)) * 100)
    }

    /// Credits the food the snake just swallowed and drops a new one on a cell
    /// the (already grown) snake does not cover.
    pub fn on_food_eaten<R>(
        &mut self,
        board: &Board,
        snake: &Snake,
        rng: &mut R,
    ) -> Result<(), GameError>
    where
        R: Rng + ?Sized,
    {
        if self.is_game_over() {
            return Ok(());
        }

        self.score += u32::from(self.level);
        self.food = board.random_empty_cell(snake.body(), rng)?;
        Ok(())
    }

    pub fn mark_game_over(&mut self) {
        self.status = Status::GameOver;
    }
}
