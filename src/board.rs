use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::GameError;
use crate::point::Point;

pub const BOARD_WIDTH: i32 = 30;
pub const BOARD_HEIGHT: i32 = 18;

/// The playing field. Valid cells satisfy `0 <= x < width` and `0 <= y < height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
}

impl Board {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "board must have at least one cell");
        Board { width, height }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2, self.height / 2)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Point::new(x, y)))
    }

    /// Picks a cell uniformly among those not in `occupied`.
    pub fn random_empty_cell<'a, R>(
        &self,
        occupied: impl IntoIterator<Item = &'a Point>,
        rng: &mut R,
    ) -> Result<Point, GameError>
    where
        R: Rng + ?Sized,
    {
        let occupied: HashSet<&Point> = occupied.into_iter().collect();
        let choices: Vec<Point> = self.cells().filter(|p| !occupied.contains(p)).collect();

        choices.choose(rng).copied().ok_or(GameError::BoardFull)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
