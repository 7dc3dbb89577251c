use std::collections::VecDeque;

use crate::board::Board;
use crate::point::Point;
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub fn unit(self) -> Point {
        match self {
            North => Point::new(0, -1),
            East => Point::new(1, 0),
            South => Point::new(0, 1),
            West => Point::new(-1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            North => South,
            East => West,
            South => North,
            West => East,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CollisionKind {
    Wall,
    SelfCollision,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Continued,
    AteFood,
    Collided(CollisionKind),
}

/// Occupied cells, head first. Consecutive cells are orthogonal neighbours and
/// no cell appears twice while the snake is alive.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Point>,
    heading: Direction,
    pending: Direction,
}

impl Snake {
    /// Lays out `length` cells from `head`, trailing behind it so the snake can
    /// keep moving along `heading`.
    pub fn new(board: &Board, head: Point, length: usize, heading: Direction) -> Self {
        let back = heading.opposite().unit();
        let mut body = VecDeque::with_capacity(board.cell_count());
        let mut pos = head;

        for _ in 0..length.max(1) {
            body.push_back(pos);
            pos = pos + back;
        }

        Snake { body, heading, pending: heading }
    }

    /// Builds a snake from explicit cells, head first.
    pub fn from_segments(board: &Board, segments: &[Point], heading: Direction) -> Self {
        assert!(!segments.is_empty(), "a snake needs at least one segment");

        let mut body = VecDeque::with_capacity(board.cell_count().max(segments.len()));
        body.extend(segments.iter().copied());
        Snake { body, heading, pending: heading }
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn tail(&self) -> Point {
        self.body[self.body.len() - 1]
    }

    pub fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.body.contains(&p)
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    /// Records the heading for the next step. Reversing onto the neck is ignored.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if direction != self.heading.opposite() {
            self.pending = direction;
        }
    }

    /// Moves one cell along the pending direction.
    ///
    /// Stepping onto `food` keeps the tail, so the snake is one cell longer
    /// after this call. Otherwise the tail cell is vacated in the same step and
    /// the head may move into it. On a collision nothing is changed.
    pub fn advance(&mut self, board: &Board, food: Point) -> MoveOutcome {
        let new_head = self.head() + self.pending.unit();

        if !board.contains(new_head) {
            return MoveOutcome::Collided(CollisionKind::Wall);
        }

        let eats = new_head == food;
        let keep = if eats { self.body.len() } else { self.body.len() - 1 };
        if self.body.iter().take(keep).any(|p| *p == new_head) {
            return MoveOutcome::Collided(CollisionKind::SelfCollision);
        }

        self.body.push_front(new_head);
        if !eats {
            self.body.pop_back();
        }
        self.heading = self.pending;

        if eats {
            MoveOutcome::AteFood
        } else {
            MoveOutcome::Continued
        }
    }
}
