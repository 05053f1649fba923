use std::collections::VecDeque;

use crate::geometry::{Direction::{self, *}, Grid, Point};
use MoveResult::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Crash {
    Wall,
    Body,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Point, vacated: Point },
    Crashed(Crash),
}

/// The head plus an ordered trail of segments, nearest to the head first.
/// The trail only ever holds live segments, so its length is the score.
#[derive(Clone, Debug)]
pub struct Snake {
    head: Point,
    body: VecDeque<Point>,
    direction: Direction,
    vacated: Option<Point>,
}

impl Snake {
    pub fn new(head: Point, direction: Direction) -> Self {
        Snake { head, body: VecDeque::new(), direction, vacated: None }
    }

    pub fn head(&self) -> Point {
        self.head
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

    pub fn body_contains(&self, point: Point) -> bool {
        self.body.contains(&point)
    }

    /// True if `point` is the head or any body segment.
    pub fn occupies(&self, point: Point) -> bool {
        self.head == point || self.body_contains(point)
    }

    /// Advance one cell. On a crash the snake is left untouched.
    pub fn move_step(&mut self, grid: &Grid) -> MoveResult {
        let old_head = self.head;
        let new_head = old_head.step(self.direction);

        if !grid.contains(new_head) {
            return Crashed(Crash::Wall);
        }

        // After the shift the trail is the old head followed by every segment
        // but the tail, which moves out of the way this tick.
        let keep = self.body.len().saturating_sub(1);
        if self.body.iter().take(keep).any(|p| *p == new_head) {
            return Crashed(Crash::Body);
        }

        self.body.push_front(old_head);
        let vacated = self.body.pop_back().unwrap_or(old_head);
        self.vacated = Some(vacated);
        self.head = new_head;

        Moved { new_head, vacated }
    }

    /// Extend the trail into the cell freed by the last move.
    pub fn grow(&mut self) -> bool {
        match self.vacated.take() {
            Some(cell) => {
                self.body.push_back(cell);
                true
            }
            None => false,
        }
    }

    /// Returns false when the turn would reverse the snake onto itself.
    pub fn set_direction(&mut self, new_direction: Direction) -> bool {
        if new_direction.is_opposite(self.direction) {
            return false;
        }
        self.direction = new_direction;
        true
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    pub fn head_char(&self) -> char {
        match self.direction {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}
