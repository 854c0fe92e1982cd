use std::collections::VecDeque;

use crate::grid::{Cell, Direction, Grid};

pub const INITIAL_LENGTH: usize = 3;
pub const POINTS_PER_FOOD: u32 = 10;

/// What the head ran into.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Collision {
    Wall,
    Body,
}

/// Snake body, head first.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    desired_length: usize,
    score: u32,
}

impl Snake {
    /// A fresh snake in its starting position for `grid`.
    pub fn new(grid: &Grid) -> Self {
        let mut snake = Snake {
            body: VecDeque::with_capacity(INITIAL_LENGTH),
            direction: Direction::Right,
            desired_length: INITIAL_LENGTH,
            score: 0,
        };
        snake.reset(grid);
        snake
    }

    /// Places a snake on arbitrary cells. The first cell is the head; the
    /// desired length is the number of cells given. `None` if `cells` is empty.
    pub fn from_cells(
        cells: impl IntoIterator<Item = Cell>,
        direction: Direction,
    ) -> Option<Self> {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Snake {
            desired_length: body.len(),
            body,
            direction,
            score: 0,
        })
    }

    pub fn reset(&mut self, grid: &Grid) {
        let head = Cell::new(grid.width / 4, grid.height / 2);
        self.body.clear();
        self.body
            .extend((0..INITIAL_LENGTH as i16).map(|i| Cell::new(head.x - i, head.y)));
        self.direction = Direction::Right;
        self.desired_length = INITIAL_LENGTH;
        self.score = 0;
    }

    /// Turns the snake unless `dir` would reverse it onto its own neck.
    /// Returns whether the direction was accepted.
    pub fn set_direction(&mut self, dir: Direction) -> bool {
        if dir == self.direction.opposite() {
            return false;
        }
        self.direction = dir;
        true
    }

    pub fn advance(&mut self) {
        let new_head = self.head().step(self.direction);
        self.body.push_front(new_head);
        while self.body.len() > self.desired_length {
            self.body.pop_back();
        }
    }

    /// Walls are checked before the body.
    pub fn check_collision(&self, grid: &Grid) -> Option<Collision> {
        let head = self.head();
        if !grid.contains(head) {
            return Some(Collision::Wall);
        }
        if self.body.iter().skip(1).any(|&cell| cell == head) {
            return Some(Collision::Body);
        }
        None
    }

    pub fn grow(&mut self) {
        self.desired_length += 1;
        self.score += POINTS_PER_FOOD;
    }

    pub fn head(&self) -> Cell {
        // Never empty: desired_length >= 1 and advance pushes before popping.
        self.body[0]
    }

    pub fn body(&self) -> impl ExactSizeIterator<Item = &Cell> + '_ {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn desired_length(&self) -> usize {
        self.desired_length
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}
