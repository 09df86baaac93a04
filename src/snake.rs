use std::collections::VecDeque;

use crate::board::Pos;
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            North => South,
            South => North,
            East => West,
            West => East,
        }
    }
}

/// Segment chain, head first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Pos>,
}

impl Snake {
    pub fn new(pos: Pos) -> Self {
        Snake { body: VecDeque::from(vec![pos]) }
    }

    #[cfg(test)]
    pub fn body(&self) -> impl ExactSizeIterator<Item = &Pos> + '_ {
        self.body.iter()
    }

    pub fn head(&self) -> Pos {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Adds `pos` as the new head and keeps the tail.
    pub fn grow_to(&mut self, pos: Pos) {
        self.body.push_front(pos);
    }

    /// Adds `pos` as the new head and drops the tail, returning where it was.
    pub fn slide_to(&mut self, pos: Pos) -> Pos {
        self.body.push_front(pos);
        match self.body.pop_back() {
            Some(tail) => tail,
            None => pos,
        }
    }
}
