use rand::{seq::SliceRandom, Rng};

use crate::config::GridSize;
use crate::snake::Direction::{self, *};

/// Random draws tried before falling back to scanning for empty cells.
const MAX_PLACEMENT_DRAWS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Occupied,
    Target,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub col: usize,
    pub row: usize,
}

impl Pos {
    pub fn new(col: usize, row: usize) -> Self {
        Pos { col, row }
    }

    /// The neighbouring position in `dir`, or `None` if it falls off the grid.
    pub fn step(self, dir: Direction, grid: GridSize) -> Option<Pos> {
        let (col, row) = match dir {
            North => (Some(self.col), self.row.checked_sub(1)),
            South => (Some(self.col), Some(self.row + 1)),
            West => (self.col.checked_sub(1), Some(self.row)),
            East => (Some(self.col + 1), Some(self.row)),
        };

        match (col, row) {
            (Some(col), Some(row)) if col < grid.cols && row < grid.rows => Some(Pos { col, row }),
            _ => None,
        }
    }
}

/// Cell states stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: GridSize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(grid: GridSize) -> Self {
        Board { grid, cells: vec![Cell::Empty; grid.cells()] }
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    pub fn set(&mut self, pos: Pos, cell: Cell) {
        let i = self.index(pos);
        self.cells[i] = cell;
    }

    #[cfg(test)]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Every cell with its position, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        let cols = self.grid.cols;
        self.cells.iter().enumerate().map(move |(i, cell)| (Pos::new(i % cols, i / cols), *cell))
    }

    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> Pos {
        Pos::new(rng.gen_range(0..self.grid.cols), rng.gen_range(0..self.grid.rows))
    }

    /// Uniformly random empty cell, or `None` when the board is full.
    pub fn random_empty<R: Rng>(&self, rng: &mut R) -> Option<Pos> {
        for _ in 0..MAX_PLACEMENT_DRAWS {
            let pos = self.random_cell(rng);
            if self.get(pos) == Cell::Empty {
                return Some(pos);
            }
        }

        let empties: Vec<Pos> = self.iter().filter(|(_, c)| *c == Cell::Empty).map(|(p, _)| p).collect();
        empties.choose(rng).copied()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn index(&self, pos: Pos) -> usize {
        pos.row * self.grid.cols + pos.col
    }
}
