use log::{debug, info};
use rand::{rngs::ThreadRng, Rng};

use crate::board::{Board, Cell, Pos};
use crate::config::{ConfigError, GridSize};
use crate::snake::{Direction, Snake};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Running,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crash {
    Wall,
    Itself,
}

/// What a single `advance` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The game is over; nothing changed.
    Halted,
    /// No direction chosen yet.
    Idle,
    Moved { new_head: Pos, old_tail: Pos },
    Ate { new_head: Pos, target: Option<Pos> },
    Crashed(Crash),
}

pub struct GameState<R = ThreadRng> {
    board: Board,
    snake: Snake,
    direction: Option<Direction>,
    target: Option<Pos>,
    lifecycle: Lifecycle,
    rng: R,
}

impl GameState<ThreadRng> {
    pub fn new(width: u32, height: u32, cell_size: u32) -> Result<Self, ConfigError> {
        let grid = GridSize::from_pixels(width, height, cell_size)?;
        Ok(GameState::with_rng(grid, rand::thread_rng()))
    }
}

impl<R: Rng> GameState<R> {
    pub fn with_rng(grid: GridSize, mut rng: R) -> Self {
        let mut board = Board::new(grid);

        let start = board.random_cell(&mut rng);
        board.set(start, Cell::Occupied);

        let target = board.random_empty(&mut rng);
        if let Some(pos) = target {
            board.set(pos, Cell::Target);
        }

        let mut game = GameState {
            board,
            snake: Snake::new(start),
            direction: None,
            target,
            lifecycle: Lifecycle::Running,
            rng,
        };
        game.check_win();
        game
    }

    pub fn set_direction(&mut self, requested: Direction) {
        if self.lifecycle != Lifecycle::Running {
            return;
        }

        match self.direction {
            Some(current) if current.opposite() == requested => {}
            _ => self.direction = Some(requested),
        }
    }

    pub fn advance(&mut self) -> Step {
        if self.lifecycle != Lifecycle::Running {
            return Step::Halted;
        }
        let dir = match self.direction {
            Some(dir) => dir,
            None => return Step::Idle,
        };

        let new_head = match self.snake.head().step(dir, self.board.grid()) {
            Some(pos) => pos,
            None => return self.lose(Crash::Wall),
        };

        let step = match self.board.get(new_head) {
            Cell::Occupied => return self.lose(Crash::Itself),
            Cell::Target => {
                self.snake.grow_to(new_head);
                self.board.set(new_head, Cell::Occupied);

                self.target = self.board.random_empty(&mut self.rng);
                if let Some(pos) = self.target {
                    self.board.set(pos, Cell::Target);
                }
                debug!("ate at {:?}, length {}, next target {:?}", new_head, self.snake.len(), self.target);

                Step::Ate { new_head, target: self.target }
            }
            Cell::Empty => {
                let old_tail = self.snake.slide_to(new_head);
                self.board.set(old_tail, Cell::Empty);
                self.board.set(new_head, Cell::Occupied);

                Step::Moved { new_head, old_tail }
            }
        };

        self.check_win();
        step
    }

    ///////////////////////////////////////////////////////////////////////////

    fn lose(&mut self, crash: Crash) -> Step {
        info!("crashed ({:?}) at length {}", crash, self.snake.len());
        self.lifecycle = Lifecycle::Lost;
        Step::Crashed(crash)
    }

    fn check_win(&mut self) {
        if self.snake.len() >= self.board.grid().cells() {
            info!("board filled at length {}", self.snake.len());
            self.lifecycle = Lifecycle::Won;
        }
    }
}

impl<R> GameState<R> {
    /// Read-only view for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn grid(&self) -> GridSize {
        self.board.grid()
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn head(&self) -> Pos {
        self.snake.head()
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }
}

#[cfg(test)]
impl<R> GameState<R> {
    pub fn target(&self) -> Option<Pos> {
        self.target
    }

    pub fn chain(&self) -> impl ExactSizeIterator<Item = &Pos> + '_ {
        self.snake.body()
    }
}

#[cfg(test)]
impl<R: Rng> GameState<R> {
    /// Builds a game from an explicit chain (head first) and target.
    fn from_parts(grid: GridSize, chain: &[Pos], target: Option<Pos>, direction: Option<Direction>, rng: R) -> Self {
        let mut board = Board::new(grid);
        let mut snake = Snake::new(chain[chain.len() - 1]);
        board.set(chain[chain.len() - 1], Cell::Occupied);
        for pos in chain.iter().rev().skip(1) {
            snake.grow_to(*pos);
            board.set(*pos, Cell::Occupied);
        }
        if let Some(pos) = target {
            board.set(pos, Cell::Target);
        }

        GameState { board, snake, direction, target, lifecycle: Lifecycle::Running, rng }
    }
}
