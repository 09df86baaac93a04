use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::KeyEvent;
use log::{info, trace};
use rand::Rng;

use crate::config::GameConfig;
use crate::game::{GameState, Lifecycle};
use crate::input::{map_key, Input};
use crate::term::TermManager;
use crate::view::{draw_board, Canvas};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { length: usize },
    Lost { length: usize },
    Quit,
}

/// What the tick loop needs from the device it runs on.
pub trait Frontend: Canvas {
    /// Waits up to `timeout` for a key press.
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>>;
    fn present(&mut self) -> Result<()>;
}

pub fn run(config: &GameConfig) -> Result<Outcome> {
    let grid = config.validate()?;
    info!("starting {}x{} grid, tick {:?}", grid.cols, grid.rows, config.tick());

    // Size check before anything is allocated or drawn
    let mut term = TermManager::new(grid)?;
    let mut game = GameState::new(config.width, config.height, config.cell_size)?;
    term.setup()?;

    // The terminal is restored when `term` drops, on every path out of here
    play(&mut game, &mut term, config.tick())
}

pub fn play<F: Frontend, R: Rng>(game: &mut GameState<R>, frontend: &mut F, tick: Duration) -> Result<Outcome> {
    draw_board(game.board(), frontend)?;
    frontend.present()?;

    let mut next_tick = Instant::now() + tick;

    loop {
        match game.lifecycle() {
            Lifecycle::Running => {}
            Lifecycle::Won => return Ok(Outcome::Won { length: game.len() }),
            Lifecycle::Lost => {
                info!("lost with head at {:?}", game.head());
                return Ok(Outcome::Lost { length: game.len() });
            }
        }

        loop {
            let left = next_tick.saturating_duration_since(Instant::now());
            let key = match frontend.poll_key(left)? {
                Some(key) => key,
                None => break,
            };

            match map_key(&key) {
                Some(Input::Quit) => {
                    info!("quit at length {}", game.len());
                    return Ok(Outcome::Quit);
                }
                Some(Input::Steer(dir)) => game.set_direction(dir),
                None => {}
            }

            if Instant::now() >= next_tick {
                break;
            }
        }

        let step = game.advance();
        trace!("{:?} heading {:?}", step, game.direction());

        draw_board(game.board(), frontend)?;
        frontend.present()?;

        next_tick = next_deadline(next_tick, tick, Instant::now());
    }
}

/// The tick after `prev`, or a full tick from `now` when that moment has
/// already passed. Late frames drop ticks instead of bunching them up.
fn next_deadline(prev: Instant, tick: Duration, now: Instant) -> Instant {
    let next = prev + tick;
    if next > now {
        next
    } else {
        now + tick
    }
}
