use std::{io::{Stdout, Write, stdout}, time::{Duration, Instant}};

use anyhow::{bail, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};
use crossterm::style::Color;
use log::debug;

use crate::app::Frontend;
use crate::config::GridSize;
use crate::view::{Canvas, PixelRect};

/// Terminal columns per grid cell, so cells come out roughly square.
const CELL_WIDTH: u16 = 2;
const TITLE: &str = "Snake";

/// Owns the terminal for the length of a game. Dropping it hands the
/// terminal back in its original state.
pub struct TermManager {
    stdout: Stdout,
    cell_size: u32,
    active: bool,
}

impl TermManager {
    pub fn new(grid: GridSize) -> Result<Self> {
        let (width, height) = terminal::size()?;
        let (need_w, need_h) = (grid.cols as u64 * CELL_WIDTH as u64, grid.rows as u64);

        if need_w > width as u64 || need_h > height as u64 {
            bail!(
                "terminal is {}x{} but a {}x{} grid needs at least {}x{}",
                width, height, grid.cols, grid.rows, need_w, need_h
            );
        }

        Ok(TermManager { stdout: stdout(), cell_size: grid.cell_size, active: false })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen, terminal::SetTitle(TITLE))?;
        self.active = true;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking, terminal::Clear(ClearType::All))?;
        debug!("terminal ready");
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let stdout = &mut self.stdout;
        run_both(
            terminal::disable_raw_mode,
            || execute!(stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen),
        )?;
        debug!("terminal restored");
        Ok(())
    }
}

/// Runs `second` even when `first` fails and reports the first error.
fn run_both<E>(
    first: impl FnOnce() -> std::result::Result<(), E>,
    second: impl FnOnce() -> std::result::Result<(), E>,
) -> std::result::Result<(), E> {
    let first = first();
    let second = second();
    first.and(second)
}

/// Terminal column, row and width covered by a pixel square.
fn screen_span(rect: PixelRect, cell_size: u32) -> (u16, u16, u16) {
    let col = (rect.x / cell_size) as u16 * CELL_WIDTH;
    let row = (rect.y / cell_size) as u16;
    let width = (rect.size / cell_size).max(1) as u16 * CELL_WIDTH;
    (col, row, width)
}

impl Canvas for TermManager {
    fn fill_rect(&mut self, rect: PixelRect, color: Color) -> Result<()> {
        let (col, row, width) = screen_span(rect, self.cell_size);
        let blank = " ".repeat(width as usize);
        queue!(self.stdout, cursor::MoveTo(col, row), style::SetBackgroundColor(color), style::Print(blank))?;
        Ok(())
    }
}

impl Frontend for TermManager {
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>> {
        let deadline = Instant::now() + timeout;

        // Skip mouse and resize events without cutting the wait short
        loop {
            if !poll(deadline.saturating_duration_since(Instant::now()))? {
                return Ok(None);
            }
            if let Event::Key(ev) = read()? {
                return Ok(Some(ev));
            }
        }
    }

    fn present(&mut self) -> Result<()> {
        queue!(self.stdout, style::ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
