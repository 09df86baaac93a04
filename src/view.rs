use anyhow::Result;
use crossterm::style::Color;

use crate::board::{Board, Cell, Pos};

pub const BACKGROUND: Color = Color::Rgb { r: 0, g: 0, b: 0 };
pub const FOREGROUND: Color = Color::Rgb { r: 200, g: 200, b: 200 };
pub const ACCENT: Color = Color::Rgb { r: 200, g: 0, b: 0 };

/// A filled square in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

pub trait Canvas {
    fn fill_rect(&mut self, rect: PixelRect, color: Color) -> Result<()>;
}

pub fn cell_rect(pos: Pos, cell_size: u32) -> PixelRect {
    PixelRect { x: pos.col as u32 * cell_size, y: pos.row as u32 * cell_size, size: cell_size }
}

pub fn cell_color(cell: Cell) -> Color {
    match cell {
        Cell::Empty => BACKGROUND,
        Cell::Target => ACCENT,
        Cell::Occupied => FOREGROUND,
    }
}

/// Paints every cell of the board.
pub fn draw_board<C: Canvas>(board: &Board, canvas: &mut C) -> Result<()> {
    let cell_size = board.grid().cell_size;
    for (pos, cell) in board.iter() {
        canvas.fill_rect(cell_rect(pos, cell_size), cell_color(cell))?;
    }
    Ok(())
}
