use std::{path::PathBuf, time::Duration};

use clap::Parser;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be greater than zero")]
    ZeroDimension { name: &'static str },
    #[error("cell size must be greater than zero")]
    ZeroCellSize,
    #[error("cell size {cell_size} does not evenly divide {name} {size}")]
    NotDivisible { name: &'static str, size: u32, cell_size: u32 },
    #[error("a {cols}x{rows} grid is larger than the {max} cells supported")]
    TooLarge { cols: u32, rows: u32, max: usize },
    #[error("tick length must be at least one millisecond")]
    ZeroTick,
}

/// Far beyond any terminal; keeps the board allocation bounded.
pub const MAX_CELLS: usize = 1 << 20;

/// Startup options. Fixed for the whole run.
#[derive(Debug, Clone, Parser)]
#[command(name = "gridsnake", about = "Grid snake in the terminal")]
pub struct GameConfig {
    /// Window width in pixels
    #[arg(long, default_value_t = 400)]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 400)]
    pub height: u32,

    /// Edge length of one grid cell in pixels
    #[arg(long, default_value_t = 20)]
    pub cell_size: u32,

    /// Milliseconds between game updates
    #[arg(long, default_value_t = 100)]
    pub tick_ms: u64,

    /// Write log records to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { width: 400, height: 400, cell_size: 20, tick_ms: 100, log_file: None }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<GridSize, ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }

        GridSize::from_pixels(self.width, self.height, self.cell_size)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Board dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub cols: usize,
    pub rows: usize,
    pub cell_size: u32,
}

impl GridSize {
    pub fn from_pixels(width: u32, height: u32, cell_size: u32) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::ZeroDimension { name: "width" });
        }
        if height == 0 {
            return Err(ConfigError::ZeroDimension { name: "height" });
        }
        if cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        for (name, size) in [("width", width), ("height", height)] {
            if size % cell_size != 0 {
                return Err(ConfigError::NotDivisible { name, size, cell_size });
            }
        }

        let (cols, rows) = (width / cell_size, height / cell_size);
        match (cols as usize).checked_mul(rows as usize) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => return Err(ConfigError::TooLarge { cols, rows, max: MAX_CELLS }),
        }

        Ok(GridSize { cols: cols as usize, rows: rows as usize, cell_size })
    }

    pub fn cells(&self) -> usize {
        self.cols * self.rows
    }
}
