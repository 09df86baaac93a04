mod app;
mod board;
mod config;
mod game;
mod input;
mod snake;
mod term;
mod view;

use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env, Target};

use app::Outcome;
use config::GameConfig;

fn main() -> Result<()> {
    let config = GameConfig::parse();
    init_logging(&config)?;

    // The terminal is back to normal by the time run() returns
    match app::run(&config)? {
        Outcome::Won { length } => println!("You won! Length: {}", length),
        Outcome::Lost { length } => println!("Game over! Length: {}", length),
        Outcome::Quit => {}
    }

    Ok(())
}

fn init_logging(config: &GameConfig) -> Result<()> {
    // Stderr shares the screen with the game, so stay quiet unless asked
    let default = if config.log_file.is_some() { "info" } else { "off" };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default));

    if let Some(path) = &config.log_file {
        let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}
