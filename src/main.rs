use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use gridsnake::game_state::{MAX_LEVEL, MIN_LEVEL};
use gridsnake::{Board, GameLoop, KeyboardInput, Session, TermRenderer, TerminalGuard};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gridsnake")]
#[command(version, about = "Snake in the terminal")]
struct Cli {
    /// Starting level; higher levels move faster
    #[arg(long, default_value_t = MIN_LEVEL, value_parser = clap::value_parser!(u8).range(i64::from(MIN_LEVEL)..=i64::from(MAX_LEVEL)))]
    level: u8,

    /// Seed for food placement, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let board = Board::default();
    let mut session = Session::new(board, cli.level, rng)?;

    // Restores the terminal when it goes out of scope, before any error is printed
    let _terminal = TerminalGuard::acquire(&board)?;
    let mut game = GameLoop::new(KeyboardInput::new(), TermRenderer::stdout(), Instant::now());
    game.run(&mut session)
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
