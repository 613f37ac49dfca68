use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use minesweep_core::{Difficulty, PlayEngine};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::io;

use crate::session::{Session, SessionEnd};

mod command;
mod render;
mod session;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Board preset, asked interactively when omitted
    #[arg(short, long, value_enum)]
    difficulty: Option<DifficultyArg>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed: {}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock());

    let difficulty = match args.difficulty {
        Some(arg) => Difficulty::from(arg),
        None => match session.choose_difficulty()? {
            Some(difficulty) => difficulty,
            None => return Ok(()),
        },
    };
    log::debug!("Starting {} game", difficulty);

    let mut engine = PlayEngine::new(difficulty.config(), &mut rng)
        .with_context(|| format!("Could not create {} board", difficulty.name()))?;

    match session.play(&mut engine)? {
        SessionEnd::Won | SessionEnd::Lost => {}
        end => log::info!("Session ended early: {:?}", end),
    }
    Ok(())
}
