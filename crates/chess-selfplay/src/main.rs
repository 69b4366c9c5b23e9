//! Self-play driver - plays seeded random legal games.
//!
//! Every move goes through the same calls a graphical front end would make:
//! ask the game for the legal moves, pick one, apply it, read the status.

mod config;
mod driver;

use chess_engine::Game;
use clap::Parser;
use config::SelfPlayConfig;
use driver::{play_game, Totals};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Chess self-play - random legal games against itself.
#[derive(Parser)]
#[command(name = "chess-selfplay")]
#[command(about = "Plays seeded random legal games and reports the results")]
struct Args {
    /// Path to a TOML config file (default: selfplay.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of games to play
    #[arg(long)]
    games: Option<u32>,

    /// Seed for move selection
    #[arg(long)]
    seed: Option<u64>,

    /// Plies after which a game is abandoned
    #[arg(long)]
    max_plies: Option<usize>,

    /// Start position in FEN
    #[arg(long)]
    start_fen: Option<String>,
}

impl Args {
    fn apply(self, config: &mut SelfPlayConfig) {
        if let Some(games) = self.games {
            config.games = games;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(max_plies) = self.max_plies {
            config.max_plies = max_plies;
        }
        if self.start_fen.is_some() {
            config.start_fen = self.start_fen;
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = SelfPlayConfig::load(args.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;

    tracing::info!(
        games = config.games,
        seed = config.seed,
        max_plies = config.max_plies,
        "starting self-play"
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut totals = Totals::default();

    for number in 1..=config.games {
        let game = match &config.start_fen {
            Some(fen) => Game::from_fen(fen)?,
            None => Game::new(),
        };
        let report = play_game(number, game, config.max_plies, &mut rng)?;
        println!("{}", report);
        totals.record(&report);
    }

    println!("{}", totals);
    Ok(())
}
