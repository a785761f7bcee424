//! Gridchase: a two-player grid chase game driven from the terminal.
//!
//! ## Usage
//!
//! - `gridchase` - Start the text command loop on stdin/stdout
//! - `gridchase play` - Same as above
//! - `gridchase demo` - Play a seeded random walk and print the result
//! - `gridchase show` - Print the starting board

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use gridchase::config::GameConfig;
use gridchase::constants::{WALK_SEED, WALK_STEPS};
use gridchase::game::GameSession;
use gridchase::player::Side;
use gridchase::playout::random_walk;
use gridchase::protocol::CommandLoop;

/// Gridchase: a two-player grid chase game
#[derive(Parser)]
#[command(name = "gridchase")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML file with game settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the board size
    #[arg(short, long, global = true)]
    size: Option<usize>,

    /// Print diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin and answer on stdout
    Play,
    /// Play random moves for both players
    Demo {
        /// Number of moves to play
        #[arg(long, default_value_t = WALK_STEPS)]
        steps: usize,
        /// Random seed
        #[arg(long, default_value_t = WALK_SEED)]
        seed: u64,
    },
    /// Print the starting board
    Show,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    if cli.verbose {
        eprintln!("config: {config:?}");
    }
    let mut session = GameSession::new(config).context("invalid game config")?;

    match cli.command {
        Some(Commands::Play) | None => {
            CommandLoop::new(session)
                .verbose(cli.verbose)
                .run_stdio()
                .context("command loop failed")?;
        }
        Some(Commands::Demo { steps, seed }) => {
            let mut rng = fastrand::Rng::with_seed(seed);
            let stats = random_walk(&mut session, steps, &mut rng);
            println!("Random walk: {steps} moves, seed {seed}");
            println!("accepted {} rejected {}", stats.accepted, stats.rejected);
            for side in Side::BOTH {
                println!("{side} at {}", session.position(side));
            }
            println!("{session}");
        }
        Some(Commands::Show) => {
            println!("{session}");
        }
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(size) = cli.size {
        config.board_size = size;
        config.validate().context("invalid --size")?;
    }
    Ok(config)
}
