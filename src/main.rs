//! War simulator
//!
//! Usage:
//!   cargo run --release -- [OPTIONS]
//!
//! Options:
//!   -g, --games    Total games to play (default: 10000)
//!   -p, --procs    Parallel workers (default: 4)
//!   -s, --seed     Fixed seed instead of the clock
//!       --json     Print the report as JSON
//!   -v, --verbose  Log worker progress

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use war_sim::core::{SimulationConfig, DEFAULT_GAMES, DEFAULT_WORKERS};

#[derive(Parser, Debug)]
#[command(author, version, about = "Monte Carlo simulator for the card game War")]
struct Args {
    /// Number of games to play
    #[arg(short, long, default_value_t = DEFAULT_GAMES)]
    games: u64,

    /// Number of concurrent workers
    #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
    procs: usize,

    /// Seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Emit the report as JSON
    #[arg(long)]
    json: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> SimulationConfig {
        let config = SimulationConfig::new()
            .with_games(self.games)
            .with_workers(self.procs);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = args.config();
    config.validate().context("invalid simulation settings")?;

    if !args.json {
        println!(
            "Playing {} games each on {} cores.",
            config.games_per_worker(),
            config.workers
        );
    }

    let report = war_sim::run(&config).context("simulation failed")?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to encode report")?
        );
    } else {
        println!("{}", report);
    }

    Ok(())
}
