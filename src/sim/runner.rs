//! Fan-out / fan-in across worker threads.
//!
//! The orchestrator draws one `SeedPair` per worker from the `SeedSource`,
//! then starts every worker on its own thread. Workers share nothing after
//! that. Each returns its tally through its join handle, and the tallies are
//! summed once all have finished.

use std::thread;

use tracing::{debug, info};

use crate::core::{SeedSource, SimError, SimulationConfig};

use super::report::SimulationReport;
use super::worker::{run_worker, WorkerTally};

/// Run a simulation, seeding from `config.seed` or the clock.
pub fn run(config: &SimulationConfig) -> Result<SimulationReport, SimError> {
    let mut seeds = match config.seed {
        Some(seed) => SeedSource::new(seed),
        None => SeedSource::from_time(),
    };
    Ok(run_all(config, &mut seeds)?.with_seed(config.seed))
}

/// Split `config.games` across `config.workers` threads and sum the results.
///
/// Each worker plays `games / workers` games; the remainder is dropped.
pub fn run_all(
    config: &SimulationConfig,
    seeds: &mut SeedSource,
) -> Result<SimulationReport, SimError> {
    config.validate()?;

    let games_per_worker = config.games_per_worker();
    info!(
        games_per_worker,
        workers = config.workers,
        total_games = config.total_games(),
        "starting simulation"
    );

    let mut handles = Vec::with_capacity(config.workers);
    for worker in 0..config.workers {
        let pair = seeds.next_pair();
        let handle = thread::Builder::new()
            .name(format!("war-worker-{}", worker))
            .spawn(move || {
                debug!(worker, games = games_per_worker, "worker started");
                let tally = run_worker(games_per_worker, pair);
                debug!(worker, wins = tally.wins, "worker finished");
                tally
            })
            .map_err(|source| SimError::Spawn { worker, source })?;
        handles.push(handle);
    }

    let mut total = WorkerTally::default();
    for (worker, handle) in handles.into_iter().enumerate() {
        let tally = handle
            .join()
            .map_err(|_| SimError::WorkerPanicked { worker })?;
        total.merge(&tally);
    }

    let report = SimulationReport::new(games_per_worker, config.workers, &total);
    info!(
        wins = report.wins,
        total_games = report.total_games,
        win_rate = report.win_rate_percent(),
        mean_tricks = report.mean_tricks(),
        mean_wars = report.mean_wars(),
        "simulation finished"
    );
    Ok(report)
}
