//! Aggregate results of a simulation run.

use serde::{Deserialize, Serialize};

use super::worker::WorkerTally;

/// Totals for a whole run, combined across workers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Games each worker played.
    pub games_per_worker: u64,

    /// Workers that ran.
    pub workers: usize,

    /// Games actually played (`games_per_worker * workers`).
    pub total_games: u64,

    /// Games won by player two.
    pub wins: u64,

    /// Tricks played across all games.
    pub tricks: u64,

    /// War rounds fought across all games.
    pub wars: u64,

    /// Seed of the seed source, when the run was seeded explicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl SimulationReport {
    /// Build a report from the plan and the merged worker tallies.
    pub fn new(games_per_worker: u64, workers: usize, tally: &WorkerTally) -> Self {
        Self {
            games_per_worker,
            workers,
            total_games: tally.games,
            wins: tally.wins,
            tricks: tally.tricks,
            wars: tally.wars,
            seed: None,
        }
    }

    /// Record the seed that produced this run.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Player two's win rate as a percentage.
    #[must_use]
    pub fn win_rate_percent(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.wins as f64 * 100.0 / self.total_games as f64
        }
    }

    /// Average tricks per game.
    #[must_use]
    pub fn mean_tricks(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.tricks as f64 / self.total_games as f64
        }
    }

    /// Average war rounds per game.
    #[must_use]
    pub fn mean_wars(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.wars as f64 / self.total_games as f64
        }
    }
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Smart player wins: {} games out of {} ({:.2}%)",
            self.wins,
            self.total_games,
            self.win_rate_percent()
        )
    }
}
