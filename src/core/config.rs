//! Simulation configuration.
//!
//! A run is described by two counts: how many games to play in total and
//! how many workers to spread them over. Games are split by truncating
//! division, so a remainder is never played.

use serde::{Deserialize, Serialize};

use super::error::SimError;

/// Default number of games per run.
pub const DEFAULT_GAMES: u64 = 10_000;

/// Default number of parallel workers.
pub const DEFAULT_WORKERS: usize = 4;

/// Configuration for one simulation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Total games requested.
    pub games: u64,

    /// Number of parallel workers.
    pub workers: usize,

    /// Fixed seed for the seed source. `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: DEFAULT_GAMES,
            workers: DEFAULT_WORKERS,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Create a config with default counts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the total number of games.
    #[must_use]
    pub fn with_games(mut self, games: u64) -> Self {
        self.games = games;
        self
    }

    /// Set the worker count.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Use a fixed seed instead of the clock.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the config can be run.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.workers == 0 {
            return Err(SimError::NoWorkers);
        }
        Ok(())
    }

    /// Games each worker plays (truncating division).
    ///
    /// Returns 0 when there are no workers.
    #[must_use]
    pub fn games_per_worker(&self) -> u64 {
        match self.workers {
            0 => 0,
            n => self.games / n as u64,
        }
    }

    /// Games actually played across all workers.
    #[must_use]
    pub fn total_games(&self) -> u64 {
        self.games_per_worker() * self.workers as u64
    }
}
