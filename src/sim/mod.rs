//! Monte Carlo simulation across parallel workers.
//!
//! ## Overview
//!
//! - **Worker**: plays its share of games sequentially with its own RNG,
//!   deck and hands
//! - **run_all**: launches one worker thread per share and sums the tallies
//! - **SimulationReport**: the combined totals and derived rates
//!
//! ## Usage
//!
//! ```
//! use war_sim::core::{SeedSource, SimulationConfig};
//! use war_sim::sim::run_all;
//!
//! let config = SimulationConfig::new().with_games(100).with_workers(4);
//! let report = run_all(&config, &mut SeedSource::new(42)).unwrap();
//!
//! assert_eq!(report.total_games, 100);
//! assert!(report.wins <= 100);
//! ```

pub mod report;
pub mod runner;
pub mod worker;

pub use report::SimulationReport;
pub use runner::{run, run_all};
pub use worker::{run_worker, Worker, WorkerTally};
