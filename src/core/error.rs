//! Simulation errors.
//!
//! The game core itself cannot fail. Only setting up and joining a run
//! can go wrong.

use thiserror::Error;

/// Errors raised while configuring or running a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// A run needs at least one worker to split games across.
    #[error("worker count must be at least 1")]
    NoWorkers,

    /// The OS refused to start a worker thread.
    #[error("failed to spawn worker {worker}: {source}")]
    Spawn {
        worker: usize,
        #[source]
        source: std::io::Error,
    },

    /// A worker thread panicked before reporting its tally.
    #[error("worker {worker} panicked")]
    WorkerPanicked { worker: usize },
}
