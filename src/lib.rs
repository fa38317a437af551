//! # war-sim
//!
//! A Monte Carlo simulator for the card game War.
//!
//! Plays many randomized two-player games across parallel workers and
//! reports how often player two wins.
//!
//! ## Design Principles
//!
//! 1. **No allocation per game**: Decks, hands and trick piles are fixed
//!    buffers built once per worker and reused.
//!
//! 2. **No shared state in the hot path**: Each worker receives its seed
//!    words up front and owns its RNG from then on.
//!
//! 3. **Asymmetric collection**: Player one shuffles the piles it wins,
//!    player two sorts them highest first.
//!
//! ## Modules
//!
//! - `core`: Cards, seats, RNG, seed source, configuration, errors
//! - `cards`: Deck builder, shuffle and descending sort
//! - `hand`: Circular-buffer player hands
//! - `rules`: Trick and war resolution, whole-game play
//! - `sim`: Workers, thread fan-out and aggregate reports

pub mod core;
pub mod cards;
pub mod hand;
pub mod rules;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    Card, Seat,
    GameRng, GameRngState,
    SeedPair, SeedSource,
    SimulationConfig, SimError,
};

pub use crate::cards::{build_deck, shuffle, sort_descending, Deck, DECK_SIZE};

pub use crate::hand::{Hand, HAND_CAPACITY};

pub use crate::rules::{play_game, CollectStrategy, GameOutcome, Trick, WarGame};

pub use crate::sim::{run, run_all, run_worker, SimulationReport, Worker, WorkerTally};
