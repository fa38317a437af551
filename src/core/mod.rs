//! Core types: cards, seats, RNG, seeding, configuration and errors.

pub mod card;
pub mod config;
pub mod error;
pub mod rng;
pub mod seed;

pub use card::{Card, Seat};
pub use config::{SimulationConfig, DEFAULT_GAMES, DEFAULT_WORKERS};
pub use error::SimError;
pub use rng::{GameRng, GameRngState};
pub use seed::{SeedPair, SeedSource};
