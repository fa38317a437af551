//! War game rules.
//!
//! `engine` resolves tricks, wars and whole games between two hands.
//! `collect` fixes how each seat orders the piles it wins.

pub mod collect;
pub mod engine;

pub use collect::CollectStrategy;
pub use engine::{play_game, GameOutcome, Trick, TrickPile, WarGame};
