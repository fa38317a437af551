//! Deck building and the two pile-ordering utilities.
//!
//! ## Key Items
//!
//! - `build_deck` / `Deck`: the fixed 52-card composition
//! - `shuffle`: uniform Fisher-Yates permutation
//! - `sort_descending`: stable insertion sort, largest first
//!
//! The two players collect trick winnings differently: one shuffles the
//! pile, the other sorts it. See `rules::CollectStrategy`.

pub mod deck;
pub mod shuffle;
pub mod sort;

pub use deck::{build_deck, Deck, COPIES_PER_RANK, DECK_SIZE, HALF_DECK};
pub use shuffle::shuffle;
pub use sort::sort_descending;
