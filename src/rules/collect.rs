//! How a trick winner orders a pile before taking it.

use serde::{Deserialize, Serialize};

use crate::cards::{shuffle, sort_descending};
use crate::core::{Card, GameRng, Seat};

/// Ordering applied to a won pile before it joins the winner's hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectStrategy {
    /// Random permutation of the pile.
    Shuffle,
    /// Highest cards first, so they are replayed soonest.
    SortDescending,
}

impl CollectStrategy {
    /// The strategy a seat always uses.
    ///
    /// Player one shuffles; player two sorts. The asymmetry shapes the
    /// reported win rate and must not be unified.
    #[must_use]
    pub const fn for_seat(seat: Seat) -> Self {
        match seat {
            Seat::One => CollectStrategy::Shuffle,
            Seat::Two => CollectStrategy::SortDescending,
        }
    }

    /// Reorder `pile` in place.
    ///
    /// `SortDescending` never touches the RNG.
    pub fn apply(self, pile: &mut [Card], rng: &mut GameRng) {
        match self {
            CollectStrategy::Shuffle => shuffle(pile, rng),
            CollectStrategy::SortDescending => sort_descending(pile),
        }
    }
}
