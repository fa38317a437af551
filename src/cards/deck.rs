//! The 52-card deck.

use crate::core::{Card, GameRng};

use super::shuffle::shuffle;

/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Cards dealt to each player.
pub const HALF_DECK: usize = DECK_SIZE / 2;

/// Copies of each rank in a deck.
pub const COPIES_PER_RANK: usize = 4;

/// Build a fresh deck in base order.
///
/// Four runs of Two through Ace, one after another. The result is not
/// shuffled.
///
/// ```
/// use war_sim::cards::build_deck;
/// use war_sim::core::Card;
///
/// let deck = build_deck();
/// assert_eq!(deck[0], Card::TWO);
/// assert_eq!(deck[12], Card::ACE);
/// assert_eq!(deck[13], Card::TWO);
/// ```
#[must_use]
pub fn build_deck() -> [Card; DECK_SIZE] {
    let mut cards = [Card::EMPTY; DECK_SIZE];
    let ranks = (0..COPIES_PER_RANK).flat_map(|_| Card::ranks());
    for (slot, card) in cards.iter_mut().zip(ranks) {
        *slot = card;
    }
    cards
}

/// A reusable deck, reshuffled in place before every game.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Create a deck in base order.
    #[must_use]
    pub fn new() -> Self {
        Self { cards: build_deck() }
    }

    /// Shuffle the whole deck in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        shuffle(&mut self.cards, rng);
    }

    /// Split into player one's and player two's halves.
    #[must_use]
    pub fn halves(&self) -> (&[Card], &[Card]) {
        self.cards.split_at(HALF_DECK)
    }

    /// All cards in current order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
