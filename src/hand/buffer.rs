//! Fixed-capacity circular card queue.
//!
//! A `Hand` stores cards in a 64-slot ring with a read cursor and a write
//! cursor. Drawing advances the read cursor, accepting winnings advances the
//! write cursor, and both wrap at the capacity. Nothing is allocated after
//! construction, so one `Hand` is reused for every game a worker plays.

use crate::core::Card;

/// Slots in a hand's ring buffer.
///
/// A hand never holds more than the 52 cards of a deck plus the few
/// sentinels collected on a game's final trick. One slot stays unused so a
/// full ring is distinguishable from an empty one.
pub const HAND_CAPACITY: usize = 64;

/// A player's queue of cards.
///
/// ## Usage
///
/// ```
/// use war_sim::core::Card;
/// use war_sim::hand::Hand;
///
/// let mut hand = Hand::new();
/// hand.reset(&[Card::ACE, Card::TWO]);
///
/// assert_eq!(hand.draw(), Card::ACE);
/// hand.accept(&[Card::KING]);
/// assert_eq!(hand.draw(), Card::TWO);
/// assert_eq!(hand.draw(), Card::KING);
///
/// assert!(!hand.is_alive());
/// assert_eq!(hand.draw(), Card::EMPTY);
/// ```
#[derive(Clone, Debug)]
pub struct Hand {
    cards: [Card; HAND_CAPACITY],
    read: usize,
    write: usize,
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: [Card::EMPTY; HAND_CAPACITY],
            read: 0,
            write: 0,
        }
    }

    /// Create a hand holding `cards`, first card drawn first.
    #[must_use]
    pub fn with_cards(cards: &[Card]) -> Self {
        let mut hand = Self::new();
        hand.reset(cards);
        hand
    }

    /// Discard everything and load `cards` from the start of the ring.
    ///
    /// # Panics
    ///
    /// Panics if `cards` does not fit in the ring.
    pub fn reset(&mut self, cards: &[Card]) {
        assert!(
            cards.len() < HAND_CAPACITY,
            "hand holds at most {} cards, got {}",
            HAND_CAPACITY - 1,
            cards.len()
        );
        self.cards[..cards.len()].copy_from_slice(cards);
        self.read = 0;
        self.write = cards.len();
    }

    /// Does this hand have any card left to draw?
    #[inline]
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.read != self.write
    }

    /// Number of cards currently held.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        (self.write + HAND_CAPACITY - self.read) % HAND_CAPACITY
    }

    /// Is the hand empty?
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.is_alive()
    }

    /// Take the next card, or `Card::EMPTY` if there is none.
    #[inline]
    pub fn draw(&mut self) -> Card {
        if self.read == self.write {
            return Card::EMPTY;
        }
        let card = self.cards[self.read];
        self.read = (self.read + 1) % HAND_CAPACITY;
        card
    }

    /// Append `winnings` after the last held card, wrapping around the ring.
    pub fn accept(&mut self, winnings: &[Card]) {
        debug_assert!(
            self.len() + winnings.len() < HAND_CAPACITY,
            "hand overflow: holding {}, accepting {}",
            self.len(),
            winnings.len()
        );
        let tail = (HAND_CAPACITY - self.write).min(winnings.len());
        let (front, wrapped) = winnings.split_at(tail);
        self.cards[self.write..self.write + tail].copy_from_slice(front);
        self.cards[..wrapped.len()].copy_from_slice(wrapped);
        self.write = (self.write + winnings.len()) % HAND_CAPACITY;
    }

    /// Iterate over held cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        (0..self.len()).map(move |i| self.cards[(self.read + i) % HAND_CAPACITY])
    }

    /// Sum of held card values.
    #[must_use]
    pub fn strength(&self) -> u32 {
        self.iter().map(|c| u32::from(c.value())).sum()
    }
}
