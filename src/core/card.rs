//! Card values and seats.
//!
//! ## Card
//!
//! War only compares ranks, so a card is just its value: 2..=10 for pip
//! cards, 11..=14 for Jack, Queen, King and Ace. Suits are not modeled.
//! The value 0 is reserved for the sentinel handed out by an empty hand,
//! which loses every comparison.
//!
//! ## Seat
//!
//! The simulator always plays exactly two hands. `Seat` names which one.

use serde::{Deserialize, Serialize};

/// A card, identified only by its rank value.
///
/// Ordering is by value, so `Card::ACE > Card::KING > ... > Card::TWO >
/// Card::EMPTY`.
///
/// ```
/// use war_sim::core::Card;
///
/// assert!(Card::ACE > Card::KING);
/// assert!(Card::TWO > Card::EMPTY);
/// assert_eq!(Card::new(11), Card::JACK);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card(pub u8);

impl Card {
    /// Sentinel drawn from an empty hand.
    pub const EMPTY: Card = Card(0);
    pub const TWO: Card = Card(2);
    pub const TEN: Card = Card(10);
    pub const JACK: Card = Card(11);
    pub const QUEEN: Card = Card(12);
    pub const KING: Card = Card(13);
    pub const ACE: Card = Card(14);

    /// Lowest real rank value.
    pub const MIN_RANK: u8 = 2;
    /// Highest real rank value (Ace).
    pub const MAX_RANK: u8 = 14;

    /// Create a card from its rank value.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Get the raw rank value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Is this the empty-hand sentinel?
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over every rank from Two to Ace.
    pub fn ranks() -> impl Iterator<Item = Card> {
        (Self::MIN_RANK..=Self::MAX_RANK).map(Card)
    }
}

impl From<u8> for Card {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            0 => write!(f, "-"),
            11 => write!(f, "J"),
            12 => write!(f, "Q"),
            13 => write!(f, "K"),
            14 => write!(f, "A"),
            v => write!(f, "{}", v),
        }
    }
}

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// Player one. Wins a trick only with a strictly higher card.
    One,
    /// Player two. Takes every trick player one does not win outright.
    Two,
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::One => write!(f, "Player 1"),
            Seat::Two => write!(f, "Player 2"),
        }
    }
}
