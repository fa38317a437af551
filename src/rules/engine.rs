//! Game resolution for War.
//!
//! ## Rules
//!
//! Each trick both players draw one card. Equal cards start a war: while
//! the newest pair is tied and player one still has cards, each player
//! draws a face-down card and a fresh comparison card. The trick goes to
//! player one only if its last card is strictly higher; otherwise player
//! two takes it, including a tie player one could not continue. The whole
//! pile goes to the trick winner, ordered by that seat's
//! `CollectStrategy`.
//!
//! The game ends as soon as either hand is empty. Player two wins if its
//! hand is still alive at that point.
//!
//! An empty hand draws `Card::EMPTY`, which loses every comparison and
//! lands in the pile like any other card. That only happens on the final
//! trick.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Card, GameRng, Seat};
use crate::hand::{Hand, HAND_CAPACITY};

use super::collect::CollectStrategy;

/// Inline pile of cards contested in one trick.
pub type TrickPile = SmallVec<[Card; HAND_CAPACITY]>;

/// Summary of one resolved trick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    /// Seat that collected the pile.
    pub winner: Seat,
    /// Cards in the pile, sentinels included.
    pub cards: usize,
    /// War rounds fought within the trick.
    pub wars: u32,
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Seat still holding cards.
    pub winner: Seat,
    /// Tricks played.
    pub tricks: u32,
    /// War rounds fought across all tricks.
    pub wars: u32,
}

impl GameOutcome {
    /// Did player two win?
    #[must_use]
    pub fn player_two_won(&self) -> bool {
        self.winner == Seat::Two
    }

    /// 1 if player two won, 0 otherwise.
    #[must_use]
    pub fn as_indicator(&self) -> u64 {
        u64::from(self.player_two_won())
    }
}

/// A game in progress between two borrowed hands.
///
/// Hands and RNG belong to the caller so a worker can reuse them across
/// games.
///
/// ```
/// use war_sim::core::{Card, GameRng, Seat};
/// use war_sim::hand::Hand;
/// use war_sim::rules::WarGame;
///
/// let mut one = Hand::with_cards(&[Card::ACE]);
/// let mut two = Hand::with_cards(&[Card::TWO]);
/// let mut rng = GameRng::new(1);
///
/// let mut game = WarGame::new(&mut one, &mut two, &mut rng);
/// let trick = game.play_trick().unwrap();
/// assert_eq!(trick.winner, Seat::One);
/// assert!(game.is_over());
/// ```
pub struct WarGame<'a> {
    one: &'a mut Hand,
    two: &'a mut Hand,
    rng: &'a mut GameRng,
    pile: TrickPile,
    tricks: u32,
    wars: u32,
}

impl<'a> WarGame<'a> {
    /// Start a game with the hands as currently dealt.
    pub fn new(one: &'a mut Hand, two: &'a mut Hand, rng: &'a mut GameRng) -> Self {
        Self {
            one,
            two,
            rng,
            pile: TrickPile::new(),
            tricks: 0,
            wars: 0,
        }
    }

    /// Has either hand run out?
    #[must_use]
    pub fn is_over(&self) -> bool {
        !(self.one.is_alive() && self.two.is_alive())
    }

    /// Get a seat's hand.
    #[must_use]
    pub fn hand(&self, seat: Seat) -> &Hand {
        match seat {
            Seat::One => &*self.one,
            Seat::Two => &*self.two,
        }
    }

    /// Cards held by both hands together.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.one.len() + self.two.len()
    }

    /// Pile from the most recent trick, in the order it was collected.
    #[must_use]
    pub fn last_pile(&self) -> &[Card] {
        &self.pile
    }

    /// Tricks played so far.
    #[must_use]
    pub fn tricks(&self) -> u32 {
        self.tricks
    }

    /// Play one trick, including any war it triggers.
    ///
    /// Returns `None` once the game is over.
    pub fn play_trick(&mut self) -> Option<Trick> {
        if self.is_over() {
            return None;
        }

        self.pile.clear();
        let mut first = self.one.draw();
        let mut second = self.two.draw();
        self.pile.extend_from_slice(&[first, second]);

        let mut wars = 0;
        while first == second && self.one.is_alive() {
            let face_down = [self.one.draw(), self.two.draw()];
            first = self.one.draw();
            second = self.two.draw();
            self.pile.extend_from_slice(&face_down);
            self.pile.extend_from_slice(&[first, second]);
            wars += 1;
        }

        let winner = if first > second { Seat::One } else { Seat::Two };
        CollectStrategy::for_seat(winner).apply(&mut self.pile, self.rng);
        match winner {
            Seat::One => self.one.accept(&self.pile),
            Seat::Two => self.two.accept(&self.pile),
        }

        self.tricks += 1;
        self.wars += wars;

        Some(Trick {
            winner,
            cards: self.pile.len(),
            wars,
        })
    }

    /// Play tricks until one hand is empty.
    pub fn play_to_end(mut self) -> GameOutcome {
        while self.play_trick().is_some() {}

        let winner = if self.two.is_alive() { Seat::Two } else { Seat::One };
        GameOutcome {
            winner,
            tricks: self.tricks,
            wars: self.wars,
        }
    }
}

/// Play a full game between two dealt hands.
pub fn play_game(one: &mut Hand, two: &mut Hand, rng: &mut GameRng) -> GameOutcome {
    WarGame::new(one, two, rng).play_to_end()
}
