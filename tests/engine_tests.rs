//! Game engine tests.
//!
//! These tests play whole games from constructed hands:
//! - One-sided deals that never tie
//! - Exhaustion during a war
//! - Card conservation on real shuffled deals
//! - Reproducibility from a fixed RNG state

use war_sim::cards::{Deck, DECK_SIZE};
use war_sim::core::{Card, GameRng, Seat};
use war_sim::hand::Hand;
use war_sim::rules::{play_game, WarGame};

fn repeat(value: u8, count: usize) -> Vec<Card> {
    vec![Card::new(value); count]
}

/// Thirteen Aces against thirteen Twos: player one takes every trick.
#[test]
fn test_aces_beat_twos() {
    let mut one = Hand::with_cards(&repeat(14, 13));
    let mut two = Hand::with_cards(&repeat(2, 13));
    let mut rng = GameRng::new(42);

    let outcome = play_game(&mut one, &mut two, &mut rng);

    assert_eq!(outcome.winner, Seat::One);
    assert_eq!(outcome.as_indicator(), 0);
    assert_eq!(outcome.tricks, 13);
    assert_eq!(outcome.wars, 0);
    assert!(!two.is_alive());
    assert_eq!(one.len(), 26);
}

/// A full 26/26 deal where player one's card is higher at every position.
#[test]
fn test_no_tie_deal_finishes_in_26_tricks() {
    // Player one: 8, 8, then four each of 9..=Ace.
    let mut first = repeat(8, 2);
    for value in 9..=14 {
        first.extend(repeat(value, 4));
    }
    // Player two: four each of 2..=7, then the other two 8s.
    let mut second = Vec::new();
    for value in 2..=7 {
        second.extend(repeat(value, 4));
    }
    second.extend(repeat(8, 2));

    assert_eq!(first.len(), 26);
    assert_eq!(second.len(), 26);
    for (a, b) in first.iter().zip(&second) {
        assert!(a > b);
    }

    let mut one = Hand::with_cards(&first);
    let mut two = Hand::with_cards(&second);
    let mut rng = GameRng::new(7);
    let mut game = WarGame::new(&mut one, &mut two, &mut rng);

    let mut tricks = 0;
    while let Some(trick) = game.play_trick() {
        tricks += 1;
        assert_eq!(trick.winner, Seat::One);
        assert_eq!(trick.wars, 0);
        assert_eq!(game.cards_in_play(), DECK_SIZE);
    }

    assert!(tricks <= 26);
    let outcome = game.play_to_end();
    assert_eq!(outcome.winner, Seat::One);
    assert_eq!(outcome.tricks, 26);
}

/// Two single-card hands that tie: player one cannot continue the war.
#[test]
fn test_single_card_tie_terminates() {
    let mut one = Hand::with_cards(&[Card::new(7)]);
    let mut two = Hand::with_cards(&[Card::new(7)]);
    let mut rng = GameRng::new(1);

    let outcome = play_game(&mut one, &mut two, &mut rng);

    assert_eq!(outcome.winner, Seat::Two);
    assert_eq!(outcome.as_indicator(), 1);
    assert_eq!(outcome.tricks, 1);
    assert_eq!(two.len(), 2);
}

/// Cards are conserved across every trick of real shuffled deals.
///
/// Sentinels can only join the pile on the final trick, so the check runs
/// while the game is still in progress.
#[test]
fn test_shuffled_deals_conserve_cards() {
    let mut rng = GameRng::from_seeds(100, 200);
    let mut deck = Deck::new();
    let mut one = Hand::new();
    let mut two = Hand::new();

    for _ in 0..50 {
        deck.shuffle(&mut rng);
        let (first, second) = deck.halves();
        one.reset(first);
        two.reset(second);

        let mut game = WarGame::new(&mut one, &mut two, &mut rng);
        while let Some(trick) = game.play_trick() {
            assert!(trick.cards >= 2);
            if !game.is_over() {
                assert_eq!(game.cards_in_play(), DECK_SIZE);
                let strength = game.hand(Seat::One).strength() + game.hand(Seat::Two).strength();
                assert_eq!(strength, 416);
            }
        }
        let outcome = game.play_to_end();
        assert_eq!(outcome.winner == Seat::Two, two.is_alive());
    }
}

/// Same RNG state and same deal always produce the same game.
#[test]
fn test_game_is_reproducible() {
    let mut deck = Deck::new();
    let mut setup = GameRng::new(555);
    deck.shuffle(&mut setup);
    let (first, second) = deck.halves();

    let state = GameRng::from_seeds(1, 2).state();

    let mut results = Vec::new();
    for _ in 0..3 {
        let mut one = Hand::with_cards(first);
        let mut two = Hand::with_cards(second);
        let mut rng = GameRng::from_state(&state);

        let outcome = play_game(&mut one, &mut two, &mut rng);
        let winner_cards: Vec<_> = match outcome.winner {
            Seat::One => one.iter().collect(),
            Seat::Two => two.iter().collect(),
        };
        results.push((outcome, winner_cards, rng.state()));
    }

    assert_eq!(results[0], results[1]);
    assert_eq!(results[1], results[2]);
}

/// Player two's pile is collected sorted; player one's pile keeps its cards.
#[test]
fn test_collection_asymmetry() {
    let mut one = Hand::with_cards(&[Card::new(3), Card::ACE]);
    let mut two = Hand::with_cards(&[Card::new(9), Card::new(4)]);
    let mut rng = GameRng::new(11);
    let mut game = WarGame::new(&mut one, &mut two, &mut rng);

    let trick = game.play_trick().unwrap();
    assert_eq!(trick.winner, Seat::Two);
    assert_eq!(game.last_pile(), &[Card::new(9), Card::new(3)][..]);

    let trick = game.play_trick().unwrap();
    assert_eq!(trick.winner, Seat::One);
    let mut pile = game.last_pile().to_vec();
    pile.sort();
    assert_eq!(pile, vec![Card::new(4), Card::ACE]);
}
