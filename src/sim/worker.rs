//! A single simulation worker.
//!
//! A worker owns everything a game touches: its RNG, one deck and two
//! hands. All of it is built once and reused for every game the worker
//! plays.

use serde::{Deserialize, Serialize};

use crate::cards::Deck;
use crate::core::{GameRng, SeedPair};
use crate::hand::Hand;
use crate::rules::{play_game, GameOutcome};

/// Totals accumulated by one worker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerTally {
    /// Games played.
    pub games: u64,
    /// Games won by player two.
    pub wins: u64,
    /// Tricks played across all games.
    pub tricks: u64,
    /// War rounds fought across all games.
    pub wars: u64,
}

impl WorkerTally {
    /// Add another tally into this one.
    pub fn merge(&mut self, other: &WorkerTally) {
        self.games += other.games;
        self.wins += other.wins;
        self.tricks += other.tricks;
        self.wars += other.wars;
    }

    /// Count one finished game.
    pub fn record(&mut self, outcome: &GameOutcome) {
        self.games += 1;
        self.wins += outcome.as_indicator();
        self.tricks += u64::from(outcome.tricks);
        self.wars += u64::from(outcome.wars);
    }
}

/// Worker for running games sequentially.
#[derive(Clone, Debug)]
pub struct Worker {
    rng: GameRng,
    deck: Deck,
    one: Hand,
    two: Hand,
}

impl Worker {
    /// Create a worker seeded with `seeds`.
    pub fn new(seeds: SeedPair) -> Self {
        Self {
            rng: GameRng::from_pair(seeds),
            deck: Deck::new(),
            one: Hand::new(),
            two: Hand::new(),
        }
    }

    /// Shuffle, deal and play one game.
    pub fn play_one(&mut self) -> GameOutcome {
        self.deck.shuffle(&mut self.rng);
        let (first, second) = self.deck.halves();
        self.one.reset(first);
        self.two.reset(second);

        play_game(&mut self.one, &mut self.two, &mut self.rng)
    }

    /// Play `games` games and return the totals.
    pub fn play(&mut self, games: u64) -> WorkerTally {
        let mut tally = WorkerTally::default();
        for _ in 0..games {
            let outcome = self.play_one();
            tally.record(&outcome);
        }
        tally
    }
}

/// Play `games` games on a fresh worker.
pub fn run_worker(games: u64, seeds: SeedPair) -> WorkerTally {
    Worker::new(seeds).play(games)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_games() {
        let tally = run_worker(0, SeedPair::new(1, 2));
        assert_eq!(tally, WorkerTally::default());
    }

    #[test]
    fn test_tally_counts() {
        let tally = run_worker(200, SeedPair::new(5, 6));

        assert_eq!(tally.games, 200);
        assert!(tally.wins <= 200);
        assert!(tally.tricks >= tally.games);
    }

    #[test]
    fn test_same_seeds_same_tally() {
        let a = run_worker(100, SeedPair::new(11, 12));
        let b = run_worker(100, SeedPair::new(11, 12));
        assert_eq!(a, b);
    }

    #[test]
    fn test_play_one_matches_play() {
        let seeds = SeedPair::new(21, 22);

        let mut stepped = Worker::new(seeds);
        let outcomes: Vec<_> = (0..50).map(|_| stepped.play_one()).collect();
        let wins: u64 = outcomes.iter().map(GameOutcome::as_indicator).sum();

        let batched = Worker::new(seeds).play(50);
        assert_eq!(wins, batched.wins);
        assert_eq!(
            outcomes.iter().map(|o| u64::from(o.tricks)).sum::<u64>(),
            batched.tricks
        );
    }

    #[test]
    fn test_play_one_returns_outcome() {
        let mut worker = Worker::new(SeedPair::new(3, 4));
        let outcome = worker.play_one();

        assert!(outcome.tricks >= 1);
        assert_eq!(outcome.as_indicator(), u64::from(outcome.player_two_won()));
    }

    #[test]
    fn test_record() {
        let mut tally = WorkerTally::default();
        let mut worker = Worker::new(SeedPair::new(8, 9));
        let outcome = worker.play_one();

        tally.record(&outcome);
        tally.record(&outcome);

        assert_eq!(tally.games, 2);
        assert_eq!(tally.wins, 2 * outcome.as_indicator());
        assert_eq!(tally.tricks, 2 * u64::from(outcome.tricks));
        assert_eq!(tally.wars, 2 * u64::from(outcome.wars));
    }

    #[test]
    fn test_merge() {
        let mut total = WorkerTally { games: 1, wins: 1, tricks: 30, wars: 2 };
        total.merge(&WorkerTally { games: 2, wins: 0, tricks: 70, wars: 5 });
        assert_eq!(total, WorkerTally { games: 3, wins: 1, tricks: 100, wars: 7 });
    }
}
