//! Process-wide seed generation.
//!
//! A `SeedSource` is the only randomness shared between workers. The
//! orchestrator owns it and hands each worker a `SeedPair` before the worker
//! starts; after that the worker never looks at it again.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Two seed words for one worker's `GameRng`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeedPair {
    pub first: u64,
    pub second: u64,
}

impl SeedPair {
    #[must_use]
    pub const fn new(first: u64, second: u64) -> Self {
        Self { first, second }
    }
}

/// Generator of per-worker seed pairs.
///
/// `from_time` gives a different stream on every run; `new` gives a fixed
/// stream for reproducible simulations.
#[derive(Clone, Debug)]
pub struct SeedSource {
    inner: ChaCha8Rng,
}

impl SeedSource {
    /// Create a seed source with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a seed source from the wall clock.
    #[must_use]
    pub fn from_time() -> Self {
        // A clock before the epoch still yields a usable, if fixed, seed.
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() ^ u64::from(d.subsec_nanos()).rotate_left(32))
            .unwrap_or_default();
        Self::new(seed)
    }

    /// Draw the two seed words for the next worker.
    pub fn next_pair(&mut self) -> SeedPair {
        SeedPair::new(self.inner.gen(), self.inner.gen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let mut a = SeedSource::new(2024);
        let mut b = SeedSource::new(2024);

        for _ in 0..8 {
            assert_eq!(a.next_pair(), b.next_pair());
        }
    }

    #[test]
    fn test_pairs_are_distinct() {
        let mut source = SeedSource::new(1);
        let pairs: Vec<_> = (0..16).map(|_| source.next_pair()).collect();

        for (i, a) in pairs.iter().enumerate() {
            assert_ne!(a.first, a.second);
            for b in &pairs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_from_time_produces_pairs() {
        let mut source = SeedSource::from_time();
        let pair = source.next_pair();
        assert_ne!(pair, source.next_pair());
    }
}
