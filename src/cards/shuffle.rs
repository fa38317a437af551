//! Fisher-Yates shuffle driven by a `GameRng`.

use crate::core::GameRng;

/// Shuffle a slice in place.
///
/// Walks `n` down from the slice length to 1, swapping slot `n - 1` with a
/// uniformly drawn slot in `[0, n)`. Every permutation is equally likely
/// given a uniform RNG. Empty and single-element slices are left as is,
/// though the single-element case still consumes one draw.
pub fn shuffle<T>(items: &mut [T], rng: &mut GameRng) {
    for n in (1..=items.len()).rev() {
        let j = rng.gen_index(n);
        items.swap(n - 1, j);
    }
}
