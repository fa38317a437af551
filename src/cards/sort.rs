//! Descending insertion sort for trick piles.
//!
//! Trick piles never exceed a hand's capacity, so a quadratic insertion
//! sort beats the general-purpose library sort at this size.

/// Sort a slice from largest to smallest, in place.
///
/// Stable: equal elements keep their relative order.
pub fn sort_descending<T: Ord>(items: &mut [T]) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && items[j] > items[j - 1] {
            items.swap(j, j - 1);
            j -= 1;
        }
    }
}
