//! Player hands.
//!
//! Each player holds a bounded FIFO of cards: draw from the front, accept
//! trick winnings at the back. An empty hand draws `Card::EMPTY`.

pub mod buffer;

pub use buffer::{Hand, HAND_CAPACITY};
