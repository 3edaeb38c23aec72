//! Building and shuffling the talon.
//!
//! The talon holds every card strictly between `min_card` and `max_card`;
//! the two boundary values start on the board as pile seeds.

use crate::core::{Card, RandomSource};

use super::CardBag;

/// Shuffle `cards` in place.
///
/// Walks the slice once, swapping each position with a uniformly chosen
/// position anywhere in the slice.
pub fn shuffle_cards<R: RandomSource + ?Sized>(cards: &mut [Card], rng: &mut R) {
    let n = cards.len();
    if n == 0 {
        return;
    }
    let bound = u32::try_from(n).unwrap_or_else(|_| panic!("cannot shuffle {} cards", n));
    for i in 0..n {
        let j = rng.next_bounded_u32(bound) as usize;
        cards.swap(i, j);
    }
}

/// Refill `talon` with the open range `(min_card, max_card)` and shuffle it.
///
/// Any cards already in the talon are discarded.
pub fn fill_talon<R: RandomSource + ?Sized>(
    talon: &mut CardBag,
    min_card: Card,
    max_card: Card,
    rng: &mut R,
) {
    talon.clear();
    for card in (min_card + 1)..max_card {
        talon.place(card);
    }
    shuffle_cards(talon.cards_mut(), rng);
}
