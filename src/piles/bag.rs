//! Unordered card stores: the talon and the hands.
//!
//! Neither the talon nor a hand has a meaningful order beyond "draw from the
//! end", so removal swaps the last card into the vacated slot. Board piles
//! are a separate type and never expose this operation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Card, PileKind};

/// Inline storage sized for a typical hand; the talon spills to the heap.
type BagStorage = SmallVec<[Card; 8]>;

/// An unordered multiset of cards with a fixed capacity.
///
/// ```
/// use thegame::piles::CardBag;
///
/// let mut hand = CardBag::hand(4);
/// hand.place(10);
/// hand.place(20);
/// hand.place(30);
///
/// // Swap-remove: the last card fills the gap
/// assert_eq!(hand.remove_at(0), 10);
/// assert_eq!(hand.cards(), &[30, 20]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardBag {
    kind: PileKind,
    cards: BagStorage,
    capacity: usize,
}

impl CardBag {
    fn new(kind: PileKind, capacity: usize) -> Self {
        Self {
            kind,
            cards: BagStorage::with_capacity(capacity),
            capacity,
        }
    }

    /// Create an empty talon.
    #[must_use]
    pub fn talon(capacity: usize) -> Self {
        Self::new(PileKind::Talon, capacity)
    }

    /// Create an empty hand.
    #[must_use]
    pub fn hand(capacity: usize) -> Self {
        Self::new(PileKind::Hand, capacity)
    }

    #[must_use]
    pub fn kind(&self) -> PileKind {
        self.kind
    }

    /// Add a card. Panics if the bag is full.
    pub fn place(&mut self, card: Card) {
        assert!(
            self.cards.len() < self.capacity,
            "{} is full ({} cards)",
            self.kind,
            self.capacity
        );
        self.cards.push(card);
    }

    /// Remove and return the last card. Panics if the bag is empty.
    pub fn take(&mut self) -> Card {
        match self.cards.pop() {
            Some(card) => card,
            None => panic!("take from an empty {}", self.kind),
        }
    }

    /// Position of `card`, if present.
    #[must_use]
    pub fn find(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.find(card).is_some()
    }

    /// Remove the card at `index` by swapping the last card into its place.
    ///
    /// Does not preserve the order of the remaining cards.
    pub fn remove_at(&mut self, index: usize) -> Card {
        assert!(
            index < self.cards.len(),
            "index {} out of range for {} of {} cards",
            index,
            self.kind,
            self.cards.len()
        );
        self.cards.swap_remove(index)
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(CardBag::talon(3).kind(), PileKind::Talon);
        assert_eq!(CardBag::hand(3).kind(), PileKind::Hand);
    }

    #[test]
    fn test_take_from_end() {
        let mut talon = CardBag::talon(5);
        talon.place(4);
        talon.place(9);

        assert_eq!(talon.take(), 9);
        assert_eq!(talon.take(), 4);
        assert!(talon.is_empty());
    }

    #[test]
    fn test_find_and_remove() {
        let mut hand = CardBag::hand(6);
        for card in [11, 22, 33, 44] {
            hand.place(card);
        }

        assert_eq!(hand.find(22), Some(1));
        assert_eq!(hand.find(99), None);

        assert_eq!(hand.remove_at(1), 22);
        assert_eq!(hand.cards(), &[11, 44, 33]);
        assert!(!hand.contains(22));

        // Removing the last slot leaves the rest untouched
        assert_eq!(hand.remove_at(2), 33);
        assert_eq!(hand.cards(), &[11, 44]);
    }

    #[test]
    fn test_talon_spills_past_inline_storage() {
        let mut talon = CardBag::talon(40);
        for card in 0..40 {
            talon.place(card);
        }

        assert_eq!(talon.len(), 40);
        assert_eq!(talon.capacity(), 40);
        talon.clear();
        assert!(talon.is_empty());
    }

    #[test]
    #[should_panic(expected = "hand is full")]
    fn test_overfill_panics() {
        let mut hand = CardBag::hand(1);
        hand.place(1);
        hand.place(2);
    }

    #[test]
    #[should_panic(expected = "take from an empty talon")]
    fn test_take_from_empty_panics() {
        CardBag::talon(2).take();
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_remove_out_of_range_panics() {
        let mut hand = CardBag::hand(2);
        hand.place(1);
        hand.remove_at(1);
    }
}
