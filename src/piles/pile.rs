//! Ordered board piles.
//!
//! A board pile only ever grows at the top, and only its top card matters
//! for legality:
//! - Ascending: a card is legal if it is higher than the top, or exactly ten
//!   lower (the jump back)
//! - Descending: a card is legal if it is lower than the top, or exactly ten
//!   higher
//!
//! Any card is legal on an empty pile.

use serde::{Deserialize, Serialize};

use crate::core::{Card, PileKind};

/// Distance of the jump that reverses a pile's direction.
pub const JUMP_DISTANCE: Card = 10;

/// Direction a board pile runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// The matching pile kind.
    #[must_use]
    pub const fn kind(self) -> PileKind {
        match self {
            Direction::Ascending => PileKind::Ascending,
            Direction::Descending => PileKind::Descending,
        }
    }
}

/// An ordered, append-only board pile.
///
/// ```
/// use thegame::piles::{Direction, Pile};
///
/// let mut pile = Pile::seeded(Direction::Ascending, 1, 99);
/// assert!(pile.can_place(5));
/// pile.place(5);
///
/// assert_eq!(pile.top(), 5);
/// assert!(!pile.can_place(4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    direction: Direction,
    cards: Vec<Card>,
    capacity: usize,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new(direction: Direction, capacity: usize) -> Self {
        Self {
            direction,
            cards: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Create a pile holding a single starting card.
    #[must_use]
    pub fn seeded(direction: Direction, seed: Card, capacity: usize) -> Self {
        let mut pile = Self::new(direction, capacity);
        pile.place(seed);
        pile
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn kind(&self) -> PileKind {
        self.direction.kind()
    }

    /// The top card.
    ///
    /// Panics if the pile is empty.
    #[must_use]
    pub fn top(&self) -> Card {
        match self.cards.last() {
            Some(&card) => card,
            None => panic!("top of an empty {} pile", self.kind()),
        }
    }

    /// The top card, or `None` for an empty pile.
    #[must_use]
    pub fn peek(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Check whether `card` may be placed on this pile.
    #[must_use]
    pub fn can_place(&self, card: Card) -> bool {
        let Some(top) = self.peek() else {
            return true;
        };
        let forward = match self.direction {
            Direction::Ascending => card > top,
            Direction::Descending => card < top,
        };
        forward || self.is_jump(card)
    }

    /// Check whether placing `card` would be a jump back by exactly ten.
    ///
    /// A top within ten of the `Card` bounds has no jump target.
    #[must_use]
    pub fn is_jump(&self, card: Card) -> bool {
        let target = match (self.peek(), self.direction) {
            (Some(top), Direction::Ascending) => top.checked_sub(JUMP_DISTANCE),
            (Some(top), Direction::Descending) => top.checked_add(JUMP_DISTANCE),
            (None, _) => None,
        };
        target == Some(card)
    }

    /// How much of the pile's remaining range placing `card` would use up.
    ///
    /// Jumps have negative cost. Panics if the pile is empty.
    #[must_use]
    pub fn cost(&self, card: Card) -> Card {
        match self.direction {
            Direction::Ascending => card - self.top(),
            Direction::Descending => self.top() - card,
        }
    }

    /// Place a card on top.
    ///
    /// Callers must check `can_place` first; placing an illegal card or
    /// overfilling the pile panics.
    pub fn place(&mut self, card: Card) {
        assert!(
            self.can_place(card),
            "illegal placement of {} on {} pile with top {:?}",
            card,
            self.kind(),
            self.peek()
        );
        assert!(
            self.cards.len() < self.capacity,
            "{} pile is full ({} cards)",
            self.kind(),
            self.capacity
        );
        self.cards.push(card);
    }

    /// Remove and return the top card.
    ///
    /// Panics if the pile is empty.
    pub fn take(&mut self) -> Card {
        match self.cards.pop() {
            Some(card) => card,
            None => panic!("take from an empty {} pile", self.kind()),
        }
    }

    /// Position of `card` in the pile, bottom first.
    #[must_use]
    pub fn find(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.find(card).is_some()
    }

    /// Drop everything above the starting card.
    pub(crate) fn reset_to_seed(&mut self) {
        self.cards.truncate(1);
    }

    /// All cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
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
