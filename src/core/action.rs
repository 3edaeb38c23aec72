//! Cards, pile kinds and moves.
//!
//! A card is just its face value. A move places one card from the current
//! player's hand onto one board pile, addressed by index.

use serde::{Deserialize, Serialize};

/// A card, identified only by its value in `[min_card, max_card]`.
pub type Card = i32;

/// The role a pile plays in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    /// Board pile accepting higher cards (or exactly ten lower).
    Ascending,
    /// Board pile accepting lower cards (or exactly ten higher).
    Descending,
    /// Shared face-down draw stock.
    Talon,
    /// A player's hand.
    Hand,
}

impl std::fmt::Display for PileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PileKind::Ascending => "ascending",
            PileKind::Descending => "descending",
            PileKind::Talon => "talon",
            PileKind::Hand => "hand",
        };
        f.write_str(name)
    }
}

/// A proposed placement of one card from a hand onto a board pile.
///
/// ## Example
///
/// ```
/// use thegame::core::Move;
///
/// let mv = Move::new(2, 37);
/// assert_eq!(mv.pile, 2);
/// assert_eq!(mv.card, 37);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Index of the target board pile.
    pub pile: usize,

    /// The card to place. Must be in the acting player's hand.
    pub card: Card,
}

impl Move {
    /// Create a new move.
    #[must_use]
    pub const fn new(pile: usize, card: Card) -> Self {
        Self { pile, card }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> pile {}", self.card, self.pile)
    }
}
