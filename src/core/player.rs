//! Player identification and seats.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier supporting 1-255 players.
//!
//! ## Player
//!
//! A seat at the table: a name, a hand, and the strategy that chooses the
//! seat's moves. Players are owned by their `Game` and hold no reference
//! back to it.

use serde::{Deserialize, Serialize};

use crate::piles::CardBag;
use crate::strategy::MoveStrategy;

/// Seat identifier supporting 1-255 players.
///
/// Seat indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use thegame::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        assert!(player_count <= 255, "At most 255 players supported");
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seat: name, hand and move-selection strategy.
pub struct Player {
    pub(crate) name: String,
    pub(crate) hand: CardBag,
    pub(crate) strategy: Box<dyn MoveStrategy>,
}

impl Player {
    /// Create a player with an empty hand of the given capacity.
    pub(crate) fn new(name: String, hand_size: usize, strategy: Box<dyn MoveStrategy>) -> Self {
        Self {
            name,
            hand: CardBag::hand(hand_size),
            strategy,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's hand.
    #[must_use]
    pub fn hand(&self) -> &CardBag {
        &self.hand
    }

    /// Name of the installed strategy.
    #[must_use]
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Check if the player has played out every card.
    #[must_use]
    pub fn is_out(&self) -> bool {
        self.hand.is_empty()
    }

    /// Draw from the talon until the hand holds `hand_size` cards or the
    /// talon runs dry.
    ///
    /// Returns the number of cards drawn.
    pub(crate) fn refill(&mut self, talon: &mut CardBag, hand_size: usize) -> usize {
        let mut drawn = 0;
        while self.hand.len() < hand_size && !talon.is_empty() {
            self.hand.place(talon.take());
            drawn += 1;
        }
        drawn
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("hand", &self.hand)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
