//! Game configuration.
//!
//! A `GameConfig` fixes the board layout, the card range, the hand size and
//! the per-turn move quotas. It is validated once, when a `Game` is built;
//! nothing in it changes afterwards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::action::Card;

/// Invalid construction parameters.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least one ascending pile is required")]
    NoAscendingPiles,
    #[error("at least one descending pile is required")]
    NoDescendingPiles,
    #[error("min card {min} must be below max card {max}")]
    EmptyCardRange { min: Card, max: Card },
    #[error("hand size must be at least 1")]
    ZeroHandSize,
    #[error("required moves with a full talon must be at least 1")]
    ZeroMovesFull,
    #[error("required moves with an empty talon must be at least 1")]
    ZeroMovesEmpty,
    #[error("player count {0} is outside 1..=255")]
    PlayerCount(usize),
}

/// Complete game configuration.
///
/// The default is the standard game: two ascending piles starting at 1, two
/// descending piles starting at 100, hands of six, two moves per turn while
/// the talon lasts and one afterwards.
///
/// ```
/// use thegame::core::GameConfig;
///
/// let config = GameConfig::default()
///     .with_hand_size(8)
///     .with_card_range(1, 60);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.pile_count(), 4);
/// assert_eq!(config.talon_size(), 58);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of ascending piles (seeded with `min_card`).
    pub ascending_piles: usize,

    /// Number of descending piles (seeded with `max_card`).
    pub descending_piles: usize,

    /// Cards a hand is refilled up to.
    pub hand_size: usize,

    /// Moves required per turn while the talon has cards.
    pub required_moves_full: usize,

    /// Moves required per turn once the talon is empty.
    pub required_moves_empty: usize,

    /// Lowest card; top of every ascending pile at the start.
    pub min_card: Card,

    /// Highest card; top of every descending pile at the start.
    pub max_card: Card,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ascending_piles: 2,
            descending_piles: 2,
            hand_size: 6,
            required_moves_full: 2,
            required_moves_empty: 1,
            min_card: 1,
            max_card: 100,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of ascending and descending piles.
    #[must_use]
    pub fn with_piles(mut self, ascending: usize, descending: usize) -> Self {
        self.ascending_piles = ascending;
        self.descending_piles = descending;
        self
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the move quotas for a full and an empty talon.
    #[must_use]
    pub fn with_required_moves(mut self, full: usize, empty: usize) -> Self {
        self.required_moves_full = full;
        self.required_moves_empty = empty;
        self
    }

    /// Set the card range.
    #[must_use]
    pub fn with_card_range(mut self, min: Card, max: Card) -> Self {
        self.min_card = min;
        self.max_card = max;
        self
    }

    /// Check every construction constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ascending_piles == 0 {
            return Err(ConfigError::NoAscendingPiles);
        }
        if self.descending_piles == 0 {
            return Err(ConfigError::NoDescendingPiles);
        }
        if self.min_card >= self.max_card {
            return Err(ConfigError::EmptyCardRange {
                min: self.min_card,
                max: self.max_card,
            });
        }
        if self.hand_size == 0 {
            return Err(ConfigError::ZeroHandSize);
        }
        if self.required_moves_full == 0 {
            return Err(ConfigError::ZeroMovesFull);
        }
        if self.required_moves_empty == 0 {
            return Err(ConfigError::ZeroMovesEmpty);
        }
        Ok(())
    }

    /// Total number of board piles.
    #[must_use]
    pub fn pile_count(&self) -> usize {
        self.ascending_piles + self.descending_piles
    }

    /// Most cards any board pile or the talon can ever hold.
    ///
    /// Only meaningful for a validated config.
    #[must_use]
    pub fn pile_capacity(&self) -> usize {
        (i64::from(self.max_card) - i64::from(self.min_card)) as usize
    }

    /// Cards in a freshly shuffled talon (the range minus both boundaries).
    #[must_use]
    pub fn talon_size(&self) -> usize {
        self.pile_capacity().saturating_sub(1)
    }

    /// Move quota for a turn, given whether the talon still has cards.
    #[must_use]
    pub fn required_moves(&self, talon_empty: bool) -> usize {
        if talon_empty {
            self.required_moves_empty
        } else {
            self.required_moves_full
        }
    }
}
