//! Aggregate results of a batch of games.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::GameState;

/// Totals over every game in a simulation run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Games played to the end.
    pub games: u64,

    /// Games won.
    pub wins: u64,

    /// Games lost.
    pub losses: u64,

    /// Seat turns played across all games.
    pub turns: u64,

    /// Jumps played across all games.
    pub jumps: u64,

    /// Number of games by cards left in the talon and hands at the end.
    pub cards_left: FxHashMap<usize, u64>,
}

impl SimulationReport {
    /// Create a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one finished game.
    ///
    /// Panics if `state` is still `Running`.
    pub fn record(&mut self, state: GameState, cards_left: usize) {
        match state {
            GameState::Won => self.wins += 1,
            GameState::Lost => self.losses += 1,
            GameState::Running => panic!("cannot record a game that is still running"),
        }
        self.games += 1;
        *self.cards_left.entry(cards_left).or_insert(0) += 1;
    }

    /// Fraction of games won.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }

    /// Average cards left at the end of a game.
    #[must_use]
    pub fn mean_cards_left(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        let total: u64 = self
            .cards_left
            .iter()
            .map(|(&cards, &count)| cards as u64 * count)
            .sum();
        total as f64 / self.games as f64
    }

    /// Average jumps per game.
    #[must_use]
    pub fn jumps_per_game(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.jumps as f64 / self.games as f64
        }
    }
}
