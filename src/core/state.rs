//! Game outcome state and cumulative counters.
//!
//! ## GameState
//!
//! `Running` until the turn loop decides the game:
//! - `Won`: every seat ran out of cards
//! - `Lost`: a seat still holding cards missed its move quota
//!
//! Both terminal states are final until the game is reset.
//!
//! ## GameStats
//!
//! Counters that survive `reset_game`, so a driver running many trials on one
//! `Game` can report totals.

use serde::{Deserialize, Serialize};

/// Lifecycle of a single game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Turns are still being played.
    #[default]
    Running,
    /// All cards were played.
    Won,
    /// A player could not make the required number of moves.
    Lost,
}

impl GameState {
    /// Check if the game has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameState::Running)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameState::Running => "running",
            GameState::Won => "won",
            GameState::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// Cumulative statistics across every game played on one `Game`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    /// Games dealt (construction plus each reset).
    pub games: u64,

    /// Seat turns in which a strategy was invoked.
    pub turns: u64,

    /// Cards placed on board piles.
    pub moves: u64,

    /// Placements that used the exactly-ten jump back.
    pub jumps: u64,
}
