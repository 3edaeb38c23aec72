//! Serializable read-only view of a game for display and reporting layers.

use serde::{Deserialize, Serialize};

use crate::core::{Card, GameState, GameStats, PileKind, PlayerId};

use super::Game;

/// One board pile as seen from outside.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileView {
    pub kind: PileKind,
    pub top: Option<Card>,
    pub len: usize,
}

/// One seat and the cards it still holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub id: PlayerId,
    pub name: String,
    pub hand: Vec<Card>,
}

/// Everything a display or report needs, detached from the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub piles: Vec<PileView>,
    pub current_player: Option<PlayerId>,
    pub current_hand: Vec<Card>,
    pub talon_len: usize,
    pub state: GameState,
    pub seats: Vec<SeatView>,
    pub stats: GameStats,
}

impl GameSnapshot {
    /// Seats still holding cards; on a loss these are the leftover hands.
    pub fn seats_with_cards(&self) -> impl Iterator<Item = &SeatView> {
        self.seats.iter().filter(|seat| !seat.hand.is_empty())
    }
}

impl Game {
    /// Capture the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let piles = self
            .piles()
            .iter()
            .map(|pile| PileView {
                kind: pile.kind(),
                top: pile.peek(),
                len: pile.len(),
            })
            .collect();

        let seats = self
            .players()
            .iter()
            .zip(PlayerId::all(self.players().len()))
            .map(|(player, id)| SeatView {
                id,
                name: player.name().to_string(),
                hand: player.hand().cards().to_vec(),
            })
            .collect();

        GameSnapshot {
            piles,
            current_player: (!self.players().is_empty()).then(|| self.current_player()),
            current_hand: self.current_hand().to_vec(),
            talon_len: self.talon().len(),
            state: self.state(),
            seats,
            stats: self.stats().clone(),
        }
    }
}
