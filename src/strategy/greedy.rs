//! Greedy move selection.
//!
//! The cost of a move is how much of the pile's range it uses up: `card - top`
//! on an ascending pile, `top - card` on a descending one. Jumps cost -10.
//!
//! Each turn:
//! 1. Play every move with cost <= 0, cheapest first
//! 2. Stop if the move quota is met
//! 3. Otherwise play the single cheapest legal move and go back to 1;
//!    stop if there is none
//!
//! Ties go to the lowest pile index, then the lowest hand slot. The
//! heuristic never looks past the current turn.

use crate::core::{Card, Move};
use crate::rules::TurnContext;

use super::MoveStrategy;

/// The built-in automated player.
#[derive(Clone, Copy, Debug, Default)]
pub struct Greedy;

impl Greedy {
    /// Cheapest legal move and its cost, first found on ties.
    #[must_use]
    pub fn best_move(turn: &TurnContext<'_>) -> Option<(Move, Card)> {
        let mut best: Option<(Move, Card)> = None;
        for mv in turn.legal_moves() {
            let cost = turn.move_cost(mv);
            if best.map_or(true, |(_, best_cost)| cost < best_cost) {
                best = Some((mv, cost));
            }
        }
        best
    }
}

impl MoveStrategy for Greedy {
    fn play_turn(&self, turn: &mut TurnContext<'_>) {
        loop {
            while let Some((mv, cost)) = Self::best_move(turn) {
                if cost > 0 {
                    break;
                }
                turn.apply_move(mv);
            }

            if turn.has_enough_moves() {
                return;
            }

            match Self::best_move(turn) {
                Some((mv, _)) => turn.apply_move(mv),
                None => return,
            }
        }
    }

    fn name(&self) -> &str {
        "greedy"
    }
}
