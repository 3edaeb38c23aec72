//! Plain-text rendering of the board and the current player's hand.

use std::fmt;

use crate::piles::Direction;

use super::Game;

impl fmt::Display for Game {
    /// ```text
    ///   1   1 100 100
    ///  ^   ^   v   v
    /// Player 0's card(s): [12 57 3]
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pile in self.piles() {
            match pile.peek() {
                Some(top) => write!(f, "{:>3} ", top)?,
                None => f.write_str("  - ")?,
            }
        }
        writeln!(f)?;

        for pile in self.piles() {
            let marker = match pile.direction() {
                Direction::Ascending => " ^  ",
                Direction::Descending => " v  ",
            };
            f.write_str(marker)?;
        }
        writeln!(f)?;

        if self.players().is_empty() {
            return Ok(());
        }
        let hand = self
            .current_hand()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(f, "Player {}'s card(s): [{}]", self.current_player().0, hand)
    }
}
