//! Move selection strategies.
//!
//! A strategy plays one whole turn: given a `TurnContext`, it applies zero
//! or more moves and returns. The game then checks the move quota.
//!
//! - `Greedy`: the built-in automated player
//! - `from_fn`: wrap a closure, e.g. for a human-driven or experimental player

pub mod greedy;

pub use greedy::Greedy;

use crate::rules::TurnContext;

/// Chooses and applies the moves for a seat's turn.
pub trait MoveStrategy {
    /// Apply this turn's moves through `turn`.
    ///
    /// Must return once no legal move is left.
    fn play_turn(&self, turn: &mut TurnContext<'_>);

    /// Short name for logs and debugging.
    fn name(&self) -> &str {
        "custom"
    }
}

/// A strategy backed by a closure.
pub struct FnStrategy<F> {
    name: &'static str,
    play: F,
}

impl<F> FnStrategy<F>
where
    F: Fn(&mut TurnContext<'_>),
{
    /// Rename the strategy.
    #[must_use]
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

impl<F> MoveStrategy for FnStrategy<F>
where
    F: Fn(&mut TurnContext<'_>),
{
    fn play_turn(&self, turn: &mut TurnContext<'_>) {
        (self.play)(turn);
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// Build a strategy from a closure.
///
/// ```
/// use thegame::core::{GameConfig, GameRng};
/// use thegame::rules::{Game, TurnContext};
/// use thegame::strategy::from_fn;
///
/// // Plays the first legal move it finds until the quota is met.
/// let eager = from_fn(|turn: &mut TurnContext<'_>| {
///     while !turn.has_enough_moves() {
///         let Some(mv) = turn.legal_moves().next() else { return };
///         turn.apply_move(mv);
///     }
/// });
///
/// let mut game = Game::new(GameConfig::default(), &mut GameRng::new(1)).unwrap();
/// game.add_player("Eager", eager.named("eager"));
/// assert_eq!(game.players()[0].strategy_name(), "eager");
/// ```
pub fn from_fn<F>(play: F) -> FnStrategy<F>
where
    F: Fn(&mut TurnContext<'_>),
{
    FnStrategy {
        name: "custom",
        play,
    }
}
