//! # thegame
//!
//! Rule engine and simulator for *The Game*, a cooperative card game.
//!
//! Players share a talon and four (by default) board piles: ascending piles
//! start at the lowest card, descending piles at the highest. On each turn a
//! player must place a minimum number of cards from their hand, each higher
//! than the top of an ascending pile or lower than the top of a descending
//! one, except that a card exactly ten "backwards" is always allowed. The
//! table wins when every card is played and loses as soon as a player cannot
//! make their required moves.
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: The `Game` owns every pile and player. Strategies
//!    receive a `TurnContext` for the acting seat and nothing else.
//!
//! 2. **Contracts Panic, Outcomes Don't**: Illegal placements and misuse of
//!    the API are programming errors and panic. Running out of moves is a
//!    normal `GameState::Lost`.
//!
//! 3. **Injected Randomness**: Shuffling draws from a `RandomSource`, so
//!    games are reproducible from a seed and stream.
//!
//! ## Modules
//!
//! - `core`: Cards, moves, players, state, RNG, configuration
//! - `piles`: Board piles, talon/hand bags, shuffling
//! - `rules`: The game and its turn state machine
//! - `strategy`: Strategy trait and the greedy player
//! - `simulation`: Repeated games and aggregate statistics

pub mod core;
pub mod piles;
pub mod rules;
pub mod simulation;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    Card, ConfigError, GameConfig, GameRng, GameRngState, GameState, GameStats, Move, PileKind,
    Player, PlayerId, RandomSource,
};

pub use crate::piles::{CardBag, Direction, Pile, JUMP_DISTANCE};

pub use crate::rules::{Game, GameSnapshot, PileView, SeatView, TurnContext};

pub use crate::strategy::{from_fn, FnStrategy, Greedy, MoveStrategy};

pub use crate::simulation::{play_to_end, run_simulation, SimulationConfig, SimulationReport};
