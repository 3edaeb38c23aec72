//! Core engine types: cards, moves, players, state, RNG, configuration.
//!
//! These are the building blocks shared by the piles, the rules and the
//! strategies.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Card, Move, PileKind};
pub use config::{ConfigError, GameConfig};
pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use state::{GameState, GameStats};
