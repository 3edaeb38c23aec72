//! Game rules and the turn state machine.
//!
//! - `Game`: owns the board, talon and seats; runs turns; decides win/loss
//! - `TurnContext`: what a strategy may see and do during its turn
//! - `GameSnapshot`: serializable view for display and reporting

pub mod display;
pub mod game;
pub mod snapshot;
pub mod turn;

pub use game::Game;
pub use snapshot::{GameSnapshot, PileView, SeatView};
pub use turn::TurnContext;
