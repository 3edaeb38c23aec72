//! Card storage.
//!
//! ## Key Types
//!
//! - `Pile`: Ordered board pile with the ascending/descending placement rule
//! - `CardBag`: Unordered talon or hand with swap-removal
//! - `deck`: Talon construction and shuffling

pub mod bag;
pub mod deck;
pub mod pile;

pub use bag::CardBag;
pub use deck::{fill_talon, shuffle_cards};
pub use pile::{Direction, Pile, JUMP_DISTANCE};
