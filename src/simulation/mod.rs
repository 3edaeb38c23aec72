//! Repeated automated games and aggregate statistics.
//!
//! ## Usage
//!
//! ```
//! use thegame::simulation::{run_simulation, SimulationConfig};
//!
//! let config = SimulationConfig::new()
//!     .with_games(50)
//!     .with_players(3)
//!     .with_seed(42, 54);
//!
//! let report = run_simulation(&config).unwrap();
//! assert_eq!(report.games, 50);
//! assert!(report.win_rate() <= 1.0);
//! ```

pub mod report;
pub mod runner;

pub use report::SimulationReport;
pub use runner::{play_to_end, run_simulation, SimulationConfig};
