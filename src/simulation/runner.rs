//! Batch runner for repeated greedy games.
//!
//! One table is built once and reset between games, drawing every shuffle
//! from a single seeded RNG, so a run is reproducible from its config.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, GameConfig, GameRng, GameState};
use crate::rules::Game;

use super::report::SimulationReport;

/// Configuration for a simulation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of games to play.
    pub games: u64,

    /// Greedy players at the table.
    pub players: usize,

    /// RNG seed.
    pub seed: u64,

    /// RNG stream selector.
    pub stream: u64,

    /// Rules for every game.
    pub game: GameConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 1000,
            players: 1,
            seed: 42,
            stream: 54,
            game: GameConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Create a new simulation config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    #[must_use]
    pub fn with_games(mut self, games: u64) -> Self {
        self.games = games;
        self
    }

    /// Set the number of players.
    #[must_use]
    pub fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Set the RNG seed and stream.
    #[must_use]
    pub fn with_seed(mut self, seed: u64, stream: u64) -> Self {
        self.seed = seed;
        self.stream = stream;
        self
    }

    /// Set the game rules.
    #[must_use]
    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    /// Check the player count and the game rules.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=255).contains(&self.players) {
            return Err(ConfigError::PlayerCount(self.players));
        }
        self.game.validate()
    }
}

/// Run `play_turn` until the game is decided.
pub fn play_to_end(game: &mut Game) -> GameState {
    while !game.state().is_terminal() {
        game.play_turn();
    }
    game.state()
}

/// Play `config.games` games with greedy players and total the results.
pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationReport, ConfigError> {
    config.validate()?;

    let mut rng = GameRng::with_stream(config.seed, config.stream);
    let mut game = Game::new(config.game.clone(), &mut rng)?;
    for _ in 0..config.players {
        game.add_default_player();
    }

    let mut report = SimulationReport::new();
    for index in 0..config.games {
        if index > 0 {
            game.reset_game(&mut rng);
        }
        let state = play_to_end(&mut game);
        debug!("game {}: {} with {} cards left", index + 1, state, game.cards_remaining());
        report.record(state, game.cards_remaining());
    }
    report.turns = game.stats().turns;
    report.jumps = game.jump_count();

    info!(
        "{} games, {} won ({:.1}%), {:.2} cards left on average, {:.2} jumps per game",
        report.games,
        report.wins,
        report.win_rate() * 100.0,
        report.mean_cards_left(),
        report.jumps_per_game()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.games, 1000);
        assert_eq!(config.players, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SimulationConfig::new()
            .with_games(10)
            .with_players(3)
            .with_seed(7, 9)
            .with_game(GameConfig::default().with_hand_size(7));

        assert_eq!(config.games, 10);
        assert_eq!(config.players, 3);
        assert_eq!((config.seed, config.stream), (7, 9));
        assert_eq!(config.game.hand_size, 7);
    }

    #[test]
    fn test_validate_player_count() {
        assert_eq!(
            SimulationConfig::new().with_players(0).validate(),
            Err(ConfigError::PlayerCount(0))
        );
        assert_eq!(
            SimulationConfig::new().with_players(256).validate(),
            Err(ConfigError::PlayerCount(256))
        );
        assert_eq!(
            SimulationConfig::new()
                .with_game(GameConfig::default().with_piles(0, 1))
                .validate(),
            Err(ConfigError::NoAscendingPiles)
        );
    }

    #[test]
    fn test_run_counts_every_game() {
        let config = SimulationConfig::new().with_games(25).with_players(2);
        let report = run_simulation(&config).unwrap();

        assert_eq!(report.games, 25);
        assert_eq!(report.wins + report.losses, 25);
        assert_eq!(report.cards_left.values().sum::<u64>(), 25);
        assert!(report.turns > 0);
        assert_eq!(report.jumps_per_game(), report.jumps as f64 / 25.0);
    }

    #[test]
    fn test_run_is_reproducible() {
        let config = SimulationConfig::new().with_games(20).with_seed(3, 4);

        assert_eq!(
            run_simulation(&config).unwrap(),
            run_simulation(&config).unwrap()
        );
    }

    #[test]
    fn test_serialization() {
        let config = SimulationConfig::new().with_players(4);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
