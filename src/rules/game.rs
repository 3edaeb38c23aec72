//! The game: board, talon, seats and the turn loop.
//!
//! ## Turn loop
//!
//! `play_turn` walks the seats starting at the current player:
//! - A seat with cards runs its strategy, must meet the move quota (or the
//!   game is lost), and is refilled from the talon
//! - A seat without cards is skipped
//! - The call returns after the first seat that still holds cards, or with
//!   `Won` once every seat up to and including the one before the starting
//!   seat is out of cards
//!
//! ## Ownership
//!
//! The game owns every pile and player. Strategies see the game only through
//! a `TurnContext` built for the acting seat.

use log::{debug, info};

use crate::core::{
    Card, ConfigError, GameConfig, GameState, GameStats, Move, Player, PlayerId, RandomSource,
};
use crate::piles::{fill_talon, CardBag, Direction, Pile};
use crate::strategy::{Greedy, MoveStrategy};

use super::turn::{place_from_hand, TurnContext};

/// A game of The Game.
///
/// ```
/// use thegame::core::{GameConfig, GameRng, GameState};
/// use thegame::rules::Game;
///
/// let mut rng = GameRng::new(42);
/// let mut game = Game::new(GameConfig::default(), &mut rng).unwrap();
/// game.add_default_player();
/// game.add_default_player();
///
/// while game.state() == GameState::Running {
///     game.play_turn();
/// }
/// assert!(game.state().is_terminal());
/// ```
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    piles: Vec<Pile>,
    talon: CardBag,
    players: Vec<Player>,
    current: usize,
    moves_this_turn: usize,
    state: GameState,
    stats: GameStats,
}

impl Game {
    /// Deal a new game: seed the board piles and shuffle the talon.
    ///
    /// Players are added afterwards with `add_player`.
    pub fn new<R: RandomSource + ?Sized>(
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let capacity = config.pile_capacity();
        let ascending = (0..config.ascending_piles)
            .map(|_| Pile::seeded(Direction::Ascending, config.min_card, capacity));
        let descending = (0..config.descending_piles)
            .map(|_| Pile::seeded(Direction::Descending, config.max_card, capacity));
        let piles = ascending.chain(descending).collect();

        let mut talon = CardBag::talon(capacity);
        fill_talon(&mut talon, config.min_card, config.max_card, rng);

        let stats = GameStats {
            games: 1,
            ..GameStats::default()
        };

        Ok(Self {
            config,
            piles,
            talon,
            players: Vec::new(),
            current: 0,
            moves_this_turn: 0,
            state: GameState::Running,
            stats,
        })
    }

    /// Seat a new player and deal their hand.
    ///
    /// Panics if the table already has 255 players.
    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        strategy: impl MoveStrategy + 'static,
    ) -> PlayerId {
        assert!(self.players.len() < 255, "At most 255 players supported");

        let id = PlayerId::new(self.players.len() as u8);
        let mut player = Player::new(name.into(), self.config.hand_size, Box::new(strategy));
        player.refill(&mut self.talon, self.config.hand_size);
        debug!("{} ({}) joins with {} cards", id, player.name, player.hand.len());

        self.players.push(player);
        id
    }

    /// Seat a greedy player named after its seat.
    ///
    /// Panics if the table already has 255 players.
    pub fn add_default_player(&mut self) -> PlayerId {
        assert!(self.players.len() < 255, "At most 255 players supported");
        let name = PlayerId::new(self.players.len() as u8).to_string();
        self.add_player(name, Greedy)
    }

    /// Deal a fresh game on the same table.
    ///
    /// Board piles go back to their starting card, the talon is rebuilt and
    /// reshuffled from `rng`, hands are redealt in seat order, and play
    /// restarts at seat 0. Cumulative stats are kept.
    pub fn reset_game<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        for pile in &mut self.piles {
            pile.reset_to_seed();
        }
        fill_talon(&mut self.talon, self.config.min_card, self.config.max_card, rng);

        let hand_size = self.config.hand_size;
        for player in &mut self.players {
            player.hand.clear();
            player.refill(&mut self.talon, hand_size);
        }

        self.current = 0;
        self.moves_this_turn = 0;
        self.state = GameState::Running;
        self.stats.games += 1;
        debug!("game {} dealt, {} cards in talon", self.stats.games, self.talon.len());
    }

    /// Play `mv` for `player` outside of a strategy call.
    ///
    /// Panics unless `player` is the current player, the pile exists, the
    /// card is in the player's hand and the placement is legal.
    pub fn apply_move(&mut self, player: PlayerId, mv: Move) {
        assert!(
            player.index() == self.current && player.index() < self.players.len(),
            "{} is not the current player",
            player
        );
        place_from_hand(
            player,
            &mut self.piles,
            &mut self.players[self.current].hand,
            mv,
            &mut self.moves_this_turn,
            &mut self.stats,
        );
    }

    /// Check if the current turn has met its move quota.
    #[must_use]
    pub fn has_enough_moves(&self) -> bool {
        self.moves_this_turn >= self.required_moves()
    }

    /// Move quota for a turn started now.
    #[must_use]
    pub fn required_moves(&self) -> usize {
        self.config.required_moves(self.talon.is_empty())
    }

    /// Advance play until a seat holding cards has finished its turn, or the
    /// game is decided.
    ///
    /// Panics if the game is already over or has no players.
    pub fn play_turn(&mut self) -> GameState {
        assert!(
            !self.state.is_terminal(),
            "play_turn called on a finished game ({})",
            self.state
        );
        assert!(!self.players.is_empty(), "play_turn called with no players");

        let first = self.current;
        let hand_size = self.config.hand_size;

        loop {
            let seat = self.current;
            let id = PlayerId::new(seat as u8);
            let player = &mut self.players[seat];
            debug_assert!(
                player.hand.len() == hand_size || self.talon.is_empty(),
                "{} holds {} cards with {} left in the talon",
                id,
                player.hand.len(),
                self.talon.len()
            );

            self.moves_this_turn = 0;
            if !player.is_out() {
                self.stats.turns += 1;
                let mut turn = TurnContext::new(
                    id,
                    &mut self.piles,
                    &mut player.hand,
                    self.talon.len(),
                    &self.config,
                    &mut self.moves_this_turn,
                    &mut self.stats,
                );
                player.strategy.play_turn(&mut turn);

                let required = self.config.required_moves(self.talon.is_empty());
                if !player.is_out() && self.moves_this_turn < required {
                    self.state = GameState::Lost;
                    info!(
                        "{} made {} of {} required moves, game lost with {} cards left",
                        id,
                        self.moves_this_turn,
                        required,
                        self.cards_remaining()
                    );
                    return self.state;
                }

                let drawn = player.refill(&mut self.talon, hand_size);
                debug!(
                    "{} made {} moves, drew {}, talon {}",
                    id,
                    self.moves_this_turn,
                    drawn,
                    self.talon.len()
                );
            }

            let out = player.is_out();
            self.current = (seat + 1) % self.players.len();

            if !out {
                return self.state;
            }
            if self.current == first {
                self.state = GameState::Won;
                info!("all cards played, game won");
                return self.state;
            }
        }
    }

    // === Inspection ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Board piles: ascending ones first, then descending.
    #[must_use]
    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    /// Top card of every board pile, in pile order.
    #[must_use]
    pub fn tops(&self) -> Vec<Card> {
        self.piles.iter().map(Pile::top).collect()
    }

    #[must_use]
    pub fn talon(&self) -> &CardBag {
        &self.talon
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a player. Panics on an unknown seat.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        PlayerId::new(self.current as u8)
    }

    /// The current player's hand; empty if nobody is seated.
    #[must_use]
    pub fn current_hand(&self) -> &[Card] {
        self.players
            .get(self.current)
            .map_or(&[], |player| player.hand.cards())
    }

    #[must_use]
    pub fn moves_this_turn(&self) -> usize {
        self.moves_this_turn
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Counters accumulated over every game dealt on this table.
    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Jumps played across every game dealt on this table.
    #[must_use]
    pub fn jump_count(&self) -> u64 {
        self.stats.jumps
    }

    /// Cards not yet on the board: the talon plus every hand.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.talon.len() + self.players.iter().map(|p| p.hand.len()).sum::<usize>()
    }
}
