//! Property tests over randomly configured tables.

use proptest::prelude::*;

use thegame::core::{Card, GameConfig, GameRng, GameState, PileKind};
use thegame::piles::{Direction, Pile, JUMP_DISTANCE};
use thegame::rules::Game;

fn arb_config() -> impl Strategy<Value = GameConfig> {
    (
        1usize..=3,
        1usize..=3,
        prop_oneof![-20i32..20, Just(i32::MIN), Just(i32::MAX - 80)],
        1i32..=80,
        1usize..=8,
        1usize..=3,
        1usize..=3,
    )
        .prop_map(|(asc, desc, min, span, hand, full, empty)| {
            GameConfig::default()
                .with_piles(asc, desc)
                .with_card_range(min, min + span)
                .with_hand_size(hand)
                .with_required_moves(full, empty)
        })
}

fn deal(config: GameConfig, players: usize, seed: u64) -> (Game, GameRng) {
    let mut rng = GameRng::new(seed);
    let mut game = Game::new(config, &mut rng).unwrap();
    for _ in 0..players {
        game.add_default_player();
    }
    (game, rng)
}

/// Every range card sits in exactly one of talon, hands or board.
fn assert_conserved(game: &Game) {
    let config = game.config();
    let mut seen: Vec<Card> = game.talon().cards().to_vec();
    for player in game.players() {
        seen.extend_from_slice(player.hand().cards());
    }
    for pile in game.piles() {
        let seed = match pile.kind() {
            PileKind::Ascending => config.min_card,
            _ => config.max_card,
        };
        assert_eq!(pile.cards()[0], seed);
        seen.extend_from_slice(&pile.cards()[1..]);
    }
    seen.sort_unstable();

    let expected: Vec<Card> = (config.min_card + 1..config.max_card).collect();
    assert_eq!(seen, expected);
}

fn assert_within_capacity(game: &Game) {
    for pile in game.piles() {
        assert!(pile.len() <= pile.capacity());
    }
    assert!(game.talon().len() <= game.talon().capacity());
    for player in game.players() {
        assert!(player.hand().len() <= player.hand().capacity());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Placement follows direction, with the exact backwards jump always allowed.
    #[test]
    fn prop_legality(top in -200i32..200, card in -200i32..200, ascending in any::<bool>()) {
        let direction = if ascending { Direction::Ascending } else { Direction::Descending };
        let pile = Pile::seeded(direction, top, 1000);

        let expected = if ascending {
            card > top || card == top - JUMP_DISTANCE
        } else {
            card < top || card == top + JUMP_DISTANCE
        };
        prop_assert_eq!(pile.can_place(card), expected);
        prop_assert_eq!(pile.is_jump(card), card == top - JUMP_DISTANCE && ascending
            || card == top + JUMP_DISTANCE && !ascending);
    }

    /// Cards are neither lost nor duplicated, and no container overflows.
    #[test]
    fn prop_cards_conserved(config in arb_config(), players in 1usize..=5, seed in any::<u64>()) {
        let (mut game, _) = deal(config, players, seed);
        assert_conserved(&game);

        while game.state() == GameState::Running {
            game.play_turn();
            assert_conserved(&game);
            assert_within_capacity(&game);
        }
    }

    /// Every call that leaves the game running puts at least one card on
    /// the board, so a game ends within talon size + 1 calls.
    #[test]
    fn prop_terminates(config in arb_config(), players in 1usize..=5, seed in any::<u64>()) {
        let bound = config.talon_size() + 1;
        let (mut game, _) = deal(config, players, seed);

        let mut calls = 0;
        while game.play_turn() == GameState::Running {
            calls += 1;
            prop_assert!(calls < bound);
        }
        prop_assert!(game.state().is_terminal());
    }

    /// A finished game resets to a fresh deal.
    #[test]
    fn prop_reset_restores_deal(config in arb_config(), players in 1usize..=5, seed in any::<u64>()) {
        let (mut game, mut rng) = deal(config.clone(), players, seed);
        while game.state() == GameState::Running {
            game.play_turn();
        }
        let jumps = game.jump_count();

        game.reset_game(&mut rng);

        let dealt = (players * config.hand_size).min(config.talon_size());
        prop_assert_eq!(game.state(), GameState::Running);
        prop_assert_eq!(game.current_player().index(), 0);
        prop_assert_eq!(game.moves_this_turn(), 0);
        prop_assert_eq!(game.talon().len(), config.talon_size() - dealt);
        prop_assert_eq!(game.cards_remaining(), config.talon_size());
        prop_assert!(game.piles().iter().all(|pile| pile.len() == 1));
        prop_assert_eq!(game.jump_count(), jumps);
        prop_assert_eq!(game.stats().games, 2);

        // Hands fill in seat order
        let mut left = dealt;
        for player in game.players() {
            let expected = left.min(config.hand_size);
            prop_assert_eq!(player.hand().len(), expected);
            left -= expected;
        }
        assert_conserved(&game);
    }

    /// Same seed, same game.
    #[test]
    fn prop_seeded_games_repeat(config in arb_config(), players in 1usize..=4, seed in any::<u64>()) {
        let (mut first, _) = deal(config.clone(), players, seed);
        let (mut second, _) = deal(config, players, seed);

        while first.state() == GameState::Running {
            prop_assert_eq!(first.play_turn(), second.play_turn());
            prop_assert_eq!(first.tops(), second.tops());
        }
        prop_assert_eq!(first.stats(), second.stats());
    }
}
