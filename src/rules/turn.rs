//! The view of the game a strategy gets during its turn.
//!
//! A `TurnContext` borrows exactly what a turn may touch: the board piles,
//! the acting player's hand and the turn's move counter. Strategies can read
//! the board and apply moves through it, but cannot refill hands, advance
//! seats or change the game state; those belong to `Game::play_turn`.

use log::trace;

use crate::core::{Card, GameConfig, GameStats, Move, PlayerId};
use crate::piles::{CardBag, Pile};

/// Read access to the game plus `apply_move` for the acting player.
pub struct TurnContext<'a> {
    player: PlayerId,
    piles: &'a mut [Pile],
    hand: &'a mut CardBag,
    talon_len: usize,
    config: &'a GameConfig,
    moves: &'a mut usize,
    stats: &'a mut GameStats,
}

impl<'a> TurnContext<'a> {
    pub(crate) fn new(
        player: PlayerId,
        piles: &'a mut [Pile],
        hand: &'a mut CardBag,
        talon_len: usize,
        config: &'a GameConfig,
        moves: &'a mut usize,
        stats: &'a mut GameStats,
    ) -> Self {
        Self {
            player,
            piles,
            hand,
            talon_len,
            config,
            moves,
            stats,
        }
    }

    /// The acting player.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Board piles in index order.
    #[must_use]
    pub fn piles(&self) -> &[Pile] {
        self.piles
    }

    /// The acting player's hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Cards left in the talon.
    #[must_use]
    pub fn talon_len(&self) -> usize {
        self.talon_len
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.config
    }

    /// Moves applied so far this turn.
    #[must_use]
    pub fn moves_made(&self) -> usize {
        *self.moves
    }

    /// Moves this turn must reach.
    #[must_use]
    pub fn required_moves(&self) -> usize {
        self.config.required_moves(self.talon_len == 0)
    }

    #[must_use]
    pub fn has_enough_moves(&self) -> bool {
        self.moves_made() >= self.required_moves()
    }

    /// Check that `mv` targets a real pile, uses a card in hand, and obeys
    /// the placement rule.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.piles
            .get(mv.pile)
            .is_some_and(|pile| self.hand.contains(mv.card) && pile.can_place(mv.card))
    }

    /// Range used up by `mv`; negative for jumps.
    ///
    /// Panics if `mv.pile` is not a board pile index; check with `is_legal`
    /// first.
    #[must_use]
    pub fn move_cost(&self, mv: Move) -> Card {
        self.piles[mv.pile].cost(mv.card)
    }

    /// Every legal move, pile by pile, then hand slot by hand slot.
    pub fn legal_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.piles.iter().enumerate().flat_map(move |(index, pile)| {
            self.hand
                .cards()
                .iter()
                .filter(move |&&card| pile.can_place(card))
                .map(move |&card| Move::new(index, card))
        })
    }

    /// Play `mv`. Panics if it is not legal.
    pub fn apply_move(&mut self, mv: Move) {
        place_from_hand(
            self.player,
            self.piles,
            self.hand,
            mv,
            self.moves,
            self.stats,
        );
    }
}

/// Move a card from `hand` to its target pile and count it.
///
/// Shared by `TurnContext::apply_move` and `Game::apply_move`.
pub(crate) fn place_from_hand(
    player: PlayerId,
    piles: &mut [Pile],
    hand: &mut CardBag,
    mv: Move,
    moves: &mut usize,
    stats: &mut GameStats,
) {
    assert!(
        mv.pile < piles.len(),
        "pile index {} out of range ({} piles)",
        mv.pile,
        piles.len()
    );
    let slot = hand
        .find(mv.card)
        .unwrap_or_else(|| panic!("{} does not hold card {}", player, mv.card));

    let pile = &mut piles[mv.pile];
    let jump = pile.is_jump(mv.card);
    pile.place(mv.card);
    hand.remove_at(slot);

    *moves += 1;
    stats.moves += 1;
    if jump {
        stats.jumps += 1;
    }
    trace!("{} plays {}{}", player, mv, if jump { " (jump)" } else { "" });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piles::Direction;

    struct Fixture {
        piles: Vec<Pile>,
        hand: CardBag,
        config: GameConfig,
        moves: usize,
        stats: GameStats,
    }

    impl Fixture {
        fn new(hand_cards: &[Card]) -> Self {
            let mut hand = CardBag::hand(6);
            for &card in hand_cards {
                hand.place(card);
            }
            Self {
                piles: vec![
                    Pile::seeded(Direction::Ascending, 15, 99),
                    Pile::seeded(Direction::Descending, 40, 99),
                ],
                hand,
                config: GameConfig::default(),
                moves: 0,
                stats: GameStats::default(),
            }
        }

        fn context(&mut self, talon_len: usize) -> TurnContext<'_> {
            TurnContext::new(
                PlayerId::new(0),
                &mut self.piles,
                &mut self.hand,
                talon_len,
                &self.config,
                &mut self.moves,
                &mut self.stats,
            )
        }
    }

    #[test]
    fn test_legal_moves_order() {
        let mut fixture = Fixture::new(&[5, 50, 20]);
        let turn = fixture.context(10);

        let moves: Vec<_> = turn.legal_moves().collect();
        assert_eq!(
            moves,
            vec![
                Move::new(0, 5),  // jump
                Move::new(0, 50),
                Move::new(0, 20),
                Move::new(1, 5),
                Move::new(1, 50), // jump
                Move::new(1, 20),
            ]
        );
    }

    #[test]
    fn test_is_legal() {
        let mut fixture = Fixture::new(&[5, 12]);
        let turn = fixture.context(10);

        assert!(turn.is_legal(Move::new(0, 5)));
        assert!(!turn.is_legal(Move::new(0, 12)));
        assert!(turn.is_legal(Move::new(1, 12)));
        assert!(!turn.is_legal(Move::new(0, 30))); // not in hand
        assert!(!turn.is_legal(Move::new(7, 5))); // no such pile
    }

    #[test]
    fn test_apply_counts_moves_and_jumps() {
        let mut fixture = Fixture::new(&[5, 30]);
        {
            let mut turn = fixture.context(10);
            assert_eq!(turn.move_cost(Move::new(0, 5)), -10);

            turn.apply_move(Move::new(0, 5));
            turn.apply_move(Move::new(1, 30));

            assert_eq!(turn.moves_made(), 2);
            assert!(turn.has_enough_moves());
            assert!(turn.hand().is_empty());
        }

        assert_eq!(fixture.piles[0].top(), 5);
        assert_eq!(fixture.piles[1].top(), 30);
        assert_eq!(fixture.stats.moves, 2);
        assert_eq!(fixture.stats.jumps, 1);
    }

    #[test]
    fn test_quota_depends_on_talon() {
        let mut fixture = Fixture::new(&[20]);
        assert_eq!(fixture.context(5).required_moves(), 2);
        assert_eq!(fixture.context(0).required_moves(), 1);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_cost_of_missing_pile_panics() {
        let mut fixture = Fixture::new(&[20]);
        let turn = fixture.context(5);

        assert!(!turn.is_legal(Move::new(2, 20)));
        let _ = turn.move_cost(Move::new(2, 20));
    }

    #[test]
    #[should_panic(expected = "does not hold card")]
    fn test_apply_card_not_in_hand_panics() {
        let mut fixture = Fixture::new(&[20]);
        fixture.context(5).apply_move(Move::new(0, 21));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_apply_bad_pile_panics() {
        let mut fixture = Fixture::new(&[20]);
        fixture.context(5).apply_move(Move::new(2, 20));
    }

    #[test]
    #[should_panic(expected = "illegal placement")]
    fn test_apply_illegal_panics() {
        let mut fixture = Fixture::new(&[12]);
        fixture.context(5).apply_move(Move::new(0, 12));
    }
}
