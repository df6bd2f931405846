//! Property-based tests for board-wide consistency invariants.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::rules::DECK_SIZE;
use crate::domain::{snapshot, test_gens, Card, FreeCellGame, Suit};

/// Every card on the board, across tableau, free cells, and foundations.
fn all_cards(game: &FreeCellGame) -> Vec<Card> {
    let mut cards: Vec<Card> = Vec::with_capacity(DECK_SIZE);
    for pile in game.tableau() {
        cards.extend(pile.iter().copied());
    }
    cards.extend(game.free_cells().iter().flatten().copied());
    for suit in Suit::ALL {
        cards.extend(game.foundation(suit).iter().copied());
    }
    cards
}

proptest! {
    /// Conservation: no move sequence can create or destroy cards.
    #[test]
    fn prop_cards_are_conserved(
        seed in any::<u64>(),
        moves in test_gens::move_sequence(64),
    ) {
        let mut game = FreeCellGame::with_seed(seed).unwrap();
        for mv in moves {
            game.apply(mv).unwrap();
            let cards = all_cards(&game);
            prop_assert_eq!(cards.len(), DECK_SIZE);
            let unique: HashSet<Card> = cards.iter().copied().collect();
            prop_assert_eq!(unique.len(), DECK_SIZE, "duplicate card after {:?}", mv);
        }
    }

    /// Foundations only ever hold an ascending gap-free run of their own suit.
    #[test]
    fn prop_foundations_stay_ordered(
        seed in any::<u64>(),
        moves in test_gens::move_sequence(64),
    ) {
        let mut game = FreeCellGame::with_seed(seed).unwrap();
        for mv in moves {
            game.apply(mv).unwrap();
            for suit in Suit::ALL {
                for (i, card) in game.foundation(suit).iter().enumerate() {
                    prop_assert_eq!(card.suit, suit);
                    prop_assert_eq!(card.rank.index() as usize, i);
                }
            }
        }
    }

    /// Atomicity: a refused move leaves the board identical.
    #[test]
    fn prop_failed_moves_do_not_mutate(
        seed in any::<u64>(),
        moves in test_gens::move_sequence(64),
    ) {
        let mut game = FreeCellGame::with_seed(seed).unwrap();
        for mv in moves {
            let before = game.clone();
            let moved = game.apply(mv).unwrap();
            if !moved {
                prop_assert_eq!(&game, &before, "refused move {:?} mutated the board", mv);
            }
        }
    }

    /// The snapshot mirrors the engine: same card count, win status only when
    /// all foundations are complete.
    #[test]
    fn prop_snapshot_is_consistent(
        seed in any::<u64>(),
        moves in test_gens::move_sequence(32),
    ) {
        let mut game = FreeCellGame::with_seed(seed).unwrap();
        for mv in moves {
            game.apply(mv).unwrap();
        }
        let snap = snapshot(&game);
        prop_assert_eq!(snap.card_count(), DECK_SIZE);
        prop_assert_eq!(
            snap.status == crate::domain::GameStatus::Won,
            game.is_winner()
        );
    }
}
