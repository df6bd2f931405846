// Proptest generators for domain types and move sequences.

use proptest::prelude::*;

use crate::domain::rules::{FREE_CELLS, TABLEAU_PILES};
use crate::domain::{Card, MoveKind, Rank, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
        Just(Suit::Hearts),
        Just(Suit::Spades),
    ]
}

pub fn rank() -> impl Strategy<Value = Rank> {
    proptest::sample::select(Rank::ALL.to_vec())
}

pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

/// An in-range pile index.
pub fn pile_index() -> impl Strategy<Value = u8> {
    0..TABLEAU_PILES as u8
}

/// An in-range free-cell index.
pub fn cell_index() -> impl Strategy<Value = u8> {
    0..FREE_CELLS as u8
}

/// A well-formed (in-range) move of any kind.
pub fn move_kind() -> impl Strategy<Value = MoveKind> {
    prop_oneof![
        (pile_index(), pile_index()).prop_map(|(from, to)| MoveKind::Tableau { from, to }),
        (pile_index(), cell_index()).prop_map(|(from, cell)| MoveKind::FreeCell { from, cell }),
        (cell_index(), pile_index())
            .prop_map(|(cell, to)| MoveKind::FreeCellToTableau { cell, to }),
        pile_index().prop_map(|from| MoveKind::Foundation { from }),
    ]
}

/// A sequence of well-formed moves to drive a game.
pub fn move_sequence(max_len: usize) -> impl Strategy<Value = Vec<MoveKind>> {
    proptest::collection::vec(move_kind(), 0..max_len)
}
