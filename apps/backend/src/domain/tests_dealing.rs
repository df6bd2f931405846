//! Deal-shape tests: pile sizes, completeness, determinism.

use std::collections::HashSet;

use crate::domain::rules::{DECK_SIZE, TABLEAU_PILES};
use crate::domain::{Card, FreeCellGame};

#[test]
fn new_game_deals_7766_layout() {
    let game = FreeCellGame::with_seed(42).unwrap();
    let lens: Vec<usize> = game.tableau().iter().map(Vec::len).collect();
    assert_eq!(lens, vec![7, 7, 7, 7, 6, 6, 6, 6]);
}

#[test]
fn new_game_starts_with_empty_cells_and_foundations() {
    let game = FreeCellGame::with_seed(42).unwrap();
    assert!(game.free_cells().iter().all(Option::is_none));
    for suit in crate::domain::Suit::ALL {
        assert!(game.foundation(suit).is_empty());
    }
    assert!(!game.is_winner());
}

#[test]
fn dealt_cards_are_exactly_the_full_deck() {
    let game = FreeCellGame::new().unwrap();
    let mut all: Vec<Card> = Vec::with_capacity(DECK_SIZE);
    for pile in game.tableau() {
        all.extend(pile.iter().copied());
    }
    assert_eq!(all.len(), DECK_SIZE);
    let unique: HashSet<Card> = all.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE, "deal must contain no duplicates");
}

#[test]
fn same_seed_deals_identically() {
    let a = FreeCellGame::with_seed(9001).unwrap();
    let b = FreeCellGame::with_seed(9001).unwrap();
    assert_eq!(a, b);
}

#[test]
fn pile_count_is_fixed() {
    let game = FreeCellGame::new().unwrap();
    assert_eq!(game.tableau().len(), TABLEAU_PILES);
}
