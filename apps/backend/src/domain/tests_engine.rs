//! Engine move semantics: legality scenarios plus atomicity and bounds.

use crate::domain::cards::parse_cards;
use crate::domain::{Card, FreeCellGame, MoveKind, Rank, Suit};

fn card(token: &str) -> Card {
    parse_cards(&[token])[0]
}

/// Board with the given pile contents (listed bottom-to-top), everything else
/// empty.
fn board(piles: &[(usize, &[&str])]) -> FreeCellGame {
    let mut tableau: [Vec<Card>; 8] = Default::default();
    for (index, tokens) in piles {
        tableau[*index] = parse_cards(tokens);
    }
    FreeCellGame::from_parts(tableau, [None; 4], Default::default())
}

fn full_foundation(suit: Suit) -> Vec<Card> {
    Rank::ALL.iter().map(|&rank| Card { suit, rank }).collect()
}

#[test]
fn fresh_deal_has_7766_piles_and_52_cards() {
    let game = FreeCellGame::new().unwrap();
    assert_eq!(game.tableau()[0].len(), 7);
    assert_eq!(game.tableau()[4].len(), 6);
    let total: usize = game.tableau().iter().map(Vec::len).sum();
    assert_eq!(total, 52);
    assert!(game.free_cells().iter().all(Option::is_none));
    for suit in Suit::ALL {
        assert!(game.foundation(suit).is_empty());
    }
}

#[test]
fn ace_moves_to_empty_foundation() {
    let mut game = board(&[(2, &["5D", "AH"])]);
    assert_eq!(game.move_to_foundation(2), Ok(true));
    assert_eq!(game.foundation(Suit::Hearts), &[card("AH")]);
    assert_eq!(game.tableau()[2], parse_cards(&["5D"]));
}

#[test]
fn non_ace_cannot_start_a_foundation() {
    let mut game = board(&[(1, &["5C"])]);
    let before = game.clone();
    assert_eq!(game.move_to_foundation(1), Ok(false));
    assert_eq!(game, before);
}

#[test]
fn foundation_requires_exact_successor() {
    let mut tableau: [Vec<Card>; 8] = Default::default();
    tableau[0] = parse_cards(&["2H"]);
    tableau[1] = parse_cards(&["3H"]);
    let mut foundations: [Vec<Card>; 4] = Default::default();
    foundations[Suit::Hearts.index()] = parse_cards(&["AH"]);
    let mut game = FreeCellGame::from_parts(tableau, [None; 4], foundations);

    // 3♥ on A♥ is a gap; 2♥ is the successor.
    assert_eq!(game.move_to_foundation(1), Ok(false));
    assert_eq!(game.move_to_foundation(0), Ok(true));
    assert_eq!(game.foundation(Suit::Hearts), parse_cards(&["AH", "2H"]));
}

#[test]
fn occupied_free_cell_rejects_a_second_card() {
    let mut tableau: [Vec<Card>; 8] = Default::default();
    tableau[0] = parse_cards(&["KD", "4S"]);
    let cells = [None, Some(card("9C")), None, None];
    let mut game = FreeCellGame::from_parts(tableau, cells, Default::default());

    let before = game.clone();
    assert_eq!(game.move_to_free_cell(0, 1), Ok(false));
    assert_eq!(game, before);

    // A vacant cell works.
    assert_eq!(game.move_to_free_cell(0, 0), Ok(true));
    assert_eq!(game.free_cells()[0], Some(card("4S")));
    assert_eq!(game.tableau()[0], parse_cards(&["KD"]));
}

#[test]
fn free_cell_move_from_empty_pile_fails() {
    let mut game = board(&[]);
    let before = game.clone();
    assert_eq!(game.move_to_free_cell(3, 0), Ok(false));
    assert_eq!(game, before);
}

#[test]
fn permissive_tableau_move_is_accepted() {
    // 7♠ onto 9♦: accepted under the reference predicate even though
    // standard FreeCell would demand an 8.
    let mut game = board(&[(0, &["7S"]), (1, &["9D"])]);
    assert_eq!(game.move_within_tableau(0, 1), Ok(true));
    assert_eq!(game.tableau()[1], parse_cards(&["9D", "7S"]));
    assert!(game.tableau()[0].is_empty());
}

#[test]
fn exact_predecessor_tableau_move_is_rejected() {
    let mut game = board(&[(0, &["8S"]), (1, &["9D"])]);
    let before = game.clone();
    assert_eq!(game.move_within_tableau(0, 1), Ok(false));
    assert_eq!(game, before);
}

#[test]
fn any_card_moves_to_an_empty_pile() {
    let mut game = board(&[(0, &["KC"])]);
    assert_eq!(game.move_within_tableau(0, 7), Ok(true));
    assert_eq!(game.tableau()[7], parse_cards(&["KC"]));
}

#[test]
fn self_move_on_non_empty_pile_always_fails() {
    let mut game = board(&[(3, &["9D", "4C"])]);
    let before = game.clone();
    assert_eq!(game.move_within_tableau(3, 3), Ok(false));
    assert_eq!(game, before);
}

#[test]
fn tableau_move_from_empty_source_fails() {
    let mut game = board(&[(1, &["9D"])]);
    let before = game.clone();
    assert_eq!(game.move_within_tableau(0, 1), Ok(false));
    assert_eq!(game, before);
}

#[test]
fn free_cell_to_tableau_follows_tableau_rule() {
    let mut tableau: [Vec<Card>; 8] = Default::default();
    tableau[2] = parse_cards(&["9D"]);
    let cells = [Some(card("7S")), Some(card("8S")), None, None];
    let mut game = FreeCellGame::from_parts(tableau, cells, Default::default());

    // 8♠ fails the permissive rule; 7♠ passes it.
    let before = game.clone();
    assert_eq!(game.move_free_cell_to_tableau(1, 2), Ok(false));
    assert_eq!(game, before);

    assert_eq!(game.move_free_cell_to_tableau(0, 2), Ok(true));
    assert_eq!(game.free_cells()[0], None);
    assert_eq!(game.tableau()[2], parse_cards(&["9D", "7S"]));
}

#[test]
fn empty_free_cell_has_nothing_to_move() {
    let mut game = board(&[]);
    let before = game.clone();
    assert_eq!(game.move_free_cell_to_tableau(2, 0), Ok(false));
    assert_eq!(game, before);
}

#[test]
fn winner_iff_all_foundations_complete() {
    let foundations = Suit::ALL.map(full_foundation);
    let game = FreeCellGame::from_parts(Default::default(), [None; 4], foundations);
    assert!(game.is_winner());

    let mut short = Suit::ALL.map(full_foundation);
    short[Suit::Spades.index()].pop();
    let game = FreeCellGame::from_parts(Default::default(), [None; 4], short);
    assert!(!game.is_winner());
}

#[test]
fn out_of_range_indices_are_errors_not_moves() {
    let mut game = FreeCellGame::with_seed(1).unwrap();
    let before = game.clone();

    assert!(game.move_within_tableau(8, 0).is_err());
    assert!(game.move_within_tableau(0, 200).is_err());
    assert!(game.move_to_free_cell(0, 4).is_err());
    assert!(game.move_to_free_cell(9, 0).is_err());
    assert!(game.move_free_cell_to_tableau(4, 0).is_err());
    assert!(game.move_free_cell_to_tableau(0, 8).is_err());
    assert!(game.move_to_foundation(8).is_err());

    assert_eq!(game, before, "rejected requests must not mutate the board");
}

#[test]
fn apply_dispatches_each_move_kind() {
    let mut tableau: [Vec<Card>; 8] = Default::default();
    tableau[0] = parse_cards(&["AH"]);
    tableau[1] = parse_cards(&["9D"]);
    tableau[2] = parse_cards(&["7S"]);
    let mut game = FreeCellGame::from_parts(tableau, [None; 4], Default::default());

    assert_eq!(game.apply(MoveKind::Foundation { from: 0 }), Ok(true));
    assert_eq!(game.apply(MoveKind::Tableau { from: 2, to: 1 }), Ok(true));
    assert_eq!(game.apply(MoveKind::FreeCell { from: 1, cell: 0 }), Ok(true));
    assert_eq!(
        game.apply(MoveKind::FreeCellToTableau { cell: 0, to: 5 }),
        Ok(true)
    );
    assert_eq!(game.free_cells()[0], None);
    assert_eq!(game.tableau()[5], parse_cards(&["7S"]));
}
