//! Board layout constants and pure move-legality predicates.

use crate::domain::{Card, Rank};

pub const TABLEAU_PILES: usize = 8;
pub const FREE_CELLS: usize = 4;
pub const FOUNDATIONS: usize = 4;
pub const DECK_SIZE: usize = 52;
pub const FOUNDATION_SIZE: usize = 13;

/// Initial deal: piles 0..=3 receive 7 cards, piles 4..=7 receive 6.
pub const fn initial_pile_size(pile: usize) -> usize {
    if pile < 4 {
        7
    } else {
        6
    }
}

/// Whether `card` may be placed on a tableau pile whose top is `dest_top`.
///
/// An empty pile accepts any card. Otherwise the suits must differ and the
/// moved card's rank index must be strictly less than the destination top's
/// rank index minus one. This reproduces the reference system's permissive
/// rule (strict-less rather than exact-predecessor, no alternating-color
/// requirement); see DESIGN.md before changing it.
pub fn tableau_accepts(card: Card, dest_top: Option<Card>) -> bool {
    match dest_top {
        None => true,
        Some(top) => {
            card.suit != top.suit && (card.rank.index() as i8) < (top.rank.index() as i8) - 1
        }
    }
}

/// Whether `card` may be placed on its suit's foundation whose top is `top`.
/// Empty foundations accept only an Ace; otherwise the rank must be the
/// exact successor of the current top.
pub fn foundation_accepts(card: Card, top: Option<Card>) -> bool {
    match top {
        None => card.rank == Rank::Ace,
        Some(top) => card.rank.index() == top.rank.index() + 1,
    }
}
