//! The FreeCell game engine: owns the dealt board and applies moves.
//!
//! Every operation validates before it mutates; a failed move leaves the
//! board untouched. Gameplay failures (an illegal but well-formed move) are
//! reported as `Ok(false)`; malformed input (out-of-range indices) is a
//! `DomainError` so the caller can distinguish a bad request from a legal
//! refusal.

use serde::{Deserialize, Serialize};

use crate::domain::deck::Deck;
use crate::domain::rules::{
    foundation_accepts, initial_pile_size, tableau_accepts, FOUNDATIONS, FOUNDATION_SIZE,
    FREE_CELLS, TABLEAU_PILES,
};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// One move request against the engine. Indices are 0-based.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MoveKind {
    /// Top card of pile `from` onto pile `to`.
    Tableau { from: u8, to: u8 },
    /// Top card of pile `from` into free cell `cell`.
    FreeCell { from: u8, cell: u8 },
    /// Card held in free cell `cell` onto pile `to`.
    FreeCellToTableau { cell: u8, to: u8 },
    /// Top card of pile `from` onto its suit's foundation.
    Foundation { from: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeCellGame {
    tableau: [Vec<Card>; TABLEAU_PILES],
    free_cells: [Option<Card>; FREE_CELLS],
    foundations: [Vec<Card>; FOUNDATIONS],
}

impl FreeCellGame {
    /// Fresh game from a uniformly shuffled deck.
    pub fn new() -> Result<Self, DomainError> {
        Self::deal(Deck::shuffled())
    }

    /// Fresh game from a seeded deck; same seed, same deal.
    pub fn with_seed(seed: u64) -> Result<Self, DomainError> {
        Self::deal(Deck::shuffled_with_seed(seed))
    }

    /// Deal 7 cards to piles 0..=3 and 6 to piles 4..=7, in deck order.
    /// The last element of each pile is the most recently dealt card and the
    /// only one eligible to move.
    fn deal(mut deck: Deck) -> Result<Self, DomainError> {
        let mut tableau: [Vec<Card>; TABLEAU_PILES] = Default::default();
        for (pile, slot) in tableau.iter_mut().enumerate() {
            slot.reserve(initial_pile_size(pile));
            for _ in 0..initial_pile_size(pile) {
                slot.push(deck.deal()?);
            }
        }
        Ok(Self {
            tableau,
            free_cells: [None; FREE_CELLS],
            foundations: Default::default(),
        })
    }

    pub fn tableau(&self) -> &[Vec<Card>; TABLEAU_PILES] {
        &self.tableau
    }

    pub fn free_cells(&self) -> &[Option<Card>; FREE_CELLS] {
        &self.free_cells
    }

    pub fn foundation(&self, suit: Suit) -> &[Card] {
        &self.foundations[suit.index()]
    }

    /// True iff every foundation holds its full ascending run of 13 cards.
    pub fn is_winner(&self) -> bool {
        self.foundations.iter().all(|f| f.len() == FOUNDATION_SIZE)
    }

    /// Dispatch a move request to the matching operation.
    pub fn apply(&mut self, mv: MoveKind) -> Result<bool, DomainError> {
        match mv {
            MoveKind::Tableau { from, to } => self.move_within_tableau(from, to),
            MoveKind::FreeCell { from, cell } => self.move_to_free_cell(from, cell),
            MoveKind::FreeCellToTableau { cell, to } => self.move_free_cell_to_tableau(cell, to),
            MoveKind::Foundation { from } => self.move_to_foundation(from),
        }
    }

    /// Move the top card of pile `from` onto pile `to`.
    ///
    /// Legality is checked against the destination before anything is popped,
    /// so a self-move on a non-empty pile always fails: the card's suit
    /// matches its own pile's top.
    pub fn move_within_tableau(&mut self, from: u8, to: u8) -> Result<bool, DomainError> {
        let from = check_pile_index(from)?;
        let to = check_pile_index(to)?;

        let Some(&card) = self.tableau[from].last() else {
            return Ok(false);
        };
        if !tableau_accepts(card, self.tableau[to].last().copied()) {
            return Ok(false);
        }

        let card = self.tableau[from].pop().expect("source checked non-empty");
        self.tableau[to].push(card);
        Ok(true)
    }

    /// Move the top card of pile `from` into free cell `cell`.
    pub fn move_to_free_cell(&mut self, from: u8, cell: u8) -> Result<bool, DomainError> {
        let from = check_pile_index(from)?;
        let cell = check_cell_index(cell)?;

        if self.free_cells[cell].is_some() || self.tableau[from].is_empty() {
            return Ok(false);
        }
        self.free_cells[cell] = self.tableau[from].pop();
        Ok(true)
    }

    /// Move the card held in free cell `cell` onto pile `to`, under the same
    /// legality rule as a tableau move.
    pub fn move_free_cell_to_tableau(&mut self, cell: u8, to: u8) -> Result<bool, DomainError> {
        let cell = check_cell_index(cell)?;
        let to = check_pile_index(to)?;

        let Some(card) = self.free_cells[cell] else {
            return Ok(false);
        };
        if !tableau_accepts(card, self.tableau[to].last().copied()) {
            return Ok(false);
        }

        self.free_cells[cell] = None;
        self.tableau[to].push(card);
        Ok(true)
    }

    /// Move the top card of pile `from` onto its suit's foundation.
    pub fn move_to_foundation(&mut self, from: u8) -> Result<bool, DomainError> {
        let from = check_pile_index(from)?;

        let Some(&card) = self.tableau[from].last() else {
            return Ok(false);
        };
        let foundation = &self.foundations[card.suit.index()];
        if !foundation_accepts(card, foundation.last().copied()) {
            return Ok(false);
        }

        let card = self.tableau[from].pop().expect("source checked non-empty");
        self.foundations[card.suit.index()].push(card);
        Ok(true)
    }

    /// Test-only constructor for arbitrary board positions.
    #[cfg(test)]
    pub(crate) fn from_parts(
        tableau: [Vec<Card>; TABLEAU_PILES],
        free_cells: [Option<Card>; FREE_CELLS],
        foundations: [Vec<Card>; FOUNDATIONS],
    ) -> Self {
        Self {
            tableau,
            free_cells,
            foundations,
        }
    }
}

fn check_pile_index(index: u8) -> Result<usize, DomainError> {
    let i = index as usize;
    if i < TABLEAU_PILES {
        Ok(i)
    } else {
        Err(DomainError::validation(
            ValidationKind::PileIndexOutOfRange,
            format!("Tableau pile index must be 0..={}, got {index}", TABLEAU_PILES - 1),
        ))
    }
}

fn check_cell_index(index: u8) -> Result<usize, DomainError> {
    let i = index as usize;
    if i < FREE_CELLS {
        Ok(i)
    } else {
        Err(DomainError::validation(
            ValidationKind::CellIndexOutOfRange,
            format!("Free cell index must be 0..={}, got {index}", FREE_CELLS - 1),
        ))
    }
}
