//! Public snapshot API for observing game state without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::engine::FreeCellGame;
use crate::domain::{Card, Suit};

/// Game progression as seen by clients. There is no lost state: FreeCell has
/// no forced-loss condition this engine recognizes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
}

/// One foundation pile with its ordered cards (Ace upward).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundationPublic {
    pub suit: Suit,
    pub cards: Vec<Card>,
}

/// Top-level view of a game. The only representation the HTTP layer sees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub tableau: Vec<Vec<Card>>,
    pub free_cells: [Option<Card>; 4],
    pub foundations: [FoundationPublic; 4],
}

/// Produce a snapshot of the current game state. Never panics.
pub fn snapshot(game: &FreeCellGame) -> GameSnapshot {
    let status = if game.is_winner() {
        GameStatus::Won
    } else {
        GameStatus::InProgress
    };

    GameSnapshot {
        status,
        tableau: game.tableau().iter().cloned().collect(),
        free_cells: *game.free_cells(),
        foundations: Suit::ALL.map(|suit| FoundationPublic {
            suit,
            cards: game.foundation(suit).to_vec(),
        }),
    }
}

impl GameSnapshot {
    /// Total cards visible across tableau, free cells, and foundations.
    /// Always 52 for a consistent board.
    pub fn card_count(&self) -> usize {
        let tableau: usize = self.tableau.iter().map(Vec::len).sum();
        let cells = self.free_cells.iter().flatten().count();
        let foundations: usize = self.foundations.iter().map(|f| f.cards.len()).sum();
        tableau + cells + foundations
    }
}
