//! Shuffled 52-card deck with guarded dealing.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Generate a full 52-card deck in standard order.
fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Owned, mutable deck. Cards are dealt from the top (last element).
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards, uniformly shuffled.
    pub fn shuffled() -> Self {
        let mut cards = full_deck();
        cards.shuffle(&mut rand::rng());
        Self { cards }
    }

    /// Deterministic shuffle for reproducible deals.
    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = full_deck();
        cards.shuffle(&mut rng);
        Self { cards }
    }

    /// Remove and return the top card.
    ///
    /// The game deals exactly 52 cards at startup, so an empty deck here
    /// indicates a dealing-logic defect. Surface it as an error, not a panic.
    pub fn deal(&mut self) -> Result<Card, DomainError> {
        self.cards.pop().ok_or_else(|| {
            DomainError::validation(ValidationKind::EmptyDeck, "Cannot deal from an empty deck")
        })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
