//! Domain layer: pure FreeCell game logic.

pub mod cards;
pub mod deck;
pub mod engine;
pub mod rules;
pub mod snapshot;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_dealing;
#[cfg(test)]
mod tests_engine;
#[cfg(test)]
mod tests_props_consistency;

// Re-exports for ergonomics
pub use cards::{Card, Rank, Suit};
pub use deck::Deck;
pub use engine::{FreeCellGame, MoveKind};
pub use snapshot::{snapshot, GameSnapshot, GameStatus};
