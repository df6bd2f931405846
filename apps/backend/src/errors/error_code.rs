//! Error codes for the FreeCell backend API.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses. Add new codes here; never pass ad-hoc strings.

use core::fmt;

/// Centralized error codes for the FreeCell backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    /// Invalid game ID provided
    InvalidGameId,
    /// Tableau pile index out of range
    InvalidPileIndex,
    /// Free cell index out of range
    InvalidCellIndex,
    /// Unparsable card token
    ParseCard,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource not found
    /// Game not found
    GameNotFound,
    /// General not found error
    NotFound,

    // System errors
    /// Deck exhausted during the deal (dealing-logic defect)
    EmptyDeck,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidPileIndex => "INVALID_PILE_INDEX",
            Self::InvalidCellIndex => "INVALID_CELL_INDEX",
            Self::ParseCard => "PARSE_CARD",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",
            Self::EmptyDeck => "EMPTY_DECK",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    pub const fn all() -> &'static [ErrorCode] {
        &[
            Self::InvalidGameId,
            Self::InvalidPileIndex,
            Self::InvalidCellIndex,
            Self::ParseCard,
            Self::ValidationError,
            Self::BadRequest,
            Self::GameNotFound,
            Self::NotFound,
            Self::EmptyDeck,
            Self::Internal,
            Self::ConfigError,
        ]
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
