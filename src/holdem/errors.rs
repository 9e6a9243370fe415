use thiserror::Error;

use crate::core::Card;

/// Reasons a simulation request is refused before any sampling starts.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum ValidationError {
    #[error("Player must have exactly 2 cards, got {0}")]
    InvalidPlayerCardCount(usize),

    #[error("At most 5 community cards are allowed, got {0}")]
    TooManyCommunityCards(usize),

    #[error("At least {min} iterations are required, got {iterations}")]
    IterationsBelowMinimum { iterations: usize, min: usize },

    #[error("At most {max} iterations are allowed, got {iterations}")]
    IterationsAboveMaximum { iterations: usize, max: usize },

    #[error("Duplicate card detected: {0}")]
    DuplicateCard(Card),

    #[error("Invalid simulation settings: {0}")]
    InvalidSettings(String),
}

/// Everything that can stop a simulation from producing a result, other
/// than being cancelled.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum SimulationError {
    #[error("Invalid simulation request: {0}")]
    Validation(#[from] ValidationError),

    /// The deck ran out while dealing. Validation keeps the number of cards
    /// needed far below 52, so this means an internal invariant broke.
    #[error("Deck exhausted: needed {requested} cards but only drew {drawn}")]
    DeckExhausted { requested: usize, drawn: usize },
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, SimulationError>;
