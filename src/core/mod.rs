//! Card and hand primitives.
//!
//! Everything needed to represent cards, keep track of a deck, and score
//! hands lives here. None of it knows about simulations.

/// Card, Suit, Rank and their display/parsing helpers.
mod card;
/// Export `Card`, `Suit`, `Rank`, and `CardColor`
pub use self::card::{Card, CardColor, NUM_CARDS, Rank, Suit};

/// Errors from parsing cards.
mod error;
/// Export `CardParseError`
pub use self::error::CardParseError;

/// A `u64` backed set of cards.
mod card_bit_set;
/// Export `CardBitSet`
pub use self::card_bit_set::{CardBitSet, CardBitSetIter};

/// The deck with its used cards.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Iterate over every N card group of some cards.
mod card_iter;
/// Export `CardIter`
pub use self::card_iter::CardIter;

/// Hand categories and the scored result of a five card hand.
mod hand_rank;
/// Export `HandRank` and `HandEvaluation`
pub use self::hand_rank::{HandEvaluation, HandRank, MAX_KICKERS};

/// Scoring of five to seven cards.
mod evaluator;
/// Export `evaluate_hand`
pub use self::evaluator::evaluate_hand;
