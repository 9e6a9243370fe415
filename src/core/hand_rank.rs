use std::cmp::Ordering;
use std::fmt;

use super::card::Card;

/// All the different possible hand categories, weakest first.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum HandRank {
    /// The lowest rank.
    /// No matches
    HighCard,
    /// One Card matches another.
    Pair,
    /// Two different pair of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five cards in a sequence
    Straight,
    /// Five cards of the same suit
    Flush,
    /// Three of one value and two of another value
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five cards in a sequence all for the same suit.
    StraightFlush,
    /// Ten through ace, all of the same suit.
    RoyalFlush,
}

impl HandRank {
    /// Every category from weakest to strongest.
    pub const ALL: [HandRank; 10] = [
        HandRank::HighCard,
        HandRank::Pair,
        HandRank::TwoPair,
        HandRank::ThreeOfAKind,
        HandRank::Straight,
        HandRank::Flush,
        HandRank::FullHouse,
        HandRank::FourOfAKind,
        HandRank::StraightFlush,
        HandRank::RoyalFlush,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::Pair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The most kickers any category keeps (high card and flush).
pub const MAX_KICKERS: usize = 4;

/// The score of a single five card hand.
///
/// Evaluations are compared by category, then `primary_value`, then
/// `secondary_value`, then kickers from highest to lowest. The cards that
/// made the hand take no part in equality or ordering, so two hands made of
/// different suits can be equal.
///
/// Unused values are zero: a flush has no secondary value, a straight has
/// no kickers.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct HandEvaluation {
    rank: HandRank,
    primary_value: u8,
    secondary_value: u8,
    kickers: [u8; MAX_KICKERS],
    num_kickers: u8,
    cards: [Card; 5],
}

impl HandEvaluation {
    /// Build an evaluation. Kickers are sorted highest first here, the order
    /// they are passed in doesn't matter.
    ///
    /// Panics if more than `MAX_KICKERS` kickers are given.
    pub fn new(
        rank: HandRank,
        primary_value: u8,
        secondary_value: u8,
        kickers: &[u8],
        cards: [Card; 5],
    ) -> Self {
        assert!(
            kickers.len() <= MAX_KICKERS,
            "A five card hand has at most {MAX_KICKERS} kickers"
        );
        let mut sorted = [0u8; MAX_KICKERS];
        sorted[..kickers.len()].copy_from_slice(kickers);
        sorted[..kickers.len()].sort_unstable_by(|a, b| b.cmp(a));
        Self {
            rank,
            primary_value,
            secondary_value,
            kickers: sorted,
            num_kickers: kickers.len() as u8,
            cards,
        }
    }

    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The rank that defines the hand. Quad rank, trip rank, top pair,
    /// highest card of a straight (5 for the wheel) or of a flush.
    pub fn primary_value(&self) -> u8 {
        self.primary_value
    }

    /// The pair of a full house, or the lower pair of two pair.
    pub fn secondary_value(&self) -> u8 {
        self.secondary_value
    }

    /// Remaining tie breakers, highest first.
    pub fn kickers(&self) -> &[u8] {
        &self.kickers[..self.num_kickers as usize]
    }

    /// The five cards forming the hand.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }
}

impl PartialEq for HandEvaluation {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandEvaluation {}

impl PartialOrd for HandEvaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandEvaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then(self.primary_value.cmp(&other.primary_value))
            .then(self.secondary_value.cmp(&other.secondary_value))
            .then_with(|| {
                // Pairwise through the shorter list. Within one category the
                // kicker counts always match.
                self.kickers()
                    .iter()
                    .zip(other.kickers())
                    .map(|(a, b)| a.cmp(b))
                    .find(|o| *o != Ordering::Equal)
                    .unwrap_or(Ordering::Equal)
            })
    }
}

impl fmt::Display for HandEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.rank)?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_cards() -> [Card; 5] {
        let cards = Card::parse_many("2s3s4s5s7h").unwrap();
        [cards[0], cards[1], cards[2], cards[3], cards[4]]
    }

    #[test]
    fn test_rank_order() {
        for pair in HandRank::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(HandRank::HighCard < HandRank::RoyalFlush);
    }

    #[test]
    fn test_names() {
        assert_eq!("Three of a Kind", HandRank::ThreeOfAKind.name());
        assert_eq!("Royal Flush", HandRank::RoyalFlush.to_string());
    }

    #[test]
    fn test_kickers_sorted_on_construction() {
        let e = HandEvaluation::new(HandRank::HighCard, 13, 0, &[3, 9, 5, 7], dummy_cards());
        assert_eq!(&[9, 7, 5, 3], e.kickers());
    }

    #[test]
    fn test_category_beats_values() {
        let pair = HandEvaluation::new(HandRank::Pair, 14, 0, &[13, 12, 11], dummy_cards());
        let two_pair = HandEvaluation::new(HandRank::TwoPair, 3, 2, &[4], dummy_cards());
        assert!(two_pair > pair);
    }

    #[test]
    fn test_primary_then_secondary_then_kicker() {
        let a = HandEvaluation::new(HandRank::TwoPair, 10, 4, &[2], dummy_cards());
        let b = HandEvaluation::new(HandRank::TwoPair, 10, 5, &[2], dummy_cards());
        let c = HandEvaluation::new(HandRank::TwoPair, 10, 5, &[3], dummy_cards());
        let d = HandEvaluation::new(HandRank::TwoPair, 11, 2, &[3], dummy_cards());
        assert!(a < b);
        assert!(b < c);
        assert!(c < d);
    }

    #[test]
    fn test_later_kicker_decides() {
        let a = HandEvaluation::new(HandRank::Pair, 8, 0, &[14, 10, 3], dummy_cards());
        let b = HandEvaluation::new(HandRank::Pair, 8, 0, &[14, 10, 4], dummy_cards());
        assert!(a < b);
    }

    #[test]
    fn test_equal_ignores_cards() {
        let other_cards = {
            let c = Card::parse_many("2h3h4h5h7d").unwrap();
            [c[0], c[1], c[2], c[3], c[4]]
        };
        let a = HandEvaluation::new(HandRank::HighCard, 7, 0, &[5, 4, 3, 2], dummy_cards());
        let b = HandEvaluation::new(HandRank::HighCard, 7, 0, &[5, 4, 3, 2], other_cards);
        assert_eq!(a, b);
        assert_eq!(Ordering::Equal, a.cmp(&b));
    }

    #[test]
    #[should_panic]
    fn test_too_many_kickers() {
        HandEvaluation::new(HandRank::HighCard, 7, 0, &[5, 4, 3, 2, 1], dummy_cards());
    }
}
