use std::fmt;
use std::str::FromStr;

use super::error::CardParseError;

/// Card suits. The ordinal is only used to give cards a total order, it has
/// no meaning in hand strength.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Hearts
    Heart = 1,
    /// Diamonds
    Diamond = 2,
    /// Clubs
    Club = 3,
}

/// Every suit in ordinal order.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

/// Two colors of a standard deck. Only used for display.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum CardColor {
    Red,
    Black,
}

impl Suit {
    /// Return all the suits in ordinal order.
    pub const fn suits() -> [Self; 4] {
        SUITS
    }

    /// Get the suit from its ordinal. Panics for values over 3.
    pub fn from_u8(s: u8) -> Self {
        SUITS[s as usize]
    }

    /// The ordinal used for ordering and indexing.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Unicode symbol for the suit.
    pub const fn symbol(self) -> char {
        match self {
            Self::Spade => '♠',
            Self::Heart => '♥',
            Self::Diamond => '♦',
            Self::Club => '♣',
        }
    }

    /// Single ascii character, the same one accepted when parsing.
    pub const fn to_char(self) -> char {
        match self {
            Self::Spade => 's',
            Self::Heart => 'h',
            Self::Diamond => 'd',
            Self::Club => 'c',
        }
    }

    pub const fn color(self) -> CardColor {
        match self {
            Self::Spade | Self::Club => CardColor::Black,
            Self::Heart | Self::Diamond => CardColor::Red,
        }
    }

    /// Given a character parse it into a suit. Both ascii letters (upper or
    /// lower case) and the unicode symbols are accepted.
    pub fn from_char(s: char) -> Option<Self> {
        match s {
            's' | 'S' | '♠' => Some(Self::Spade),
            'h' | 'H' | '♥' => Some(Self::Heart),
            'd' | 'D' | '♦' => Some(Self::Diamond),
            'c' | 'C' | '♣' => Some(Self::Club),
            _ => None,
        }
    }
}

/// Card rank. The discriminant is the ordinal value used everywhere in hand
/// evaluation, with the ace high at 14.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    /// Ace is high by default. See `low_ace_value` for the wheel.
    Ace = 14,
}

/// Every rank from lowest to highest.
const RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

impl Rank {
    /// Get all of the ranks, lowest first.
    pub const fn ranks() -> [Self; 13] {
        RANKS
    }

    /// Ordinal value of the rank, 2 through 14.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Same as `value` except the ace counts as 1. Only the wheel straight
    /// (A-2-3-4-5) uses this.
    pub const fn low_ace_value(self) -> u8 {
        match self {
            Self::Ace => 1,
            _ => self as u8,
        }
    }

    /// Take an ordinal value (2..=14) and turn it into a rank.
    pub fn from_value(v: u8) -> Option<Self> {
        if (2..=14).contains(&v) {
            Some(RANKS[(v - 2) as usize])
        } else {
            None
        }
    }

    /// Display symbol. Ten is written as "10".
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Single character form, 'T' for ten.
    pub const fn to_char(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            '4' => Some(Self::Four),
            '5' => Some(Self::Five),
            '6' => Some(Self::Six),
            '7' => Some(Self::Seven),
            '8' => Some(Self::Eight),
            '9' => Some(Self::Nine),
            'T' | 't' => Some(Self::Ten),
            'J' | 'j' => Some(Self::Jack),
            'Q' | 'q' => Some(Self::Queen),
            'K' | 'k' => Some(Self::King),
            'A' | 'a' => Some(Self::Ace),
            _ => None,
        }
    }
}

/// The number of cards in a standard deck.
pub const NUM_CARDS: usize = 52;

/// A single playing card. Cards are ordered by rank first and then suit.
///
/// # Examples
///
/// ```
/// use holdem_odds::core::{Card, Rank, Suit};
///
/// let card: Card = "As".parse().unwrap();
/// assert_eq!(Card::new(Rank::Ace, Suit::Spade), card);
/// assert_eq!("A♠", card.to_string());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Dense index in `0..52`, `suit * 13 + (rank - 2)`. This is what
    /// `CardBitSet` uses for its bit positions.
    pub const fn index(self) -> u8 {
        self.suit as u8 * 13 + (self.rank as u8 - 2)
    }

    /// Inverse of `index`. Returns None for anything at or over 52.
    pub fn from_index(idx: u8) -> Option<Self> {
        if (idx as usize) < NUM_CARDS {
            Some(Self {
                suit: Suit::from_u8(idx / 13),
                rank: RANKS[(idx % 13) as usize],
            })
        } else {
            None
        }
    }

    /// `rank * 4 + suit`. Unique per card but not a dense packing; use
    /// `index` for array lookups.
    pub const fn numeric_value(self) -> u8 {
        self.rank as u8 * 4 + self.suit as u8
    }

    /// Human readable form, for example "10♥".
    pub fn description(&self) -> String {
        format!("{}{}", self.rank.symbol(), self.suit.symbol())
    }

    /// Iterate over all 52 cards, suit by suit.
    pub fn all() -> impl Iterator<Item = Card> {
        SUITS
            .into_iter()
            .flat_map(|suit| RANKS.into_iter().map(move |rank| Card::new(rank, suit)))
    }

    /// Parse a run of concatenated cards such as "AsKd" or "Th9h8h".
    pub fn parse_many(s: &str) -> Result<Vec<Card>, CardParseError> {
        let mut result = Vec::new();
        let mut chars = s.chars().filter(|c| !c.is_whitespace()).peekable();
        while let Some(rank_char) = chars.next() {
            // "10" is accepted as well as "T".
            let rank = if rank_char == '1' && chars.peek() == Some(&'0') {
                chars.next();
                Rank::Ten
            } else {
                Rank::from_char(rank_char).ok_or(CardParseError::UnexpectedRankChar(rank_char))?
            };
            let suit_char = chars.next().ok_or(CardParseError::UnexpectedEnd)?;
            let suit = Suit::from_char(suit_char).ok_or(CardParseError::UnexpectedSuitChar(suit_char))?;
            result.push(Card::new(rank, suit));
        }
        Ok(result)
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.suit.cmp(&other.suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = Card::parse_many(s)?;
        match cards.as_slice() {
            [card] => Ok(*card),
            [] => Err(CardParseError::UnexpectedEnd),
            _ => Err(CardParseError::TooManyChars),
        }
    }
}

impl TryFrom<&str> for Card {
    type Error = CardParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_constructor() {
        let c = Card::new(Rank::Three, Suit::Spade);
        assert_eq!(Suit::Spade, c.suit);
        assert_eq!(Rank::Three, c.rank);
    }

    #[test]
    fn test_compare_rank_first() {
        let a = Card::new(Rank::Three, Suit::Club);
        let b = Card::new(Rank::Four, Suit::Spade);
        assert!(a < b);
    }

    #[test]
    fn test_compare_suit_breaks_ties() {
        let a = Card::new(Rank::King, Suit::Spade);
        let b = Card::new(Rank::King, Suit::Heart);
        assert!(a < b);
        assert_ne!(a, b);
    }

    #[test]
    fn test_rank_values() {
        assert_eq!(2, Rank::Two.value());
        assert_eq!(14, Rank::Ace.value());
        assert_eq!(1, Rank::Ace.low_ace_value());
        assert_eq!(5, Rank::Five.low_ace_value());
        assert_eq!(Some(Rank::Jack), Rank::from_value(11));
        assert_eq!(None, Rank::from_value(1));
        assert_eq!(None, Rank::from_value(15));
    }

    #[test]
    fn test_suit_color() {
        assert_eq!(CardColor::Black, Suit::Spade.color());
        assert_eq!(CardColor::Black, Suit::Club.color());
        assert_eq!(CardColor::Red, Suit::Heart.color());
        assert_eq!(CardColor::Red, Suit::Diamond.color());
    }

    #[test]
    fn test_index_is_dense_and_unique() {
        let indices: HashSet<u8> = Card::all().map(Card::index).collect();
        assert_eq!(NUM_CARDS, indices.len());
        assert!(indices.iter().all(|i| (*i as usize) < NUM_CARDS));
        for card in Card::all() {
            assert_eq!(Some(card), Card::from_index(card.index()));
        }
        assert_eq!(None, Card::from_index(52));
    }

    #[test]
    fn test_numeric_value_unique() {
        let values: HashSet<u8> = Card::all().map(Card::numeric_value).collect();
        assert_eq!(NUM_CARDS, values.len());
    }

    #[test]
    fn test_parse_single() {
        assert_eq!(
            Card::new(Rank::Ten, Suit::Heart),
            "Th".parse::<Card>().unwrap()
        );
        assert_eq!(
            Card::new(Rank::Ten, Suit::Heart),
            Card::try_from("10h").unwrap()
        );
        assert_eq!(
            Card::new(Rank::Queen, Suit::Club),
            Card::try_from("Q♣").unwrap()
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Err(CardParseError::UnexpectedRankChar('X')),
            "Xs".parse::<Card>()
        );
        assert_eq!(
            Err(CardParseError::UnexpectedSuitChar('x')),
            "Ax".parse::<Card>()
        );
        assert_eq!(Err(CardParseError::UnexpectedEnd), "A".parse::<Card>());
        assert_eq!(Err(CardParseError::TooManyChars), "AsKs".parse::<Card>());
    }

    #[test]
    fn test_parse_many() {
        let cards = Card::parse_many("AsKd 10c").unwrap();
        assert_eq!(
            vec![
                Card::new(Rank::Ace, Suit::Spade),
                Card::new(Rank::King, Suit::Diamond),
                Card::new(Rank::Ten, Suit::Club),
            ],
            cards
        );
    }

    #[test]
    fn test_display() {
        assert_eq!("10♦", Card::new(Rank::Ten, Suit::Diamond).to_string());
        assert_eq!("K♣", Card::new(Rank::King, Suit::Club).description());
    }
}
