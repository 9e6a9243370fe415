use std::fmt::Debug;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use super::card::{Card, NUM_CARDS};

/// Mask with every one of the 52 card bits set.
const FULL_DECK: u64 = (1 << NUM_CARDS) - 1;

/// A set of cards stored as a single `u64`. Bit `n` is set when the card
/// with `Card::index() == n` is in the set.
///
/// # Examples
///
/// ```
/// use holdem_odds::core::{Card, CardBitSet, Rank, Suit};
///
/// let mut set = CardBitSet::new();
/// let card = Card::new(Rank::Ace, Suit::Spade);
/// set.insert(card);
/// assert!(set.contains(card));
/// assert_eq!(1, set.count());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CardBitSet {
    cards: u64,
}

impl CardBitSet {
    /// Create an empty set.
    pub const fn new() -> Self {
        Self { cards: 0 }
    }

    /// Create a set that contains all 52 cards.
    pub const fn full() -> Self {
        Self { cards: FULL_DECK }
    }

    /// Insert a card. Returns true if the card wasn't already there.
    pub fn insert(&mut self, card: Card) -> bool {
        let bit = 1u64 << card.index();
        let added = self.cards & bit == 0;
        self.cards |= bit;
        added
    }

    /// Remove a card. Returns true if the card was in the set.
    pub fn remove(&mut self, card: Card) -> bool {
        let bit = 1u64 << card.index();
        let removed = self.cards & bit != 0;
        self.cards &= !bit;
        removed
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards & (1u64 << card.index()) != 0
    }

    pub fn count(&self) -> usize {
        self.cards.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }

    pub fn clear(&mut self) {
        self.cards = 0;
    }

    /// Get the `n`th card of the set in index order, if there are that many.
    ///
    /// This is what allows drawing a uniformly random card without building
    /// a vector of candidates first.
    pub fn nth(&self, n: usize) -> Option<Card> {
        if n >= self.count() {
            return None;
        }
        let mut remaining = self.cards;
        // Clear the lowest set bit n times, the next lowest is the answer.
        for _ in 0..n {
            remaining &= remaining - 1;
        }
        Card::from_index(remaining.trailing_zeros() as u8)
    }

    pub fn iter(&self) -> CardBitSetIter {
        CardBitSetIter(self.cards)
    }
}

impl Debug for CardBitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for CardBitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            cards: self.cards | rhs.cards,
        }
    }
}

impl BitAnd for CardBitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self {
            cards: self.cards & rhs.cards,
        }
    }
}

impl BitXor for CardBitSet {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Self {
            cards: self.cards ^ rhs.cards,
        }
    }
}

/// The complement is taken within the 52 card universe.
impl Not for CardBitSet {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self {
            cards: !self.cards & FULL_DECK,
        }
    }
}

impl FromIterator<Card> for CardBitSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut set = Self::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

/// Iterator over the cards of a `CardBitSet`, lowest index first.
#[derive(Debug, Clone)]
pub struct CardBitSetIter(u64);

impl Iterator for CardBitSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Card::from_index(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl IntoIterator for CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
