use rand::Rng;

use super::card::{Card, NUM_CARDS};
use super::card_bit_set::CardBitSet;

/// The 52 card deck along with the set of cards that are already in use.
///
/// Cards are never removed from the deck, they are only marked as used. A
/// card can't be drawn while it's marked as used, so a card will never be
/// dealt twice without being released in between.
///
/// `Clone` is the way to get an independent copy; the used set is copied
/// and the two decks share nothing afterwards.
///
/// # Examples
///
/// ```
/// use holdem_odds::core::{Card, Deck};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut deck = Deck::new();
/// deck.mark_used_all(&Card::parse_many("AsKs").unwrap());
/// assert_eq!(50, deck.remaining_count());
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let board = deck.draw_random_cards(5, &mut rng);
/// assert_eq!(5, board.len());
/// assert_eq!(45, deck.remaining_count());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    used: CardBitSet,
}

impl Deck {
    /// A full deck with nothing used.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every card of the deck, used or not.
    pub fn all_cards(&self) -> Vec<Card> {
        Card::all().collect()
    }

    /// The cards that can still be drawn.
    pub fn available_cards(&self) -> Vec<Card> {
        self.available().iter().collect()
    }

    /// The cards that can still be drawn, as a set.
    pub fn available(&self) -> CardBitSet {
        !self.used
    }

    pub fn used_cards(&self) -> CardBitSet {
        self.used
    }

    pub fn is_available(&self, card: Card) -> bool {
        !self.used.contains(card)
    }

    pub fn remaining_count(&self) -> usize {
        NUM_CARDS - self.used.count()
    }

    pub fn total_count(&self) -> usize {
        NUM_CARDS
    }

    /// Mark a card as used. Marking a used card again does nothing.
    pub fn mark_used(&mut self, card: Card) {
        self.used.insert(card);
    }

    pub fn mark_used_all(&mut self, cards: &[Card]) {
        for card in cards {
            self.used.insert(*card);
        }
    }

    /// Release a card so it can be drawn again. Releasing an available card
    /// does nothing.
    pub fn mark_available(&mut self, card: Card) {
        self.used.remove(card);
    }

    pub fn mark_available_all(&mut self, cards: &[Card]) {
        for card in cards {
            self.used.remove(*card);
        }
    }

    /// Make every card available again.
    pub fn reset(&mut self) {
        self.used.clear();
    }

    /// Explicit alias for `clone`.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Pick one of the available cards uniformly at random and mark it used.
    ///
    /// Returns `None` if every card is already used.
    pub fn draw_random_card<R: Rng>(&mut self, rng: &mut R) -> Option<Card> {
        let available = self.available();
        let remaining = available.count();
        if remaining == 0 {
            return None;
        }
        let card = available.nth(rng.random_range(0..remaining))?;
        self.used.insert(card);
        Some(card)
    }

    /// Draw up to `count` cards one after another.
    ///
    /// If the deck runs out the cards drawn so far are returned, so callers
    /// need to check the length.
    pub fn draw_random_cards<R: Rng>(&mut self, count: usize, rng: &mut R) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(count.min(self.remaining_count()));
        for _ in 0..count {
            match self.draw_random_card(rng) {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }
}
