use super::card::Card;

/// Given some cards create every group of `N` of them.
///
/// Groups come out in lexicographic order of their positions in the input
/// slice. The state is just the current positions, so there's no recursion
/// and no allocation per group.
///
/// # Examples
///
/// ```
/// use holdem_odds::core::{Card, CardIter};
///
/// let cards = Card::parse_many("AsKsQsJsTs9s8s").unwrap();
/// assert_eq!(21, CardIter::<5>::new(&cards).count());
/// ```
#[derive(Debug, Clone)]
pub struct CardIter<'a, const N: usize> {
    /// All the cards to choose from.
    possible_cards: &'a [Card],

    /// Offsets into `possible_cards` for the next group, strictly increasing.
    /// None once everything has been produced.
    idx: Option<[usize; N]>,
}

impl<'a, const N: usize> CardIter<'a, N> {
    /// Create a new `CardIter` over a slice of cards.
    pub fn new(possible_cards: &'a [Card]) -> Self {
        let idx = if N <= possible_cards.len() {
            let mut start = [0; N];
            for (i, slot) in start.iter_mut().enumerate() {
                *slot = i;
            }
            Some(start)
        } else {
            None
        };
        Self {
            possible_cards,
            idx,
        }
    }
}

impl<const N: usize> Iterator for CardIter<'_, N> {
    type Item = [Card; N];

    fn next(&mut self) -> Option<[Card; N]> {
        let cards = self.possible_cards;
        let idx = self.idx.as_mut()?;
        let current: [usize; N] = *idx;
        let result = current.map(|i| cards[i]);

        // Find the right most position that can still move forward. Position
        // `i` can go as far as `len - N + i` and still leave room after it.
        let len = cards.len();
        match (0..N).rev().find(|&i| idx[i] < len - N + i) {
            Some(i) => {
                idx[i] += 1;
                for j in i + 1..N {
                    idx[j] = idx[j - 1] + 1;
                }
            }
            None => self.idx = None,
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::core::{Rank, Suit};

    #[test]
    fn test_iter_one() {
        let cards = vec![Card::new(Rank::Two, Suit::Spade)];
        let groups: Vec<[Card; 1]> = CardIter::new(&cards).collect();
        assert_eq!(vec![[Card::new(Rank::Two, Suit::Spade)]], groups);
    }

    #[test]
    fn test_iter_two() {
        let cards = Card::parse_many("2s3s4s").unwrap();

        // Make sure that we get the correct number back.
        assert_eq!(3, CardIter::<2>::new(&cards).count());

        // Make sure that everything has two cards and they are different.
        for [a, b] in CardIter::<2>::new(&cards) {
            assert!(a != b);
        }
    }

    #[test]
    fn test_iter_lexicographic_order() {
        let cards = Card::parse_many("2s3s4s5s").unwrap();
        let groups: Vec<[Card; 3]> = CardIter::new(&cards).collect();
        let expected: Vec<[Card; 3]> = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]]
            .iter()
            .map(|idx| idx.map(|i| cards[i]))
            .collect();
        assert_eq!(expected, groups);
    }

    #[test]
    fn test_iter_not_enough_cards() {
        let cards = Card::parse_many("AsKs").unwrap();
        assert_eq!(0, CardIter::<5>::new(&cards).count());
    }

    #[test]
    fn test_iter_exact_size() {
        let cards = Card::parse_many("AsKsQsJsTs").unwrap();
        let groups: Vec<[Card; 5]> = CardIter::new(&cards).collect();
        assert_eq!(1, groups.len());
        assert_eq!(cards.as_slice(), &groups[0]);
    }

    #[test]
    fn test_iter_seven_choose_five_unique() {
        let cards = Card::parse_many("2h2d8d8sKd6sTh").unwrap();
        let groups: HashSet<[Card; 5]> = CardIter::<5>::new(&cards).collect();
        assert_eq!(21, groups.len());
    }

    #[test]
    fn test_iter_full_deck() {
        let deck: Vec<Card> = Card::all().collect();
        assert_eq!(1_326, CardIter::<2>::new(&deck).count());
    }
}
