use super::card::{Card, Rank};
use super::card_iter::CardIter;
use super::hand_rank::{HandEvaluation, HandRank};

/// Find the best five card hand that can be made from `cards`.
///
/// Exactly five cards are scored directly. With more than five every five
/// card subset is scored (6 for six cards, 21 for seven) and the strongest
/// is returned. When several subsets tie any of them may be returned, they
/// all compare equal.
///
/// # Panics
///
/// Panics if fewer than five cards are given. That's a bug in the caller,
/// there is no sensible answer to return.
///
/// # Examples
///
/// ```
/// use holdem_odds::core::{Card, HandRank, evaluate_hand};
///
/// let cards = Card::parse_many("AhKhQhJhTh2c3d").unwrap();
/// assert_eq!(HandRank::RoyalFlush, evaluate_hand(&cards).rank());
/// ```
pub fn evaluate_hand(cards: &[Card]) -> HandEvaluation {
    assert!(
        cards.len() >= 5,
        "Hand evaluation requires at least 5 cards, got {}",
        cards.len()
    );

    let first = evaluate_five([cards[0], cards[1], cards[2], cards[3], cards[4]]);
    if cards.len() == 5 {
        return first;
    }

    // The first combination is the one just scored.
    CardIter::<5>::new(cards)
        .skip(1)
        .map(evaluate_five)
        .fold(first, |best, candidate| {
            if candidate > best { candidate } else { best }
        })
}

/// Ranks grouped by how many times they appear, highest rank first.
#[derive(Debug, Default)]
struct Groups {
    quad: Option<u8>,
    trip: Option<u8>,
    pairs: [u8; 2],
    num_pairs: usize,
    singles: [u8; 5],
    num_singles: usize,
}

impl Groups {
    fn new(cards: &[Card; 5]) -> Self {
        let mut counts = [0u8; 15];
        for c in cards {
            counts[c.rank.value() as usize] += 1;
        }

        let mut groups = Groups::default();
        for value in (Rank::Two.value()..=Rank::Ace.value()).rev() {
            match counts[value as usize] {
                0 => {}
                1 => {
                    groups.singles[groups.num_singles] = value;
                    groups.num_singles += 1;
                }
                2 => {
                    groups.pairs[groups.num_pairs] = value;
                    groups.num_pairs += 1;
                }
                3 => groups.trip = Some(value),
                // Five cards can't hold more than four of one rank.
                _ => groups.quad = Some(value),
            }
        }
        groups
    }

    fn pairs(&self) -> &[u8] {
        &self.pairs[..self.num_pairs]
    }

    fn singles(&self) -> &[u8] {
        &self.singles[..self.num_singles]
    }
}

/// High card of the straight in `values`, which must be sorted highest
/// first. The wheel (A-2-3-4-5) is a five high straight.
fn straight_high(values: &[u8; 5]) -> Option<u8> {
    let distinct = values.windows(2).all(|w| w[0] != w[1]);
    if !distinct {
        return None;
    }
    if values[0] - values[4] == 4 {
        Some(values[0])
    } else if *values == [14, 5, 4, 3, 2] {
        Some(Rank::Five.value())
    } else {
        None
    }
}

/// Score exactly five cards.
fn evaluate_five(mut cards: [Card; 5]) -> HandEvaluation {
    cards.sort_unstable_by(|a, b| b.cmp(a));
    let values = cards.map(|c| c.rank.value());
    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight = straight_high(&values);
    let groups = Groups::new(&cards);

    match (is_flush, straight) {
        (true, Some(high)) if high == Rank::Ace.value() => {
            return HandEvaluation::new(HandRank::RoyalFlush, high, 0, &[], cards);
        }
        (true, Some(high)) => {
            return HandEvaluation::new(HandRank::StraightFlush, high, 0, &[], cards);
        }
        _ => {}
    }

    if let Some(quad) = groups.quad {
        return HandEvaluation::new(HandRank::FourOfAKind, quad, 0, groups.singles(), cards);
    }

    if let (Some(trip), [pair]) = (groups.trip, groups.pairs()) {
        return HandEvaluation::new(HandRank::FullHouse, trip, *pair, &[], cards);
    }

    if is_flush {
        return HandEvaluation::new(HandRank::Flush, values[0], 0, &values[1..], cards);
    }

    if let Some(high) = straight {
        return HandEvaluation::new(HandRank::Straight, high, 0, &[], cards);
    }

    if let Some(trip) = groups.trip {
        return HandEvaluation::new(HandRank::ThreeOfAKind, trip, 0, groups.singles(), cards);
    }

    match groups.pairs() {
        [high, low] => HandEvaluation::new(HandRank::TwoPair, *high, *low, groups.singles(), cards),
        [pair] => HandEvaluation::new(HandRank::Pair, *pair, 0, groups.singles(), cards),
        _ => HandEvaluation::new(HandRank::HighCard, values[0], 0, &values[1..], cards),
    }
}
