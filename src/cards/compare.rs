//! Card comparator.
//!
//! Cards are opaque ordered values. The comparator only reports which of two
//! face-up cards is higher; it knows nothing about decks or the pot.

use std::cmp::Ordering;
use std::fmt;

use crate::core::error::{Result, WarError};
use crate::core::side::Side;

/// Any value usable as a War card.
///
/// Cards have no identity beyond their value. `PartialOrd` is enough;
/// values that turn out to be unordered (like `f64::NAN`) are rejected
/// when a game is configured.
pub trait Card: Clone + PartialOrd + fmt::Debug {}

impl<T: Clone + PartialOrd + fmt::Debug> Card for T {}

/// Result of comparing side A's card against side B's card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    /// A's card is strictly higher.
    Higher,
    /// B's card is strictly higher.
    Lower,
    /// Equal values: war.
    Tie,
}

impl Comparison {
    /// The side that takes the pot, or `None` on a tie.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Comparison::Higher => Some(Side::A),
            Comparison::Lower => Some(Side::B),
            Comparison::Tie => None,
        }
    }
}

/// Compare A's card against B's card.
pub fn compare<C: Card>(a: &C, b: &C) -> Result<Comparison> {
    match a.partial_cmp(b) {
        Some(Ordering::Greater) => Ok(Comparison::Higher),
        Some(Ordering::Less) => Ok(Comparison::Lower),
        Some(Ordering::Equal) => Ok(Comparison::Tie),
        None => Err(WarError::Incomparable {
            left: format!("{a:?}"),
            right: format!("{b:?}"),
        }),
    }
}

/// Check that every card can be ordered against every other card,
/// itself included.
///
/// Each card is compared with itself, then the cards are merge-sorted and
/// every sorted neighbour pair must be ordered `<=`; transitivity then orders
/// every pair in O(n log n) comparisons. A `PartialOrd` that breaks
/// transitivity falls back to the O(n²) pairwise scan.
pub fn ensure_comparable<'a, C: Card + 'a>(cards: impl IntoIterator<Item = &'a C>) -> Result<()> {
    let cards: Vec<&C> = cards.into_iter().collect();
    for card in &cards {
        compare(*card, *card)?;
    }

    let sorted = merge_sort(cards.clone())?;
    for pair in sorted.windows(2) {
        if compare(pair[0], pair[1])? == Comparison::Higher {
            return ensure_pairwise(&cards);
        }
    }
    Ok(())
}

/// Stable merge sort that stops at the first unordered pair.
fn merge_sort<'a, C: Card>(mut cards: Vec<&'a C>) -> Result<Vec<&'a C>> {
    if cards.len() <= 1 {
        return Ok(cards);
    }
    let right = cards.split_off(cards.len() / 2);
    let left = merge_sort(cards)?;
    let right = merge_sort(right)?;

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    while let (Some(&l), Some(&r)) = (left.peek(), right.peek()) {
        if compare(l, r)? == Comparison::Higher {
            merged.push(r);
            right.next();
        } else {
            merged.push(l);
            left.next();
        }
    }
    merged.extend(left);
    merged.extend(right);
    Ok(merged)
}

fn ensure_pairwise<C: Card>(cards: &[&C]) -> Result<()> {
    for (i, left) in cards.iter().enumerate() {
        for right in &cards[i + 1..] {
            compare(*left, *right)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_integers() {
        assert_eq!(compare(&9, &3).unwrap(), Comparison::Higher);
        assert_eq!(compare(&3, &9).unwrap(), Comparison::Lower);
        assert_eq!(compare(&5, &5).unwrap(), Comparison::Tie);
    }

    #[test]
    fn test_comparison_winner() {
        assert_eq!(Comparison::Higher.winner(), Some(Side::A));
        assert_eq!(Comparison::Lower.winner(), Some(Side::B));
        assert_eq!(Comparison::Tie.winner(), None);
    }

    #[test]
    fn test_compare_any_ordered_type() {
        assert_eq!(compare(&"queen", &"jack").unwrap(), Comparison::Higher);
        assert_eq!(compare(&(2, 'a'), &(2, 'b')).unwrap(), Comparison::Lower);
    }

    #[test]
    fn test_compare_nan_fails() {
        let err = compare(&1.0, &f64::NAN).unwrap_err();
        assert!(matches!(err, WarError::Incomparable { .. }));
        assert_eq!(err.to_string(), "cards 1.0 and NaN cannot be ordered");
    }

    #[test]
    fn test_ensure_comparable() {
        assert!(ensure_comparable(&[1, 5, 3]).is_ok());
        assert!(ensure_comparable(&[] as &[i32]).is_ok());
        assert!(ensure_comparable(&[1.5, 2.5]).is_ok());
    }

    #[test]
    fn test_ensure_comparable_catches_lone_nan() {
        assert!(ensure_comparable(&[f64::NAN]).is_err());
    }

    /// Ordered by bit-set inclusion: `0b01` and `0b10` are unordered.
    #[derive(Clone, Debug, PartialEq)]
    struct Flags(u8);

    impl PartialOrd for Flags {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            let common = self.0 & other.0;
            if self.0 == other.0 {
                Some(Ordering::Equal)
            } else if common == self.0 {
                Some(Ordering::Less)
            } else if common == other.0 {
                Some(Ordering::Greater)
            } else {
                None
            }
        }
    }

    #[test]
    fn test_ensure_comparable_partial_order_chain() {
        assert!(ensure_comparable(&[Flags(0b11), Flags(0b00), Flags(0b01)]).is_ok());
    }

    #[test]
    fn test_ensure_comparable_partial_order_unordered_pair() {
        let result = ensure_comparable(&[Flags(0b01), Flags(0b10), Flags(0b00)]);
        assert!(matches!(result, Err(WarError::Incomparable { .. })));
    }

    #[test]
    fn test_ensure_comparable_large_deck() {
        let cards: Vec<u32> = (0..100_000).rev().collect();
        assert!(ensure_comparable(&cards).is_ok());
    }
}
