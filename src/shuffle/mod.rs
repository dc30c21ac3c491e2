//! Shuffle service: permutes a drained pot before it joins the winner's deck.
//!
//! The random source is always passed in by the caller; each game owns its
//! shuffler, so runs never share state.
//!
//! - `GameRng`: uniform random permutation, reproducible from its seed
//! - `PreserveOrder`: identity permutation, for exact-order tests and replays

use crate::core::rng::GameRng;

/// Permutes an ordered sequence of cards.
pub trait ShuffleService {
    /// Return a permutation of `cards`.
    fn permute<C>(&mut self, cards: Vec<C>) -> Vec<C>;
}

impl ShuffleService for GameRng {
    fn permute<C>(&mut self, mut cards: Vec<C>) -> Vec<C> {
        self.shuffle(&mut cards);
        cards
    }
}

impl<S: ShuffleService + ?Sized> ShuffleService for &mut S {
    fn permute<C>(&mut self, cards: Vec<C>) -> Vec<C> {
        (**self).permute(cards)
    }
}

/// Leaves cards in arrival order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PreserveOrder;

impl ShuffleService for PreserveOrder {
    fn permute<C>(&mut self, cards: Vec<C>) -> Vec<C> {
        cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserve_order() {
        assert_eq!(PreserveOrder.permute(vec![3, 1, 2]), vec![3, 1, 2]);
    }

    #[test]
    fn test_rng_permutation_is_reproducible() {
        let cards: Vec<u32> = (0..16).collect();

        let first = GameRng::new(11).permute(cards.clone());
        let second = GameRng::new(11).permute(cards.clone());
        assert_eq!(first, second);

        let mut sorted = first;
        sorted.sort_unstable();
        assert_eq!(sorted, cards);
    }

    #[test]
    fn test_borrowed_shuffler() {
        let mut rng = GameRng::new(3);
        let via_ref = (&mut rng).permute(vec![1, 2, 3, 4, 5, 6]);
        let direct = GameRng::new(3).permute(vec![1, 2, 3, 4, 5, 6]);

        assert_eq!(via_ref, direct);
    }
}
