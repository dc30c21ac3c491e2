//! The pot: cards withheld from both decks until a comparison resolves.

use smallvec::SmallVec;

/// Append-only buffer of withheld cards.
///
/// Empty at the start and end of every resolved round. It only grows across
/// consecutive ties; a single resolved comparison drains it entirely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pot<C> {
    /// SmallVec keeps the common two-card pot off the heap.
    cards: SmallVec<[C; 8]>,
}

impl<C> Default for Pot<C> {
    fn default() -> Self {
        Self {
            cards: SmallVec::new(),
        }
    }
}

impl<C> Pot<C> {
    /// Create an empty pot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append cards in arrival order.
    pub fn add(&mut self, cards: impl IntoIterator<Item = C>) {
        self.cards.extend(cards);
    }

    /// Take every held card, in arrival order, leaving the pot empty.
    pub fn drain(&mut self) -> Vec<C> {
        std::mem::take(&mut self.cards).into_vec()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &C> {
        self.cards.iter()
    }
}
