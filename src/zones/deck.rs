//! A player's deck: FIFO, drawn from the front, replenished at the back.

use im::Vector;

use crate::core::error::{Result, WarError};
use crate::core::side::Side;

/// Ordered card supply owned by one side.
///
/// Backed by `im::Vector`, so cloning a deck for a snapshot or history
/// entry is O(1) and both ends are cheap to modify.
///
/// ## Usage
///
/// ```
/// use war_engine::core::Side;
/// use war_engine::zones::Deck;
///
/// let mut deck = Deck::new(Side::A, [4, 7]);
/// assert_eq!(deck.draw_front().unwrap(), 4);
///
/// deck.receive_back([1, 2]);
/// assert_eq!(deck.to_vec(), vec![7, 1, 2]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck<C: Clone> {
    owner: Side,
    cards: Vector<C>,
}

impl<C: Clone> Deck<C> {
    /// Create a deck for `owner`, first card on top.
    pub fn new(owner: Side, cards: impl IntoIterator<Item = C>) -> Self {
        Self {
            owner,
            cards: cards.into_iter().collect(),
        }
    }

    /// The side this deck belongs to.
    #[must_use]
    pub fn owner(&self) -> Side {
        self.owner
    }

    /// Remove and return the top card.
    pub fn draw_front(&mut self) -> Result<C> {
        self.cards
            .pop_front()
            .ok_or(WarError::EmptyDeck { side: self.owner })
    }

    /// Append cards to the bottom, keeping their order.
    pub fn receive_back(&mut self, cards: impl IntoIterator<Item = C>) {
        self.cards.extend(cards);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Look at the top card without drawing it.
    #[must_use]
    pub fn peek_front(&self) -> Option<&C> {
        self.cards.front()
    }

    /// Iterate from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &C> {
        self.cards.iter()
    }

    /// Copy the cards out, top first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<C> {
        self.cards.iter().cloned().collect()
    }
}
