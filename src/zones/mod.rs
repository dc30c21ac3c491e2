//! Card containers: the two decks and the pot.
//!
//! A card in play is in exactly one of {deck A, deck B, pot} at any time.
//! Only the resolver moves cards between them.
//!
//! ## Key Types
//!
//! - `Deck`: FIFO per-side supply (draw front, receive back)
//! - `Pot`: Ordered buffer of withheld cards during a comparison or war

pub mod deck;
pub mod pot;

pub use deck::Deck;
pub use pot::Pot;
