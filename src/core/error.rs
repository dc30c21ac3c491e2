//! Error types for the War engine.

use thiserror::Error;

use super::side::Side;

#[derive(Error, Debug)]
pub enum WarError {
    /// Neither side was given any cards.
    #[error("both initial decks are empty")]
    EmptyDecks,

    /// Two card values have no ordering between them (e.g. `NaN`).
    #[error("cards {left} and {right} cannot be ordered")]
    Incomparable { left: String, right: String },

    /// A draw was attempted from an empty deck outside the exhaustion check.
    #[error("attempted to draw from the empty deck of {side}")]
    EmptyDeck { side: Side },

    #[error("the game has already finished")]
    GameOver,

    #[error("game did not finish within {limit} rounds")]
    RoundLimitExceeded { limit: u64 },

    /// A decoded snapshot describes a state no game can reach.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("snapshot encoding error: {0}")]
    Snapshot(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, WarError>;
