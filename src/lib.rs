//! # war-engine
//!
//! A deterministic rules engine for the two-player card game War.
//!
//! ## Design Principles
//!
//! 1. **Injected Randomness**: Every game owns its shuffle service. Given the
//!    same seed and decks, a game replays identically.
//!
//! 2. **Any Ordered Card**: Cards are any `Clone + PartialOrd + Debug` value.
//!    Values that cannot be ordered are rejected before play starts.
//!
//! 3. **One Source of Truth**: The winner is always the side holding the only
//!    non-empty deck when the game finishes, including war forfeits.
//!
//! ## Modules
//!
//! - `core`: Sides, RNG, configuration, errors
//! - `cards`: Card trait and comparator
//! - `zones`: Decks and the pot
//! - `shuffle`: Shuffle service trait and implementations
//! - `rules`: The round resolver state machine, outcomes, snapshots
//! - `simulation`: Batch runs over independent seeds
//!
//! ## Example
//!
//! ```
//! use war_engine::WarConfig;
//!
//! let mut game = WarConfig::reference().with_seed(42).build().unwrap();
//! let outcome = game.run().unwrap();
//!
//! assert!(game.deck(outcome.winner).len() > 0);
//! assert!(game.deck(outcome.loser()).is_empty());
//! assert_eq!(game.total_cards(), 30);
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod shuffle;
pub mod rules;
pub mod simulation;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, Result, Side, SideMap, WarConfig, WarError};

pub use crate::cards::{compare, Card, Comparison};

pub use crate::zones::{Deck, Pot};

pub use crate::shuffle::{PreserveOrder, ShuffleService};

pub use crate::rules::{
    GamePhase, GameStats, Outcome, OutcomeKind, Prediction,
    RoundRecord, RoundResolution, WarGame, WarSnapshot,
};

pub use crate::simulation::{simulate_many, BatchSummary};
