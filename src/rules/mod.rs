//! The War rules engine.
//!
//! `WarGame` orchestrates the comparator, the pot, the shuffle service and
//! both decks until one side can no longer play:
//! - `resolver`: the round state machine
//! - `outcome`: terminal result and its wire shape
//! - `record`: per-round records and statistics
//! - `snapshot`: checkpoint / restore for seeded games

pub mod outcome;
pub mod record;
pub mod resolver;
pub mod snapshot;

pub use outcome::{Outcome, OutcomeKind, Prediction};
pub use record::{GameStats, RoundRecord, RoundResolution};
pub use resolver::{GamePhase, WarGame};
pub use snapshot::WarSnapshot;
