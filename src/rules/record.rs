//! Per-round records and whole-game statistics.

use serde::{Deserialize, Serialize};

use crate::core::side::Side;

/// What a single round did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResolution {
    /// The side took the whole pot.
    Won(Side),
    /// Tie; both sides committed an extra card and the pot stays unresolved.
    War,
    /// The side could not commit a card and forfeited the pot to its opponent.
    Forfeit(Side),
}

/// One round of play, for replay and debugging.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord<C> {
    /// Round number, starting at 1.
    pub round: u64,

    /// The compared cards (A's, B's). `None` if a side could not draw one.
    pub face_up: Option<(C, C)>,

    pub resolution: RoundResolution,

    /// Cards in the pot when the round ended, before any award.
    pub pot_size: usize,
}

/// Running statistics for one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    /// Rounds played.
    pub rounds: u64,

    /// Tied comparisons.
    pub wars: u64,

    /// Most consecutive tied rounds.
    pub longest_war_chain: u32,

    /// Most cards the pot ever held at once.
    pub largest_pot: usize,
}
