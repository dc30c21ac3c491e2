//! Terminal result of a game.

use serde::{Deserialize, Serialize};

use crate::core::side::Side;

/// How the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeKind {
    /// The loser's deck ran out after losing a comparison.
    Exhausted,
    /// The loser could not commit a card while a war was pending and
    /// forfeited the pot.
    Forfeit,
}

/// Result of a completed game. Produced exactly once per run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    /// The side whose deck survived.
    pub winner: Side,
    pub kind: OutcomeKind,
}

impl Outcome {
    #[must_use]
    pub const fn loser(&self) -> Side {
        self.winner.opponent()
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        self.winner == side
    }
}

/// Wire shape returned to prediction clients: `{"winning_player_id": "p1"}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub winning_player_id: Side,
}

impl From<Outcome> for Prediction {
    fn from(outcome: Outcome) -> Self {
        Self {
            winning_player_id: outcome.winner,
        }
    }
}
