//! Checkpoint and restore for seeded games.
//!
//! A `WarSnapshot` captures everything needed to continue a game exactly
//! where it left off: both decks, the pot, the RNG word position and the
//! running statistics. Round history is not captured; a restored game
//! records from the restore point onward if asked to.
//!
//! Decoded bytes are untrusted: `restore` rejects snapshots whose phase
//! disagrees with the decks, so a restored game keeps the one-empty-deck
//! invariant the resolver relies on.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::cards::{ensure_comparable, Card};
use crate::core::error::{Result, WarError};
use crate::core::rng::{GameRng, GameRngState};
use crate::core::side::{Side, SideMap};
use crate::zones::{Deck, Pot};

use super::record::GameStats;
use super::resolver::{GamePhase, WarGame};

/// Serializable game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WarSnapshot<C> {
    /// Deck contents, top card first.
    pub decks: SideMap<Vec<C>>,
    /// Pot contents in arrival order.
    pub pot: Vec<C>,
    pub rng: GameRngState,
    pub phase: GamePhase,
    pub stats: GameStats,
    pub war_chain: u32,
    pub round_limit: Option<u64>,
}

impl<C: Serialize> WarSnapshot<C> {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }
}

impl<C: DeserializeOwned> WarSnapshot<C> {
    /// Decode bytes produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl<C: Card> WarSnapshot<C> {
    /// Check the snapshot describes a reachable game state.
    ///
    /// - At least one card is in play.
    /// - Every card can be ordered against every other.
    /// - A finished game has an empty pot, an empty loser deck and a
    ///   non-empty winner deck.
    /// - A game in play has either a pending war (non-empty pot) or two
    ///   non-empty decks.
    pub fn validate(&self) -> Result<()> {
        let empty = self.decks.map(Vec::is_empty);
        if empty[Side::A] && empty[Side::B] && self.pot.is_empty() {
            return Err(WarError::EmptyDecks);
        }

        ensure_comparable(self.decks[Side::A].iter().chain(&self.decks[Side::B]).chain(&self.pot))?;

        match self.phase {
            GamePhase::Finished(outcome) => {
                if !self.pot.is_empty() || empty[outcome.winner] || !empty[outcome.loser()] {
                    return Err(WarError::InvalidSnapshot(format!(
                        "finished with {} as winner, but it must hold every card",
                        outcome.winner
                    )));
                }
            }
            GamePhase::Playing => {
                if self.pot.is_empty() && (empty[Side::A] || empty[Side::B]) {
                    return Err(WarError::InvalidSnapshot(
                        "in play with an empty deck and no pending war".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

impl<C: Card> WarGame<C, GameRng> {
    /// Capture the current state.
    #[must_use]
    pub fn snapshot(&self) -> WarSnapshot<C> {
        WarSnapshot {
            decks: self.decks.map(Deck::to_vec),
            pot: self.pot.iter().cloned().collect(),
            rng: self.shuffler.state(),
            phase: self.phase,
            stats: self.stats.clone(),
            war_chain: self.war_chain,
            round_limit: self.round_limit,
        }
    }

    /// Rebuild a game from a snapshot, after `WarSnapshot::validate`.
    pub fn restore(snapshot: WarSnapshot<C>, record_history: bool) -> Result<Self> {
        snapshot.validate()?;

        let WarSnapshot {
            decks,
            pot,
            rng,
            phase,
            stats,
            war_chain,
            round_limit,
        } = snapshot;

        let mut restored_pot = Pot::new();
        restored_pot.add(pot);

        Ok(Self {
            decks: SideMap::from_fn(|side| Deck::new(side, decks[side].iter().cloned())),
            pot: restored_pot,
            shuffler: GameRng::from_state(&rng),
            phase,
            stats,
            war_chain,
            round_limit,
            history: record_history.then(Vec::new),
        })
    }
}
