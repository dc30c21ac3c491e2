//! Game configuration.
//!
//! A `WarConfig` carries everything a run needs:
//! - The two initial decks (front of the `Vec` is the top of the deck)
//! - An optional seed for the shuffle service
//! - An optional round limit
//! - Whether to keep a per-round history
//!
//! Configurations are validated before any simulation starts.

use serde::{Deserialize, Serialize};

use super::error::{Result, WarError};
use super::rng::GameRng;
use crate::cards::{ensure_comparable, Card};
use crate::rules::WarGame;
use crate::shuffle::ShuffleService;

/// Complete configuration for one game of War.
///
/// ## Example
///
/// ```
/// use war_engine::core::{Side, WarConfig};
///
/// let mut game = WarConfig::new(vec![9], vec![3]).with_seed(7).build().unwrap();
/// let outcome = game.run().unwrap();
/// assert_eq!(outcome.winner, Side::A);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WarConfig<C> {
    /// Initial deck for side A, top card first.
    pub deck_a: Vec<C>,

    /// Initial deck for side B, top card first.
    pub deck_b: Vec<C>,

    /// Seed for the shuffle service. `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Abort with `RoundLimitExceeded` after this many rounds. `None` for unlimited.
    pub round_limit: Option<u64>,

    /// Keep a `RoundRecord` for every round played.
    pub record_history: bool,
}

impl<C> WarConfig<C> {
    /// Create a configuration from two initial decks.
    pub fn new(deck_a: Vec<C>, deck_b: Vec<C>) -> Self {
        Self {
            deck_a,
            deck_b,
            seed: None,
            round_limit: None,
            record_history: false,
        }
    }

    /// Fix the shuffle seed for reproducible runs.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cap the number of rounds a run may take.
    #[must_use]
    pub fn with_round_limit(mut self, limit: u64) -> Self {
        self.round_limit = Some(limit);
        self
    }

    /// Record every round played.
    #[must_use]
    pub fn with_history(mut self) -> Self {
        self.record_history = true;
        self
    }

    /// Total number of cards in play.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck_a.len() + self.deck_b.len()
    }
}

impl<C: Card> WarConfig<C> {
    /// Check the configuration can start a game.
    ///
    /// Fails if both decks are empty or if any two cards cannot be ordered
    /// against each other. Cards change hands during play, so every pair is
    /// checked, not just pairs that start face to face.
    pub fn validate(&self) -> Result<()> {
        if self.deck_a.is_empty() && self.deck_b.is_empty() {
            return Err(WarError::EmptyDecks);
        }
        ensure_comparable(self.deck_a.iter().chain(&self.deck_b))
    }

    /// Build a game shuffled by a `GameRng` from `seed` (or OS entropy).
    pub fn build(self) -> Result<WarGame<C, GameRng>> {
        let rng = self.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        WarGame::new(self, rng)
    }

    /// Build a game with a caller-supplied shuffle service.
    ///
    /// `seed` is ignored.
    pub fn build_with<S: ShuffleService>(self, shuffler: S) -> Result<WarGame<C, S>> {
        WarGame::new(self, shuffler)
    }
}

impl WarConfig<u8> {
    /// The fixed decks played by the game-prediction endpoint.
    #[must_use]
    pub fn reference() -> Self {
        Self::new(
            vec![1, 6, 3, 8, 9, 2, 4, 8, 2, 5, 2, 3, 3, 3, 9],
            vec![7, 2, 4, 3, 6, 2, 5, 1, 1, 4, 2, 3, 2, 2, 8],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = WarConfig::new(vec![1, 2], vec![3])
            .with_seed(9)
            .with_round_limit(100)
            .with_history();

        assert_eq!(config.seed, Some(9));
        assert_eq!(config.round_limit, Some(100));
        assert!(config.record_history);
        assert_eq!(config.total_cards(), 3);
    }

    #[test]
    fn test_defaults() {
        let config = WarConfig::new(vec![1], vec![2]);
        assert_eq!(config.seed, None);
        assert_eq!(config.round_limit, None);
        assert!(!config.record_history);
    }

    #[test]
    fn test_reference_decks() {
        let config = WarConfig::reference();
        assert_eq!(config.deck_a.len(), 15);
        assert_eq!(config.deck_b.len(), 15);
        assert_eq!(config.deck_a[0], 1);
        assert_eq!(config.deck_b[0], 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_both_empty_rejected() {
        let config: WarConfig<u8> = WarConfig::new(vec![], vec![]);
        assert!(matches!(config.validate(), Err(WarError::EmptyDecks)));
    }

    #[test]
    fn test_one_empty_accepted() {
        let config: WarConfig<u8> = WarConfig::new(vec![], vec![4]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_incomparable_rejected() {
        let config = WarConfig::new(vec![1.0, 2.0], vec![f64::NAN]);
        assert!(matches!(config.validate(), Err(WarError::Incomparable { .. })));
    }

    #[test]
    fn test_config_serde() {
        let config = WarConfig::new(vec![1u8, 2], vec![3]).with_seed(5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: WarConfig<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
