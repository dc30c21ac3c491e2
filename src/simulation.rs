//! Batch simulation: many independent games from one configuration.
//!
//! Each game gets its own `GameRng` forked from a base seed, so a batch is
//! reproducible as a whole and every game in it is independent.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::config::WarConfig;
use crate::core::error::Result;
use crate::core::rng::GameRng;
use crate::core::side::SideMap;
use crate::rules::{OutcomeKind, WarGame};

/// Tally of a batch run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub games: u32,
    pub wins: SideMap<u32>,
    /// Games that ended with a forfeit during a war.
    pub forfeits: u32,
    pub total_rounds: u64,
    pub longest_game: u64,
}

impl BatchSummary {
    /// Mean rounds per game, or 0.0 for an empty batch.
    #[must_use]
    pub fn mean_rounds(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_rounds as f64 / f64::from(self.games)
        }
    }
}

/// Play `games` independent games of `config`.
///
/// The base seed is `config.seed`, or OS entropy if unset. `config.round_limit`
/// applies to every game; the first game to exceed it aborts the batch.
pub fn simulate_many<C: Card>(config: &WarConfig<C>, games: u32) -> Result<BatchSummary> {
    config.validate()?;

    let mut base = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    let mut summary = BatchSummary::default();

    for _ in 0..games {
        let mut game = WarGame::new(config.clone(), base.fork())?;
        let outcome = game.run()?;
        let rounds = game.round();

        summary.games += 1;
        summary.wins[outcome.winner] += 1;
        if outcome.kind == OutcomeKind::Forfeit {
            summary.forfeits += 1;
        }
        summary.total_rounds += rounds;
        summary.longest_game = summary.longest_game.max(rounds);
    }

    tracing::info!(
        games = summary.games,
        mean_rounds = summary.mean_rounds(),
        "batch finished"
    );

    Ok(summary)
}
