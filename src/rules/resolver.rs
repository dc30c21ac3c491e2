//! Round resolver: the War state machine.
//!
//! ## Round
//!
//! 1. Each side commits its top card to the pot (A first).
//! 2. The higher card takes the whole pot, permuted by the shuffle service,
//!    onto the bottom of its deck.
//! 3. On a tie each side commits one more card (A first) and the pot stays
//!    unresolved; the next round's comparison decides it.
//!
//! ## Termination
//!
//! A side that must commit a card but has none forfeits: the pot goes to the
//! opponent. A side that loses a comparison with nothing left is exhausted.
//! Either way exactly one deck is empty when the game finishes, and the winner
//! is read from deck state alone. Checking A before B means that when both
//! sides would run dry together, A is the one that forfeits.
//!
//! The forfeited pot is awarded, never discarded. The older prediction
//! endpoint dropped it and reported B for `[7, 3]` vs `[7]`; here A commits
//! its last card, B cannot answer, and A wins holding `[7, 7, 3]`. Cards are
//! conserved in every finished game as a result.

use crate::cards::{compare, Card};
use crate::core::config::WarConfig;
use crate::core::error::{Result, WarError};
use crate::core::rng::GameRng;
use crate::core::side::{Side, SideMap};
use crate::shuffle::ShuffleService;
use crate::zones::{Deck, Pot};

use serde::{Deserialize, Serialize};

use super::outcome::{Outcome, OutcomeKind};
use super::record::{GameStats, RoundRecord, RoundResolution};

/// Lifecycle of a game. Ties are a sub-phase of `Playing`, visible only
/// through a non-empty pot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    Finished(Outcome),
}

/// One game of War.
///
/// Owns both decks, the pot and the shuffle service exclusively; separate
/// games share nothing and can run on separate threads.
///
/// ## Example
///
/// ```
/// use war_engine::core::{Side, WarConfig};
/// use war_engine::shuffle::PreserveOrder;
///
/// let mut game = WarConfig::new(vec![7, 3], vec![7]).build_with(PreserveOrder).unwrap();
/// let outcome = game.run().unwrap();
///
/// // B ran out during the war and forfeited the pot.
/// assert_eq!(outcome.winner, Side::A);
/// assert_eq!(game.deck(Side::A).to_vec(), vec![7, 7, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct WarGame<C: Card, S: ShuffleService = GameRng> {
    pub(super) decks: SideMap<Deck<C>>,
    pub(super) pot: Pot<C>,
    pub(super) shuffler: S,
    pub(super) phase: GamePhase,
    pub(super) stats: GameStats,
    /// Consecutive ties leading into the current round.
    pub(super) war_chain: u32,
    pub(super) round_limit: Option<u64>,
    pub(super) history: Option<Vec<RoundRecord<C>>>,
}

impl<C: Card, S: ShuffleService> WarGame<C, S> {
    /// Validate `config` and set up a game using `shuffler`.
    ///
    /// If one deck starts empty the game is finished immediately.
    pub fn new(config: WarConfig<C>, shuffler: S) -> Result<Self> {
        config.validate()?;

        let WarConfig {
            deck_a,
            deck_b,
            round_limit,
            record_history,
            ..
        } = config;

        let mut game = Self {
            decks: SideMap::new(Deck::new(Side::A, deck_a), Deck::new(Side::B, deck_b)),
            pot: Pot::new(),
            shuffler,
            phase: GamePhase::Playing,
            stats: GameStats::default(),
            war_chain: 0,
            round_limit,
            history: record_history.then(Vec::new),
        };

        if game.decks.iter().any(|(_, deck)| deck.is_empty()) {
            game.finish(OutcomeKind::Exhausted);
        }

        Ok(game)
    }

    /// Play rounds until the game finishes.
    ///
    /// Returns the same outcome on every call once finished.
    pub fn run(&mut self) -> Result<Outcome> {
        loop {
            if let GamePhase::Finished(outcome) = self.phase {
                return Ok(outcome);
            }
            if let Some(limit) = self.round_limit {
                if self.stats.rounds >= limit {
                    return Err(WarError::RoundLimitExceeded { limit });
                }
            }
            self.play_round()?;
        }
    }

    /// Play a single round.
    pub fn play_round(&mut self) -> Result<RoundRecord<C>> {
        if self.is_finished() {
            return Err(WarError::GameOver);
        }

        self.stats.rounds += 1;
        let record = self.resolve_round()?;

        tracing::debug!(
            round = record.round,
            face_up = ?record.face_up,
            resolution = ?record.resolution,
            pot_size = record.pot_size,
            "round played"
        );

        if let Some(history) = &mut self.history {
            history.push(record.clone());
        }
        Ok(record)
    }

    fn resolve_round(&mut self) -> Result<RoundRecord<C>> {
        let round = self.stats.rounds;

        let Some(a) = self.commit(Side::A)? else {
            return Ok(self.forfeit(round, None, Side::A));
        };
        let Some(b) = self.commit(Side::B)? else {
            return Ok(self.forfeit(round, None, Side::B));
        };

        let Some(winner) = compare(&a, &b)?.winner() else {
            self.stats.wars += 1;
            self.war_chain += 1;
            self.stats.longest_war_chain = self.stats.longest_war_chain.max(self.war_chain);

            for side in Side::ALL {
                if self.commit(side)?.is_none() {
                    return Ok(self.forfeit(round, Some((a, b)), side));
                }
            }

            return Ok(RoundRecord {
                round,
                face_up: Some((a, b)),
                resolution: RoundResolution::War,
                pot_size: self.pot.len(),
            });
        };

        self.war_chain = 0;
        let pot_size = self.award(winner);
        if self.decks[winner.opponent()].is_empty() {
            self.finish(OutcomeKind::Exhausted);
        }

        Ok(RoundRecord {
            round,
            face_up: Some((a, b)),
            resolution: RoundResolution::Won(winner),
            pot_size,
        })
    }

    /// Move `side`'s top card into the pot. `None` if the deck is empty.
    fn commit(&mut self, side: Side) -> Result<Option<C>> {
        if self.decks[side].is_empty() {
            return Ok(None);
        }
        let card = self.decks[side].draw_front()?;
        self.pot.add([card.clone()]);
        self.stats.largest_pot = self.stats.largest_pot.max(self.pot.len());
        Ok(Some(card))
    }

    /// Drain the pot through the shuffle service onto `side`'s deck.
    /// Returns the number of cards moved.
    fn award(&mut self, side: Side) -> usize {
        let cards = self.pot.drain();
        let count = cards.len();
        let cards = self.shuffler.permute(cards);
        self.decks[side].receive_back(cards);
        count
    }

    fn forfeit(&mut self, round: u64, face_up: Option<(C, C)>, loser: Side) -> RoundRecord<C> {
        let pot_size = self.award(loser.opponent());
        self.finish(OutcomeKind::Forfeit);

        RoundRecord {
            round,
            face_up,
            resolution: RoundResolution::Forfeit(loser),
            pot_size,
        }
    }

    fn finish(&mut self, kind: OutcomeKind) {
        let outcome = self.settle(kind);
        tracing::info!(
            winner = %outcome.winner,
            kind = ?outcome.kind,
            rounds = self.stats.rounds,
            wars = self.stats.wars,
            "game finished"
        );
        self.phase = GamePhase::Finished(outcome);
    }

    /// The only place a winner is decided: the side whose deck is non-empty.
    fn settle(&self, kind: OutcomeKind) -> Outcome {
        let winner = if self.decks[Side::A].is_empty() { Side::B } else { Side::A };
        debug_assert!(
            self.decks[winner.opponent()].is_empty() && !self.decks[winner].is_empty(),
            "a finished game must have exactly one empty deck"
        );
        Outcome { winner, kind }
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, GamePhase::Finished(_))
    }

    /// The outcome, once the game has finished.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            GamePhase::Finished(outcome) => Some(outcome),
            GamePhase::Playing => None,
        }
    }

    #[must_use]
    pub fn deck(&self, side: Side) -> &Deck<C> {
        &self.decks[side]
    }

    #[must_use]
    pub fn pot(&self) -> &Pot<C> {
        &self.pot
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Rounds played so far.
    #[must_use]
    pub fn round(&self) -> u64 {
        self.stats.rounds
    }

    /// Recorded rounds. Empty unless the game was configured `with_history`.
    #[must_use]
    pub fn history(&self) -> &[RoundRecord<C>] {
        self.history.as_deref().unwrap_or(&[])
    }

    /// Cards across both decks and the pot.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.decks[Side::A].len() + self.decks[Side::B].len() + self.pot.len()
    }

    #[must_use]
    pub fn shuffler(&self) -> &S {
        &self.shuffler
    }
}
