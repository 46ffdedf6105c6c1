//! The match engine.
//!
//! Owns the current deck, the pending-flip pointer, the deal generation,
//! and a logical clock. The consumer forwards taps as [`MatchEngine::flip`],
//! restarts with [`MatchEngine::restart`], and drives time with
//! [`MatchEngine::advance`] so scheduled mismatch reverts can fire.
//!
//! ## Flip rules
//!
//! - Unknown, face-up, or matched cards: silent no-op.
//! - First flip of a pair-attempt: card turns face-up, pointer set.
//! - Second flip: card turns face-up, symbols compared, pointer cleared.
//!   Equal symbols match both cards permanently; unequal symbols schedule a
//!   revert `mismatch_delay` ticks out.
//!
//! Everything runs on the caller's thread. There is no interior mutability
//! and no timer: wall-clock scheduling, if any, belongs to the renderer.

use log::{debug, trace};
use smallvec::SmallVec;

use crate::core::config::GameConfig;
use crate::core::entity::{CardId, Generation};
use crate::core::rng::GameRng;
use crate::deck::{Deck, DeckBuilder};

use super::events::EngineEvent;
use super::revert::PendingRevert;

/// The memory-game state machine.
pub struct MatchEngine {
    config: GameConfig,
    builder: DeckBuilder,
    rng: GameRng,
    deck: Deck,

    /// Slot of the first card of an in-progress pair-attempt.
    pending_flip: Option<usize>,

    /// Deal epoch; bumped on every restart.
    generation: Generation,

    /// Logical clock, advanced only by `advance`.
    now: u64,

    /// Scheduled mismatch reverts. At most one per pair-attempt, so this
    /// stays inline.
    reverts: SmallVec<[PendingRevert; 2]>,

    /// Change notifications not yet drained by the renderer.
    events: Vec<EngineEvent>,
}

impl MatchEngine {
    /// Create an engine and deal the first deck.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Create an engine seeded from OS entropy.
    #[must_use]
    pub fn from_entropy(config: GameConfig) -> Self {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Create an engine with an explicit RNG.
    #[must_use]
    pub fn with_rng(config: GameConfig, mut rng: GameRng) -> Self {
        let builder = DeckBuilder::from_config(&config);
        let deck = builder.build(&mut rng);
        Self {
            config,
            builder,
            rng,
            deck,
            pending_flip: None,
            generation: Generation::first(),
            now: 0,
            reverts: SmallVec::new(),
            events: Vec::new(),
        }
    }

    // === Read-only surface ===

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Borrow the current deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Clone the current deck for rendering. O(1).
    #[must_use]
    pub fn snapshot(&self) -> Deck {
        self.deck.clone()
    }

    /// The first card of an in-progress pair-attempt, if any.
    #[must_use]
    pub fn pending(&self) -> Option<CardId> {
        self.pending_flip
            .and_then(|i| self.deck.get(i))
            .map(|c| c.id)
    }

    /// The current deal epoch.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The logical clock.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Has every card been paired off?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.deck.all_matched()
    }

    /// Take all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    // === Operations ===

    /// Handle a tap on a card.
    ///
    /// Unknown ids and cards that are already revealed are silent no-ops,
    /// not errors.
    pub fn flip(&mut self, card: CardId) {
        let Some(index) = self.deck.position_of(card) else {
            debug!("flip ignored: {} is not in the current deck", card);
            return;
        };

        {
            let target = self.deck.get(index).expect("position_of checked bounds");
            if !target.is_flippable() {
                trace!("flip ignored: {} already revealed", card);
                return;
            }
        }

        if let Some(c) = self.deck.get_mut(index) {
            c.face_up = true;
        }
        self.events.push(EngineEvent::Flipped { card });

        match self.pending_flip.take() {
            None => {
                // First card of a pair-attempt.
                self.pending_flip = Some(index);
            }
            Some(first_index) => {
                // Second card: compare. The pointer stays cleared either way.
                let first = self
                    .deck
                    .get(first_index)
                    .expect("pending index is in the current deck");
                let first_id = first.id;
                let second = self
                    .deck
                    .get(index)
                    .expect("position_of checked bounds");
                let is_match = first.symbol == second.symbol;

                if is_match {
                    if let Some(c) = self.deck.get_mut(first_index) {
                        c.mark_matched();
                    }
                    if let Some(c) = self.deck.get_mut(index) {
                        c.mark_matched();
                    }
                    debug!("matched {} and {}", first_id, card);
                    self.events.push(EngineEvent::Matched {
                        first: first_id,
                        second: card,
                    });
                } else {
                    let due_tick = self.now + self.config.mismatch_delay;
                    self.reverts.push(PendingRevert {
                        generation: self.generation,
                        first: first_id,
                        second: card,
                        due_tick,
                    });
                    debug!(
                        "mismatch {} vs {}, revert due at tick {}",
                        first_id, card, due_tick
                    );
                    self.events.push(EngineEvent::MismatchScheduled {
                        first: first_id,
                        second: card,
                        due_tick,
                    });
                }
            }
        }
    }

    /// Discard the current deal and start over.
    ///
    /// Bumps the generation so any revert still scheduled against the old
    /// deck can never touch the new one; the queue is also cleared eagerly.
    pub fn restart(&mut self) {
        self.generation = self.generation.next();
        self.reverts.clear();
        self.pending_flip = None;
        self.deck = self.builder.build(&mut self.rng);

        debug!("restarted into {}", self.generation);
        self.events.push(EngineEvent::Restarted {
            generation: self.generation,
        });
    }

    /// Advance the logical clock, firing any revert that comes due.
    pub fn advance(&mut self, ticks: u64) {
        self.now += ticks;

        let mut due: SmallVec<[PendingRevert; 2]> = SmallVec::new();
        let mut remaining: SmallVec<[PendingRevert; 2]> = SmallVec::new();
        for task in self.reverts.drain(..) {
            if task.is_due(self.now) {
                due.push(task);
            } else {
                remaining.push(task);
            }
        }
        self.reverts = remaining;

        for task in due {
            self.apply_revert(task);
        }
    }

    /// Apply a due revert, unless it is stale.
    ///
    /// A revert is stale when it belongs to a previous generation, or when
    /// its cards are no longer face-up-and-unmatched. Stale reverts are
    /// silent no-ops.
    fn apply_revert(&mut self, task: PendingRevert) {
        if !task.is_current(self.generation) {
            trace!(
                "dropped stale revert from {} (now {})",
                task.generation,
                self.generation
            );
            return;
        }

        let mut applied = false;
        for id in [task.first, task.second] {
            if let Some(index) = self.deck.position_of(id) {
                if let Some(card) = self.deck.get_mut(index) {
                    if card.face_up && !card.matched {
                        card.face_up = false;
                        applied = true;
                    }
                }
            }
        }

        if applied {
            trace!("reverted {} and {}", task.first, task.second);
            self.events.push(EngineEvent::Reverted {
                first: task.first,
                second: task.second,
            });
        }
    }
}
