//! Deferred mismatch reverts.
//!
//! When a pair-attempt fails, both cards stay face-up for a moment before
//! flipping back. That flip-back is a `PendingRevert`: a task scheduled for
//! a future tick, tagged with the deck generation it was created under.
//!
//! The generation tag is what makes restarts safe. A restart bumps the
//! engine's generation, so any revert that survives into the next deal no
//! longer matches and is dropped without touching the new deck.

use serde::{Deserialize, Serialize};

use crate::core::entity::{CardId, Generation};

/// A scheduled "flip these two back down" task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRevert {
    /// Deal epoch this revert belongs to.
    pub generation: Generation,

    /// The first card of the failed pair-attempt.
    pub first: CardId,

    /// The second card of the failed pair-attempt.
    pub second: CardId,

    /// Tick at which the revert fires.
    pub due_tick: u64,
}

impl PendingRevert {
    /// Has this revert's tick arrived?
    #[must_use]
    pub fn is_due(&self, now: u64) -> bool {
        self.due_tick <= now
    }

    /// Does this revert still belong to the current deal?
    #[must_use]
    pub fn is_current(&self, generation: Generation) -> bool {
        self.generation == generation
    }
}
