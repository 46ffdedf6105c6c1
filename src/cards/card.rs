//! Card state.
//!
//! A `Card` is one playable unit: an identity, a face symbol, and two
//! display flags. Per-card lifecycle:
//!
//! ```text
//! hidden → faceUp → matched (terminal)
//!               ↘ hidden (deferred revert on mismatch)
//! ```
//!
//! Invariant: a matched card is always face-up and never interactive again.

use serde::{Deserialize, Serialize};

use crate::core::entity::CardId;
use super::symbol::Symbol;

/// A single card in a dealt deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Identity, stable for the lifetime of this deal.
    pub id: CardId,

    /// Face value.
    pub symbol: Symbol,

    /// Is the face currently revealed?
    pub face_up: bool,

    /// Has this card been paired off? Matched cards stay face-up.
    pub matched: bool,
}

impl Card {
    /// Deal a card: face-down, unmatched.
    #[must_use]
    pub fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            face_up: false,
            matched: false,
        }
    }

    /// Is the face visible to the player? True when face-up or matched.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.face_up || self.matched
    }

    /// Can a flip request touch this card?
    ///
    /// Face-up and matched cards silently ignore flips.
    #[must_use]
    pub fn is_flippable(&self) -> bool {
        !self.face_up && !self.matched
    }

    /// Mark this card as matched. Keeps it face-up, upholding the
    /// `matched ⇒ face_up` invariant.
    pub fn mark_matched(&mut self) {
        self.face_up = true;
        self.matched = true;
    }
}
