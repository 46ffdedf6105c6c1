//! Card identity and deck generations.
//!
//! Every card in a dealt deck has a `CardId` that is unique and stable for
//! the lifetime of that deck: the card's slot index at deal time. Identity
//! does not survive a restart — a fresh deal assigns fresh ids — which is
//! exactly what makes stale deferred work easy to reject.
//!
//! A `Generation` distinguishes one deal epoch from the next. The engine
//! bumps it on every restart and tags scheduled mismatch reverts with the
//! generation they were created under, so a revert that outlives its deck
//! is provably inert.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within one dealt deck.
///
/// Ids are the slot index of the card at deal time, so they double as a
/// position hint; the deck verifies the slot actually holds the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID from a slot index.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The slot index this ID was assigned from.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Deal epoch counter.
///
/// Bumped on every restart. Scheduled reverts carry the generation they
/// belong to and are dropped unapplied when it no longer matches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation of the first deal.
    #[must_use]
    pub const fn first() -> Self {
        Self(0)
    }

    /// The generation after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Get the raw counter value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gen({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_roundtrip() {
        let id = CardId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(id.index(), 7);
        assert_eq!(CardId::from(7u32), id);
    }

    #[test]
    fn test_card_id_display() {
        assert_eq!(format!("{}", CardId(42)), "Card(42)");
    }

    #[test]
    fn test_generation_sequence() {
        let first = Generation::first();
        assert_eq!(first.raw(), 0);
        assert_eq!(first.next(), Generation(1));
        assert_eq!(first.next().next(), Generation(2));
        assert_ne!(first, first.next());
    }

    #[test]
    fn test_generation_display() {
        assert_eq!(format!("{}", Generation(3)), "Gen(3)");
    }

    #[test]
    fn test_serialization() {
        let id = CardId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);

        let generation = Generation(5);
        let json = serde_json::to_string(&generation).unwrap();
        let deserialized: Generation = serde_json::from_str(&json).unwrap();
        assert_eq!(generation, deserialized);
    }
}
