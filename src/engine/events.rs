//! Engine change notifications.
//!
//! The engine pushes an event after every observable mutation; the renderer
//! drains them with [`MatchEngine::drain_events`](super::MatchEngine::drain_events)
//! or ignores them entirely and re-reads a snapshot. The event set is closed:
//! this game has exactly these transitions.

use serde::{Deserialize, Serialize};

use crate::core::entity::{CardId, Generation};

/// Something observable happened in the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A card was turned face-up.
    Flipped { card: CardId },

    /// Two cards compared equal and are now permanently revealed.
    Matched { first: CardId, second: CardId },

    /// Two cards compared unequal; they flip back at `due_tick` unless a
    /// restart intervenes.
    MismatchScheduled {
        first: CardId,
        second: CardId,
        due_tick: u64,
    },

    /// A scheduled mismatch revert fired and hid its cards again.
    Reverted { first: CardId, second: CardId },

    /// The deck was replaced wholesale by a restart.
    Restarted { generation: Generation },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization() {
        let events = vec![
            EngineEvent::Flipped {
                card: CardId::new(0),
            },
            EngineEvent::MismatchScheduled {
                first: CardId::new(1),
                second: CardId::new(2),
                due_tick: 3,
            },
            EngineEvent::Restarted {
                generation: Generation(1),
            },
        ];

        let json = serde_json::to_string(&events).unwrap();
        let deserialized: Vec<EngineEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(events, deserialized);
    }
}
