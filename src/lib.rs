//! # concentration
//!
//! A memory-matching (concentration) card game engine.
//!
//! The crate implements the gameplay core only: a shuffled deck of paired
//! symbols and the flip/compare/match-or-revert state machine. Rendering,
//! input handling, and timers belong to the consumer, which drives the
//! engine through three calls:
//!
//! - [`MatchEngine::flip`] — forward a tap on a card
//! - [`MatchEngine::restart`] — deal a fresh deck
//! - [`MatchEngine::advance`] — advance the logical clock so scheduled
//!   mismatch reverts can fire
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: dealing is driven by a seedable ChaCha8 RNG; the
//!    same seed and configuration always produce the same deck.
//!
//! 2. **Single logical thread**: there is no internal concurrency. The
//!    deferred "flip back on mismatch" action runs inside `advance`, on the
//!    same execution context as input, and is tagged with the deck
//!    generation so a restart makes stale reverts provably inert.
//!
//! 3. **Observable state drives rendering**: every mutation pushes an
//!    [`EngineEvent`]; the renderer drains the queue or re-reads an O(1)
//!    [`MatchEngine::snapshot`].
//!
//! ## Modules
//!
//! - `core`: card identity, deck generation counter, RNG, configuration
//! - `cards`: symbols and the per-card flip/match flags
//! - `deck`: the dealt deck and the deck builder
//! - `engine`: the match engine, its events, and deferred reverts

pub mod core;
pub mod cards;
pub mod deck;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    CardId, Generation,
    GameRng, GameRngState,
    GameConfig, DEFAULT_SYMBOLS, DEFAULT_PAIR_COUNT, DEFAULT_MISMATCH_DELAY,
};

pub use crate::cards::{Card, Symbol};

pub use crate::deck::{Deck, DeckBuilder};

pub use crate::engine::{MatchEngine, EngineEvent, PendingRevert};
