//! Core engine types: card identity, generations, RNG, configuration.
//!
//! These are the building blocks the rest of the crate is assembled from.
//! Games configure the engine via `GameConfig` rather than editing constants.

pub mod entity;
pub mod rng;
pub mod config;

pub use entity::{CardId, Generation};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, DEFAULT_SYMBOLS, DEFAULT_PAIR_COUNT, DEFAULT_MISMATCH_DELAY};
