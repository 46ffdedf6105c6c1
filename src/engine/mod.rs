//! The match engine: flip/compare/match-or-revert, restart, deferred reverts.

pub mod engine;
pub mod events;
pub mod revert;

pub use engine::MatchEngine;
pub use events::EngineEvent;
pub use revert::PendingRevert;
