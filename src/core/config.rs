//! Game configuration.
//!
//! The symbol pool, pair count, and mismatch-revert delay are configuration,
//! not hardcoded constants. The defaults reproduce the classic six-pair
//! animal game.
//!
//! Precondition violations (zero pairs, more pairs than symbols, duplicate
//! symbols) are programmer errors: they panic at construction rather than
//! surfacing as runtime-recoverable failures. They can never occur with the
//! defaults.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::Symbol;

/// Default symbol pool: the six animal faces of the classic game.
pub const DEFAULT_SYMBOLS: [Symbol; 6] = [
    Symbol::new('🐶'),
    Symbol::new('🐱'),
    Symbol::new('🐰'),
    Symbol::new('🦊'),
    Symbol::new('🐸'),
    Symbol::new('🐻'),
];

/// Default number of pairs dealt (the whole default pool).
pub const DEFAULT_PAIR_COUNT: usize = 6;

/// Default mismatch-revert delay, in logical ticks.
pub const DEFAULT_MISMATCH_DELAY: u64 = 1;

/// Complete game configuration.
///
/// Construct with [`GameConfig::new`] or take [`GameConfig::default`] for
/// the classic game, then customize with the builder methods.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Distinct symbols the deck builder may deal from.
    pub symbols: Vec<Symbol>,

    /// Number of symbol pairs per deal. Deck length is twice this.
    pub pair_count: usize,

    /// Ticks between a mismatch and its automatic flip-back.
    pub mismatch_delay: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOLS.to_vec(), DEFAULT_PAIR_COUNT)
    }
}

impl GameConfig {
    /// Create a configuration.
    ///
    /// ## Panics
    ///
    /// - `pair_count` is zero
    /// - `pair_count` exceeds the symbol pool
    /// - the pool contains duplicate symbols
    #[must_use]
    pub fn new(symbols: Vec<Symbol>, pair_count: usize) -> Self {
        assert!(pair_count > 0, "Must deal at least 1 pair");
        assert!(
            pair_count <= symbols.len(),
            "Pair count {} exceeds symbol pool of {}",
            pair_count,
            symbols.len()
        );

        let distinct: FxHashSet<Symbol> = symbols.iter().copied().collect();
        assert!(
            distinct.len() == symbols.len(),
            "Symbol pool must not contain duplicates"
        );

        Self {
            symbols,
            pair_count,
            mismatch_delay: DEFAULT_MISMATCH_DELAY,
        }
    }

    /// Set the mismatch-revert delay in ticks.
    #[must_use]
    pub fn with_mismatch_delay(mut self, ticks: u64) -> Self {
        self.mismatch_delay = ticks;
        self
    }

    /// Number of cards a deal of this configuration produces.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.pair_count * 2
    }
}
