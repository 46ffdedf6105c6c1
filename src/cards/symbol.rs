//! Face-value symbols.
//!
//! A `Symbol` is the glyph printed on a card's face. The engine only ever
//! compares symbols for equality; what they look like is the renderer's
//! business.

use serde::{Deserialize, Serialize};

/// A card's face value.
///
/// One Unicode scalar, which covers the default emoji pool. Two cards match
/// when their symbols compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(pub char);

impl Symbol {
    /// Create a symbol from a glyph.
    #[must_use]
    pub const fn new(glyph: char) -> Self {
        Self(glyph)
    }

    /// Get the glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        self.0
    }
}

impl From<char> for Symbol {
    fn from(glyph: char) -> Self {
        Self(glyph)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
