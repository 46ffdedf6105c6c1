//! The dealt deck: an ordered sequence of cards.
//!
//! Backed by `im::Vector` so cloning a snapshot for the renderer is O(1);
//! the engine hands out copies freely instead of borrowing across the
//! render boundary.
//!
//! A deck is built fresh on every deal and replaced wholesale on restart,
//! never mutated structurally in place — only the per-card flags change.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Symbol};
use crate::core::entity::CardId;

/// An ordered sequence of cards for one game instance.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Build a deck from already-dealt cards.
    ///
    /// Card ids must be the slot indices; [`DeckBuilder`](super::DeckBuilder)
    /// guarantees this.
    #[must_use]
    pub fn from_cards(cards: Vector<Card>) -> Self {
        debug_assert!(
            cards.iter().enumerate().all(|(i, c)| c.id.index() == i),
            "Card ids must equal their slot index"
        );
        Self { cards }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by slot index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Get a card mutably by slot index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    /// Resolve a card id to its slot index.
    ///
    /// Returns `None` for ids that are not part of this deck.
    #[must_use]
    pub fn position_of(&self, id: CardId) -> Option<usize> {
        let index = id.index();
        let card = self.cards.get(index)?;
        debug_assert_eq!(card.id, id);
        Some(index)
    }

    /// Iterate over the cards in deal order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Count occurrences of each symbol.
    ///
    /// A valid deal maps every symbol to exactly 2.
    #[must_use]
    pub fn symbol_counts(&self) -> FxHashMap<Symbol, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.symbol).or_insert(0) += 1;
        }
        counts
    }

    /// Have all cards been paired off?
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|c| c.matched)
    }
}
