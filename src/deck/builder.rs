//! Deck builder: deal a shuffled deck of symbol pairs.
//!
//! Dealing has two shuffles: one over the symbol pool to pick `pair_count`
//! distinct symbols without replacement, and one over the duplicated cards
//! so pair positions are uniform. Every card starts face-down and unmatched.

use im::Vector;
use log::debug;

use crate::cards::{Card, Symbol};
use crate::core::config::GameConfig;
use crate::core::entity::CardId;
use crate::core::rng::GameRng;

use super::deck::Deck;

/// Builds decks for a given configuration.
///
/// The configuration's preconditions (pair count within pool, distinct
/// symbols) were asserted when it was constructed, so building cannot fail.
#[derive(Clone, Debug)]
pub struct DeckBuilder {
    symbols: Vec<Symbol>,
    pair_count: usize,
}

impl DeckBuilder {
    /// Create a builder from a configuration.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            symbols: config.symbols.clone(),
            pair_count: config.pair_count,
        }
    }

    /// Deal a fresh deck.
    #[must_use]
    pub fn build(&self, rng: &mut GameRng) -> Deck {
        // Pick pair_count distinct symbols uniformly without replacement.
        let mut pool = self.symbols.clone();
        rng.shuffle(&mut pool);
        pool.truncate(self.pair_count);

        // Duplicate into pairs and shuffle the whole deal.
        let mut faces: Vec<Symbol> = Vec::with_capacity(self.pair_count * 2);
        faces.extend_from_slice(&pool);
        faces.extend_from_slice(&pool);
        rng.shuffle(&mut faces);

        let cards: Vector<Card> = faces
            .into_iter()
            .enumerate()
            .map(|(i, symbol)| Card::new(CardId::new(i as u32), symbol))
            .collect();

        let deck = Deck::from_cards(cards);
        debug_assert!(deck.symbol_counts().values().all(|&n| n == 2));
        debug!("dealt {} cards from {} pairs", deck.len(), self.pair_count);
        deck
    }
}
