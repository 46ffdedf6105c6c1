//! Deck builder property tests.
//!
//! Every deal must satisfy the deck invariants regardless of seed or pair
//! count:
//! - length is 2 × pair_count
//! - every symbol appears exactly twice
//! - no symbol appears from outside the configured pool
//! - all cards start hidden and unmatched

use concentration::{DeckBuilder, GameConfig, GameRng, Symbol, DEFAULT_SYMBOLS};
use proptest::prelude::*;

proptest! {
    #[test]
    fn deal_is_always_valid(seed in any::<u64>(), pair_count in 1usize..=6) {
        let config = GameConfig::new(DEFAULT_SYMBOLS.to_vec(), pair_count);
        let mut rng = GameRng::new(seed);
        let deck = DeckBuilder::from_config(&config).build(&mut rng);

        prop_assert_eq!(deck.len(), pair_count * 2);

        let counts = deck.symbol_counts();
        prop_assert_eq!(counts.len(), pair_count);
        for (symbol, count) in &counts {
            prop_assert_eq!(*count, 2);
            prop_assert!(config.symbols.contains(symbol));
        }

        prop_assert!(deck.iter().all(|c| !c.face_up && !c.matched));
    }

    #[test]
    fn deal_is_deterministic(seed in any::<u64>()) {
        let config = GameConfig::default();
        let builder = DeckBuilder::from_config(&config);

        let deck1 = builder.build(&mut GameRng::new(seed));
        let deck2 = builder.build(&mut GameRng::new(seed));

        prop_assert_eq!(deck1, deck2);
    }

    #[test]
    fn card_ids_are_slot_indices(seed in any::<u64>()) {
        let config = GameConfig::default();
        let mut rng = GameRng::new(seed);
        let deck = DeckBuilder::from_config(&config).build(&mut rng);

        for (slot, card) in deck.iter().enumerate() {
            prop_assert_eq!(card.id.index(), slot);
            prop_assert_eq!(deck.position_of(card.id), Some(slot));
        }
    }
}

/// A custom pool is respected: only its symbols are dealt.
#[test]
fn test_custom_pool() {
    let pool: Vec<Symbol> = "ABCD".chars().map(Symbol::new).collect();
    let config = GameConfig::new(pool.clone(), 2);
    let mut rng = GameRng::new(42);

    let deck = DeckBuilder::from_config(&config).build(&mut rng);

    assert_eq!(deck.len(), 4);
    for card in deck.iter() {
        assert!(pool.contains(&card.symbol));
    }
}

/// Repeated deals from one RNG differ (a fresh shuffle each time).
#[test]
fn test_successive_deals_reshuffle() {
    let config = GameConfig::default();
    let builder = DeckBuilder::from_config(&config);
    let mut rng = GameRng::new(42);

    let deck1 = builder.build(&mut rng);
    let deck2 = builder.build(&mut rng);

    let faces1: Vec<_> = deck1.iter().map(|c| c.symbol).collect();
    let faces2: Vec<_> = deck2.iter().map(|c| c.symbol).collect();
    assert_ne!(faces1, faces2);
}
