//! The dealt deck and the deck builder.

pub mod deck;
pub mod builder;

pub use deck::Deck;
pub use builder::DeckBuilder;
