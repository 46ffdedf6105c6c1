//! Cards: face-value symbols and per-card flip state.

pub mod symbol;
pub mod card;

pub use symbol::Symbol;
pub use card::Card;
