//! Cards, decks and sets.
//!
//! ## Key Types
//!
//! - `Card`: two-valued card; the face value is the one in play
//! - `Deck`: per-player-count composition, shuffling and dealing
//! - `SetStrength`: classification used to validate and compare sets

pub mod card;
pub mod deck;
pub mod set;

pub use card::Card;
pub use deck::Deck;
pub use set::{beats, validate_set, SetError, SetShape, SetStrength};
