//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Which actions are legal for a player right now
//! - How actions modify state
//! - When the game is over and who won
//!
//! The action catalog and masking code call into `RulesEngine` and never
//! interpret game-specific state directly.

pub mod engine;

pub use engine::{GameResult, RulesEngine};
