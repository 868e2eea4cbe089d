//! Discrete action space for RL agents.
//!
//! - `ActionCatalog`: stable ID for every action within fixed size bounds
//! - `valid_actions_mask`: which of those IDs are legal right now

pub mod catalog;
pub mod mask;

pub use catalog::ActionCatalog;
pub use mask::{legal_action_ids, valid_actions_mask};
