//! Scout: shed your hand by showing sets that beat the table, or scout a
//! card from the table into your hand.
//!
//! - 2-5 players, one round per player
//! - Shows score the size of the set they replace
//! - Each scout scores a point for the owner of the table set
//! - At round end every non-owner loses a point per card in hand

mod active_set;
mod game;
mod snapshot;

pub use active_set::ActiveSet;
pub use game::ScoutGame;
pub use snapshot::{GameSnapshot, PlayerSnapshot, PlayerSummary};
