//! Rules engine trait.
//!
//! A rules engine owns its game state and exposes:
//! - a side-effect free legality check
//! - a validate-then-apply mutation
//! - the final result once the game is over
//!
//! Masking is written against this trait, so the legality predicate used to
//! build a mask is the exact one `apply_action` enforces.

use serde::{Deserialize, Serialize};

use crate::core::action::Action;
use crate::core::error::RulesViolation;
use crate::core::player::PlayerId;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several players tied for the best score.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won (alone or shared).
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `check_action` must not mutate anything
/// - `apply_action` must call `check_action` first and leave the state
///   untouched when it fails
/// - `is_terminal` returns `None` while the game continues
pub trait RulesEngine {
    /// Number of seats.
    fn player_count(&self) -> usize;

    /// Whose turn it is.
    fn active_player(&self) -> PlayerId;

    /// Check whether `player` may take `action` now.
    fn check_action(&self, player: PlayerId, action: &Action) -> Result<(), RulesViolation>;

    /// Validate, then apply, `action` for `player`.
    fn apply_action(&mut self, player: PlayerId, action: &Action) -> Result<(), RulesViolation>;

    /// Check if the game is over.
    fn is_terminal(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// `check_action` as a boolean.
    fn is_legal(&self, player: PlayerId, action: &Action) -> bool {
        self.check_action(player, action).is_ok()
    }
}
