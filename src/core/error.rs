//! Error types.
//!
//! Two classes of failure reach callers:
//! - `ConfigError`: a game could not be created (bad player count, etc.)
//! - `RulesViolation`: an action was rejected; the game is unchanged
//!
//! `SessionError` wraps both for the session registry.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::SetError;

/// A game or component could not be configured.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid number of players: {0} (expected 2-5)")]
    PlayerCount(usize),
    #[error("card values cannot be zero: ({0}, {1})")]
    ZeroCardValue(u8, u8),
    #[error("expected {expected} player names, got {got}")]
    PlayerNames { expected: usize, got: usize },
    #[error("expected {expected} starting hands, got {got}")]
    HandCount { expected: usize, got: usize },
    #[error("action space bounds must be non-zero")]
    EmptyActionSpace,
    #[error("action space for hand {hand} and active set {active_set} exceeds u32 ids")]
    ActionSpaceTooLarge { hand: usize, active_set: usize },
}

/// An illegal action. Carries enough data for a readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesViolation {
    #[error("game is already complete")]
    GameComplete,
    #[error("{player} is not in this game")]
    UnknownPlayer { player: PlayerId },
    #[error("not {player}'s turn (waiting for {active})")]
    NotYourTurn { player: PlayerId, active: PlayerId },
    #[error("cannot scout from an empty active set")]
    EmptyActiveSet,
    #[error("can only scout from ends of active set (index {take}, set size {len})")]
    ScoutFromMiddle { take: usize, len: usize },
    #[error("insert position {put} out of range for hand of {hand_len}")]
    PutOutOfRange { put: usize, hand_len: usize },
    #[error("show range {start}..{end} out of range for hand of {hand_len}")]
    ShowOutOfRange {
        start: usize,
        end: usize,
        hand_len: usize,
    },
    #[error("invalid set: {0}")]
    InvalidSet(#[from] SetError),
    #[error("set does not beat active set")]
    DoesNotBeat,
    #[error("scout and show already used this round")]
    ScoutAndShowUsed,
    #[error("hand can only be reversed before the first action of the round")]
    ReverseHandUnavailable,
}

/// Session registry failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("invalid game_id: {0}")]
    NotFound(String),
    #[error("invalid player_index: {0}")]
    PlayerIndex(usize),
    #[error("unknown action id: {0}")]
    UnknownAction(u32),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Rules(#[from] RulesViolation),
}
