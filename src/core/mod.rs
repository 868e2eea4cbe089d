//! Core engine types: players, actions, RNG, configuration, errors.
//!
//! These are the building blocks shared by the cards, the rules engine, the
//! action catalog and the session registry.

pub mod action;
pub mod config;
pub mod error;
pub mod game_id;
pub mod player;
pub mod rng;

pub use action::{Action, ActionId, ActionKind, ActionRecord, ActionSpec, ScoutMove, ShowMove};
pub use config::{
    ActionSpaceBounds, GameConfig, MAX_ACTIVE_SET_SIZE, MAX_HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS,
};
pub use error::{ConfigError, RulesViolation, SessionError};
pub use game_id::GameId;
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
