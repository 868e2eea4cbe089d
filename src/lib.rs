//! # scout-engine
//!
//! Rules engine for the Scout card game, with a fixed discrete action space
//! for reinforcement-learning agents.
//!
//! ## Design Principles
//!
//! 1. **Validate, then apply**: every action is checked against the full
//!    rules before anything changes. A rejected action leaves the game
//!    untouched.
//!
//! 2. **N-Player First**: 2-5 seats; turn order, dealing and scoring never
//!    assume two players.
//!
//! 3. **Deterministic**: all randomness flows through a seeded `GameRng`,
//!    so a seed and an action sequence replay a game exactly.
//!
//! ## Modules
//!
//! - `core`: players, actions, RNG, configuration, errors
//! - `cards`: cards, deck composition, set validation and comparison
//! - `rules`: `RulesEngine` trait
//! - `games`: the Scout state machine
//! - `actions`: action catalog and validity masks
//! - `session`: concurrent registry of live games
//!
//! ## Example
//!
//! ```
//! use scout_engine::{valid_actions_mask, ActionCatalog, GameConfig, RulesEngine, ScoutGame};
//!
//! let mut game = ScoutGame::new(GameConfig::new(3).with_seed(7)).unwrap();
//! let catalog = ActionCatalog::global();
//!
//! let player = game.active_player();
//! let mask = valid_actions_mask(&game, catalog, player);
//! let id = mask.iter().position(|&legal| legal).unwrap();
//! let action = catalog.get(scout_engine::ActionId::new(id as u32)).unwrap().action;
//!
//! game.apply_action(player, &action).unwrap();
//! assert_eq!(game.history().len(), 1);
//! ```

pub mod actions;
pub mod cards;
pub mod core;
pub mod games;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionId, ActionKind, ActionRecord, ActionSpaceBounds, ActionSpec, ConfigError,
    GameConfig, GameId, GameRng, Player, PlayerId, PlayerMap, RulesViolation, ScoutMove,
    SessionError, ShowMove,
};

pub use crate::cards::{Card, Deck, SetError, SetShape, SetStrength};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::games::scout::{ActiveSet, GameSnapshot, PlayerSnapshot, PlayerSummary, ScoutGame};

pub use crate::actions::{legal_action_ids, valid_actions_mask, ActionCatalog};

pub use crate::session::SessionRegistry;
