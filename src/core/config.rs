//! Game configuration types.
//!
//! - `GameConfig`: player count, seed and names for one game
//! - `ActionSpaceBounds`: size limits of the discrete action space
//!
//! Both are plain data with builder methods; `validate` is the only place
//! that decides whether a configuration is acceptable.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::PlayerId;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;

/// Largest supported table.
pub const MAX_PLAYERS: usize = 5;

/// Default hand-size bound of the action space.
pub const MAX_HAND_SIZE: usize = 24;

/// Default active-set-size bound of the action space.
pub const MAX_ACTIVE_SET_SIZE: usize = 12;

/// Configuration for a single game.
///
/// ```
/// use scout_engine::core::GameConfig;
///
/// let config = GameConfig::new(3).with_seed(7);
/// assert!(config.validate().is_ok());
/// assert!(GameConfig::new(6).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats (2-5).
    pub player_count: usize,

    /// RNG seed. `None` draws one from entropy at creation time.
    pub seed: Option<u64>,

    /// Display names, one per seat. `None` uses `"Player N"`.
    pub player_names: Option<Vec<String>>,
}

impl GameConfig {
    /// Create a configuration for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            seed: None,
            player_names: None,
        }
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set display names.
    #[must_use]
    pub fn with_player_names<S: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        self.player_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Check the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount(self.player_count));
        }
        if let Some(names) = &self.player_names {
            if names.len() != self.player_count {
                return Err(ConfigError::PlayerNames {
                    expected: self.player_count,
                    got: names.len(),
                });
            }
        }
        Ok(())
    }

    /// Name for a seat.
    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> String {
        self.player_names
            .as_ref()
            .and_then(|names| names.get(player.index()).cloned())
            .unwrap_or_else(|| player.to_string())
    }
}

/// Size limits of the discrete action space.
///
/// Actions referencing hand or active-set positions beyond these bounds do
/// not appear in the catalog. The engine itself accepts them when legal.
///
/// Bounds are checked on construction: every catalog block, and the total,
/// fits in a `u32` action ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ActionSpaceBounds {
    max_hand_size: usize,
    max_active_set_size: usize,
}

impl ActionSpaceBounds {
    /// Create bounds, rejecting empty dimensions and action spaces too
    /// large to number with `u32` IDs.
    pub fn new(max_hand_size: usize, max_active_set_size: usize) -> Result<Self, ConfigError> {
        if max_hand_size == 0 || max_active_set_size == 0 {
            return Err(ConfigError::EmptyActionSpace);
        }
        if action_count(max_hand_size, max_active_set_size).is_none() {
            return Err(ConfigError::ActionSpaceTooLarge {
                hand: max_hand_size,
                active_set: max_active_set_size,
            });
        }
        Ok(Self {
            max_hand_size,
            max_active_set_size,
        })
    }

    /// Largest hand the catalog addresses.
    #[must_use]
    pub fn max_hand_size(&self) -> usize {
        self.max_hand_size
    }

    /// Largest active set the catalog addresses.
    #[must_use]
    pub fn max_active_set_size(&self) -> usize {
        self.max_active_set_size
    }

    /// Entries in each catalog block, in catalog order.
    #[must_use]
    pub fn block_sizes(&self) -> [u32; 6] {
        // Cannot overflow: `new` checked the total.
        let hand = self.max_hand_size as u32;
        let scouts = self.max_active_set_size as u32 * (hand + 1);
        let shows = hand * (hand + 1) / 2;
        [scouts, scouts, shows, scouts * shows, scouts * shows, 1]
    }
}

/// Total catalog size, or `None` if it does not fit in `u32`.
fn action_count(max_hand_size: usize, max_active_set_size: usize) -> Option<u32> {
    let hand = u32::try_from(max_hand_size).ok()?;
    let table = u32::try_from(max_active_set_size).ok()?;

    let scouts = table.checked_mul(hand.checked_add(1)?)?;
    let shows = hand.checked_mul(hand + 1)? / 2;
    let combos = scouts.checked_mul(shows)?;

    scouts
        .checked_mul(2)?
        .checked_add(shows)?
        .checked_add(combos.checked_mul(2)?)?
        .checked_add(1)
}

impl Default for ActionSpaceBounds {
    fn default() -> Self {
        Self {
            max_hand_size: MAX_HAND_SIZE,
            max_active_set_size: MAX_ACTIVE_SET_SIZE,
        }
    }
}
