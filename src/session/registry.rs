//! Session registry.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, info, instrument, warn};

use crate::actions::{valid_actions_mask, ActionCatalog};
use crate::core::{Action, ActionId, GameConfig, GameId, PlayerId, SessionError};
use crate::games::scout::{GameSnapshot, PlayerSnapshot, ScoutGame};
use crate::rules::RulesEngine;

type SharedGame = Arc<RwLock<ScoutGame>>;

/// All live games of a process.
///
/// The map lock is held only to look up, insert or remove a game. Actions
/// take the game's write lock; masks and snapshots take its read lock.
///
/// ```
/// use scout_engine::session::SessionRegistry;
///
/// let registry = SessionRegistry::new();
/// let id = registry.create_game(3).unwrap();
/// let state = registry.game_state(id.as_str()).unwrap();
/// assert_eq!(state.players.len(), 3);
/// ```
#[derive(Debug)]
pub struct SessionRegistry {
    games: RwLock<FxHashMap<GameId, SharedGame>>,
    catalog: &'static ActionCatalog,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRegistry {
    /// Registry using the default-bounds catalog.
    pub fn new() -> Self {
        Self::with_catalog(ActionCatalog::global())
    }

    /// Registry whose masks and action IDs use `catalog`.
    pub fn with_catalog(catalog: &'static ActionCatalog) -> Self {
        Self {
            games: RwLock::new(FxHashMap::default()),
            catalog,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &'static ActionCatalog {
        self.catalog
    }

    /// Start a game with `num_players` seats and a random seed.
    pub fn create_game(&self, num_players: usize) -> Result<GameId, SessionError> {
        self.create_game_with(GameConfig::new(num_players))
    }

    /// Start a game from a full configuration.
    #[instrument(skip(self), fields(players = config.player_count))]
    pub fn create_game_with(&self, config: GameConfig) -> Result<GameId, SessionError> {
        let game = ScoutGame::new(config).map_err(|e| {
            warn!(error = %e, "rejected game configuration");
            e
        })?;
        let id = game.id().clone();
        let seed = game.seed();

        self.games
            .write()
            .insert(id.clone(), Arc::new(RwLock::new(game)));
        info!(game_id = %id, seed, "created game");
        Ok(id)
    }

    /// Apply `action` for the seat at `player_index`.
    #[instrument(skip(self))]
    pub fn apply_action(
        &self,
        game_id: &str,
        player_index: usize,
        action: &Action,
    ) -> Result<(), SessionError> {
        let game = self.game(game_id)?;
        let mut game = game.write();
        let player = seat(&game, player_index)?;

        game.apply_action(player, action).map_err(|e| {
            debug!(reason = %e, "rejected action");
            SessionError::from(e)
        })
    }

    /// Apply the catalog action `action_id`.
    pub fn apply_action_id(
        &self,
        game_id: &str,
        player_index: usize,
        action_id: ActionId,
    ) -> Result<(), SessionError> {
        let spec = self
            .catalog
            .get(action_id)
            .ok_or(SessionError::UnknownAction(action_id.0))?;
        self.apply_action(game_id, player_index, &spec.action)
    }

    /// Public state of a game.
    pub fn game_state(&self, game_id: &str) -> Result<GameSnapshot, SessionError> {
        Ok(self.game(game_id)?.read().snapshot())
    }

    /// One seat's state, including the hand.
    pub fn player_state(
        &self,
        game_id: &str,
        player_index: usize,
    ) -> Result<PlayerSnapshot, SessionError> {
        let game = self.game(game_id)?;
        let game = game.read();
        let player = seat(&game, player_index)?;
        game.player_snapshot(player)
            .ok_or(SessionError::PlayerIndex(player_index))
    }

    /// Legality of every catalog action for the seat, indexed by action ID.
    pub fn valid_actions_mask(
        &self,
        game_id: &str,
        player_index: usize,
    ) -> Result<Vec<bool>, SessionError> {
        let game = self.game(game_id)?;
        let game = game.read();
        let player = seat(&game, player_index)?;
        Ok(valid_actions_mask(&*game, self.catalog, player))
    }

    /// Drop a game. Returns whether it existed.
    #[instrument(skip(self))]
    pub fn remove_game(&self, game_id: &str) -> bool {
        let removed = self.games.write().remove(game_id).is_some();
        if removed {
            debug!("removed game");
        }
        removed
    }

    /// Number of live games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.read().is_empty()
    }

    /// IDs of all live games, in no particular order.
    #[must_use]
    pub fn game_ids(&self) -> Vec<GameId> {
        self.games.read().keys().cloned().collect()
    }

    fn game(&self, game_id: &str) -> Result<SharedGame, SessionError> {
        self.games
            .read()
            .get(game_id)
            .cloned()
            .ok_or_else(|| SessionError::NotFound(game_id.to_string()))
    }
}

fn seat(game: &ScoutGame, player_index: usize) -> Result<PlayerId, SessionError> {
    if player_index < game.player_count() {
        Ok(PlayerId::new(player_index as u8))
    } else {
        Err(SessionError::PlayerIndex(player_index))
    }
}
