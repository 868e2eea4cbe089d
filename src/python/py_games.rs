//! Game bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::actions::{valid_actions_mask, ActionCatalog};
use crate::core::{ActionId, GameConfig, PlayerId, RulesViolation};
use crate::games::scout::ScoutGame;
use crate::rules::{GameResult, RulesEngine};

use super::py_core::{PyActionSpec, PyCard};

fn rules_error(err: RulesViolation) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for ScoutGame.
///
/// Actions are addressed by their ID in the default action catalog.
#[pyclass(name = "ScoutGame")]
pub struct PyScoutGame {
    game: ScoutGame,
}

#[pymethods]
impl PyScoutGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - player_count: Number of players (2-5)
    /// - seed: RNG seed; random when omitted
    #[new]
    #[pyo3(signature = (player_count = 3, seed = None))]
    fn new(player_count: usize, seed: Option<u64>) -> PyResult<Self> {
        let mut config = GameConfig::new(player_count);
        config.seed = seed;
        let game = ScoutGame::new(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { game })
    }

    /// Apply the catalog action `action_id` for the active player.
    fn apply_action_id(&mut self, action_id: u32) -> PyResult<()> {
        let spec = ActionCatalog::global()
            .get(ActionId::new(action_id))
            .ok_or_else(|| PyValueError::new_err(format!("unknown action id: {}", action_id)))?;
        let player = self.game.active_player();
        self.game.apply_action(player, &spec.action).map_err(rules_error)
    }

    /// Legality of every catalog action for the active player.
    fn valid_actions_mask<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<bool>> {
        let player = self.game.active_player();
        let mask = valid_actions_mask(&self.game, ActionCatalog::global(), player);
        PyArray1::from_slice_bound(py, &mask)
    }

    /// Look up a catalog entry.
    #[staticmethod]
    fn action(action_id: u32) -> Option<PyActionSpec> {
        ActionCatalog::global()
            .get(ActionId::new(action_id))
            .copied()
            .map(PyActionSpec)
    }

    /// Number of actions in the catalog.
    #[getter]
    fn action_space_size(&self) -> usize {
        ActionCatalog::global().len()
    }

    /// Get the active player (whose turn it is).
    #[getter]
    fn active_player(&self) -> u8 {
        self.game.active_player().0
    }

    /// Get the number of players.
    #[getter]
    fn player_count(&self) -> usize {
        self.game.player_count()
    }

    /// Current round, 1-based.
    #[getter]
    fn round(&self) -> u32 {
        self.game.round()
    }

    #[getter]
    fn is_complete(&self) -> bool {
        self.game.is_complete()
    }

    /// Scores in seat order.
    #[getter]
    fn scores(&self) -> Vec<i32> {
        self.game.scores()
    }

    /// Cards on the table.
    #[getter]
    fn active_set(&self) -> Vec<PyCard> {
        self.game.active_set().cards().iter().copied().map(PyCard).collect()
    }

    /// A player's hand.
    fn hand(&self, player: u8) -> PyResult<Vec<PyCard>> {
        let seat = self
            .game
            .player(PlayerId::new(player))
            .ok_or_else(|| PyValueError::new_err(format!("invalid player_index: {}", player)))?;
        Ok(seat.hand.iter().copied().map(PyCard).collect())
    }

    /// Seats with the best score once the game is complete.
    fn winners(&self) -> Option<Vec<u8>> {
        match self.game.result()? {
            GameResult::Winner(p) => Some(vec![p.0]),
            GameResult::Winners(ps) => Some(ps.into_iter().map(|p| p.0).collect()),
        }
    }

    /// Copy the game for simulation.
    fn copy(&self) -> Self {
        Self {
            game: self.game.clone(),
        }
    }

    fn __repr__(&self) -> String {
        let status = if self.game.is_complete() {
            "complete"
        } else {
            "ongoing"
        };
        format!(
            "ScoutGame(round={}/{}, active=P{}, status={})",
            self.game.round(),
            self.game.total_rounds(),
            self.game.active_player().0,
            status
        )
    }
}
