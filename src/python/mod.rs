//! Python bindings for the Scout engine.
//!
//! Built with the `python` feature for RL training loops.
//!
//! # Quick Start
//!
//! ```python
//! import numpy as np
//! import scout_engine as scout
//!
//! rng = np.random.default_rng(0)
//! game = scout.ScoutGame(player_count=3, seed=42)
//! while not game.is_complete:
//!     mask = game.valid_actions_mask()
//!     game.apply_action_id(int(rng.choice(np.flatnonzero(mask))))
//!
//! print(game.scores)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// scout_engine: Scout rules engine with a discrete action space.
#[pymodule]
fn scout_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core types
    m.add_class::<PyCard>()?;
    m.add_class::<PyActionSpec>()?;

    // Games
    m.add_class::<PyScoutGame>()?;

    m.add_function(wrap_pyfunction!(action_space_size, m)?)?;

    Ok(())
}
