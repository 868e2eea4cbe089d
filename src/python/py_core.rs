//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::actions::ActionCatalog;
use crate::cards::Card;
use crate::core::{Action, ActionKind, ActionSpec};

/// Python wrapper for Card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Value in play.
    #[getter]
    fn face(&self) -> u8 {
        self.0.face()
    }

    /// Value on the other side.
    #[getter]
    fn back(&self) -> u8 {
        self.0.back()
    }

    fn __repr__(&self) -> String {
        format!("Card({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        (u64::from(self.0.face()) << 8) | u64::from(self.0.back())
    }
}

/// Python wrapper for a catalog entry.
#[pyclass(name = "ActionSpec")]
#[derive(Clone, Debug)]
pub struct PyActionSpec(pub ActionSpec);

#[pymethods]
impl PyActionSpec {
    /// Catalog ID.
    #[getter]
    fn id(&self) -> u32 {
        self.0.id.0
    }

    /// One of "scout", "scout_reverse", "show", "scout_and_show",
    /// "scout_and_show_reverse", "reverse_hand".
    #[getter]
    fn kind(&self) -> &'static str {
        match self.0.action.kind() {
            ActionKind::Scout => "scout",
            ActionKind::ScoutReverse => "scout_reverse",
            ActionKind::Show => "show",
            ActionKind::ScoutAndShow => "scout_and_show",
            ActionKind::ScoutAndShowReverse => "scout_and_show_reverse",
            ActionKind::ReverseHand => "reverse_hand",
        }
    }

    /// `(take, put)` of the scout half, if any.
    #[getter]
    fn scout(&self) -> Option<(usize, usize)> {
        match self.0.action {
            Action::Scout(scout) | Action::ScoutAndShow(scout, _) => Some((scout.take, scout.put)),
            _ => None,
        }
    }

    /// `(start, length)` of the show half, if any.
    #[getter]
    fn show(&self) -> Option<(usize, usize)> {
        match self.0.action {
            Action::Show(show) | Action::ScoutAndShow(_, show) => Some((show.start, show.length)),
            _ => None,
        }
    }

    fn __repr__(&self) -> String {
        format!("ActionSpec({}, {})", self.0.id, self.0.action)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        u64::from(self.0.id.0)
    }
}

/// Number of actions in the default catalog.
#[pyfunction]
pub fn action_space_size() -> usize {
    ActionCatalog::global().len()
}
