//! Action representation.
//!
//! An `Action` is a tagged union with one variant per move shape, so each
//! variant carries only the parameters it uses:
//! - `Scout`: take an end card of the active set into the hand
//! - `Show`: play a contiguous slice of the hand
//! - `ScoutAndShow`: both, atomically, once per round
//! - `ReverseHand`: flip the whole hand, before the first move of a round
//!
//! `ActionKind` is the flat six-way classification used by the action
//! catalog, where the reversed scouts are separate kinds.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Take one card from an end of the active set and insert it into the hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoutMove {
    /// Position in the active set (must be 0 or the last index).
    pub take: usize,
    /// Insertion position in the hand (0..=hand length).
    pub put: usize,
    /// Flip the card before inserting it.
    pub reverse: bool,
}

impl ScoutMove {
    #[must_use]
    pub const fn new(take: usize, put: usize) -> Self {
        Self {
            take,
            put,
            reverse: false,
        }
    }

    #[must_use]
    pub const fn reversed(take: usize, put: usize) -> Self {
        Self {
            take,
            put,
            reverse: true,
        }
    }
}

/// Play the hand slice `[start, start + length)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShowMove {
    pub start: usize,
    pub length: usize,
}

impl ShowMove {
    #[must_use]
    pub const fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// One past the last hand index of the slice.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.length
    }
}

/// A complete game action.
///
/// ```
/// use scout_engine::core::{Action, ActionKind, ScoutMove, ShowMove};
///
/// let action = Action::ScoutAndShow(ScoutMove::reversed(0, 2), ShowMove::new(1, 3));
/// assert_eq!(action.kind(), ActionKind::ScoutAndShowReverse);
/// assert_eq!(action.to_string(), "scout~(0->2)+show[1..4]");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Scout(ScoutMove),
    Show(ShowMove),
    ScoutAndShow(ScoutMove, ShowMove),
    ReverseHand,
}

impl Action {
    /// Convenience constructor for a plain scout.
    #[must_use]
    pub const fn scout(take: usize, put: usize) -> Self {
        Self::Scout(ScoutMove::new(take, put))
    }

    /// Convenience constructor for a show.
    #[must_use]
    pub const fn show(start: usize, length: usize) -> Self {
        Self::Show(ShowMove::new(start, length))
    }

    /// The catalog kind of this action.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Scout(scout) if scout.reverse => ActionKind::ScoutReverse,
            Action::Scout(_) => ActionKind::Scout,
            Action::Show(_) => ActionKind::Show,
            Action::ScoutAndShow(scout, _) if scout.reverse => ActionKind::ScoutAndShowReverse,
            Action::ScoutAndShow(..) => ActionKind::ScoutAndShow,
            Action::ReverseHand => ActionKind::ReverseHand,
        }
    }
}

impl std::fmt::Display for ScoutMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker = if self.reverse { "~" } else { "" };
        write!(f, "scout{}({}->{})", marker, self.take, self.put)
    }
}

impl std::fmt::Display for ShowMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "show[{}..{}]", self.start, self.end())
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Scout(scout) => write!(f, "{}", scout),
            Action::Show(show) => write!(f, "{}", show),
            Action::ScoutAndShow(scout, show) => write!(f, "{}+{}", scout, show),
            Action::ReverseHand => write!(f, "reverse_hand"),
        }
    }
}

/// Flat action classification, in catalog order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActionKind {
    Scout,
    ScoutReverse,
    Show,
    ScoutAndShow,
    ScoutAndShowReverse,
    ReverseHand,
}

/// Dense action identifier within an action catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActionId(pub u32);

impl ActionId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Position in a validity mask.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A catalog entry: an action and its stable ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionSpec {
    pub id: ActionId,
    pub action: Action,
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay, debugging and training data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Round number (1-based) the action was taken in.
    pub round: u32,

    /// Sequence number across the whole game.
    pub sequence: u32,
}
