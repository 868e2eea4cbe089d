//! Discrete action catalog.
//!
//! Every action expressible within an `ActionSpaceBounds` gets a dense ID.
//! The layout is a fixed sequence of blocks, one per `ActionKind`:
//!
//! | Block                 | Entries                       |
//! |-----------------------|-------------------------------|
//! | Scout                 | `A * (H + 1)`                 |
//! | ScoutReverse          | `A * (H + 1)`                 |
//! | Show                  | `H * (H + 1) / 2`             |
//! | ScoutAndShow          | Scout block x Show block      |
//! | ScoutAndShowReverse   | ScoutReverse block x Show block |
//! | ReverseHand           | 1                             |
//!
//! where `H` is the hand-size bound and `A` the active-set bound. Because
//! the layout is arithmetic, `id_of` computes an ID without searching.

use std::ops::Range;

use once_cell::sync::Lazy;

use crate::core::{
    Action, ActionId, ActionKind, ActionSpaceBounds, ActionSpec, ScoutMove, ShowMove,
};

static GLOBAL: Lazy<ActionCatalog> =
    Lazy::new(|| ActionCatalog::new(ActionSpaceBounds::default()));

/// Immutable, ordered enumeration of the action space.
#[derive(Clone, Debug)]
pub struct ActionCatalog {
    bounds: ActionSpaceBounds,
    entries: Vec<ActionSpec>,
    /// Start ID of each kind's block, in `kind_index` order, plus the total.
    offsets: [u32; 7],
}

impl ActionCatalog {
    /// Enumerate the action space for `bounds`.
    pub fn new(bounds: ActionSpaceBounds) -> Self {
        let hand = bounds.max_hand_size();
        let table = bounds.max_active_set_size();

        let mut offsets = [0u32; 7];
        for (i, size) in bounds.block_sizes().iter().enumerate() {
            offsets[i + 1] = offsets[i] + size;
        }

        let scout_moves = move |reverse: bool| {
            (0..table).flat_map(move |take| {
                (0..=hand).map(move |put| ScoutMove { take, put, reverse })
            })
        };
        let show_moves = move || {
            (0..hand).flat_map(move |start| {
                (1..=hand - start).map(move |length| ShowMove::new(start, length))
            })
        };

        let mut actions: Vec<Action> = Vec::with_capacity(offsets[6] as usize);
        actions.extend(scout_moves(false).map(Action::Scout));
        actions.extend(scout_moves(true).map(Action::Scout));
        actions.extend(show_moves().map(Action::Show));
        for reverse in [false, true] {
            for scout in scout_moves(reverse) {
                actions.extend(show_moves().map(|show| Action::ScoutAndShow(scout, show)));
            }
        }
        actions.push(Action::ReverseHand);

        let entries = actions
            .into_iter()
            .enumerate()
            .map(|(i, action)| ActionSpec {
                id: ActionId::new(i as u32),
                action,
            })
            .collect();

        Self {
            bounds,
            entries,
            offsets,
        }
    }

    /// The process-wide catalog for the default bounds.
    pub fn global() -> &'static ActionCatalog {
        &GLOBAL
    }

    #[must_use]
    pub fn bounds(&self) -> ActionSpaceBounds {
        self.bounds
    }

    /// Number of actions (the length of every mask).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ActionId) -> Option<&ActionSpec> {
        self.entries.get(id.index())
    }

    /// All entries in ID order.
    pub fn iter(&self) -> impl Iterator<Item = &ActionSpec> {
        self.entries.iter()
    }

    /// ID range covered by one kind.
    #[must_use]
    pub fn range_of(&self, kind: ActionKind) -> Range<u32> {
        let i = kind_index(kind);
        self.offsets[i]..self.offsets[i + 1]
    }

    /// ID of `action`, or `None` if it lies outside the bounds.
    ///
    /// ```
    /// use scout_engine::actions::ActionCatalog;
    /// use scout_engine::core::Action;
    ///
    /// let catalog = ActionCatalog::global();
    /// let id = catalog.id_of(&Action::show(2, 3)).unwrap();
    /// assert_eq!(catalog.get(id).unwrap().action, Action::show(2, 3));
    /// ```
    #[must_use]
    pub fn id_of(&self, action: &Action) -> Option<ActionId> {
        let base = self.offsets[kind_index(action.kind())];
        let index = match *action {
            Action::Scout(scout) => self.scout_index(scout)?,
            Action::Show(show) => self.show_index(show)?,
            Action::ScoutAndShow(scout, show) => {
                let shows = self.range_of(ActionKind::Show).len() as u32;
                self.scout_index(scout)? * shows + self.show_index(show)?
            }
            Action::ReverseHand => 0,
        };
        Some(ActionId::new(base + index))
    }

    fn scout_index(&self, scout: ScoutMove) -> Option<u32> {
        let hand = self.bounds.max_hand_size();
        if scout.take >= self.bounds.max_active_set_size() || scout.put > hand {
            return None;
        }
        Some((scout.take * (hand + 1) + scout.put) as u32)
    }

    fn show_index(&self, show: ShowMove) -> Option<u32> {
        let hand = self.bounds.max_hand_size();
        let fits = show.start < hand && show.length >= 1 && show.length <= hand - show.start;
        if !fits {
            return None;
        }
        // Rows before `start` hold H, H-1, ... entries.
        let row = show.start * hand - show.start * show.start.saturating_sub(1) / 2;
        Some((row + show.length - 1) as u32)
    }
}

fn kind_index(kind: ActionKind) -> usize {
    match kind {
        ActionKind::Scout => 0,
        ActionKind::ScoutReverse => 1,
        ActionKind::Show => 2,
        ActionKind::ScoutAndShow => 3,
        ActionKind::ScoutAndShowReverse => 4,
        ActionKind::ReverseHand => 5,
    }
}
