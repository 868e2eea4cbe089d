//! Set validation and comparison.
//!
//! A *set* is a run of cards read by their face values. Two or more cards
//! form a valid set when they are either
//! - *matching*: all faces equal, or
//! - *consecutive*: each face differs from the previous one by exactly +1,
//!   or by exactly -1, with the direction fixed by the first two cards.
//!
//! A single card is always a valid set and ranks with matching sets.
//!
//! Strength ordering, strongest first:
//! 1. more cards
//! 2. matching over consecutive
//! 3. lower minimum face
//!
//! Sets equal on all three are ties, and a tie never beats the active set.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::card::Card;

/// Why a run of cards is not a valid set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetError {
    #[error("set cannot be empty")]
    Empty,
    #[error("cards are neither matching nor consecutive")]
    Broken,
}

/// Shape of a valid set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetShape {
    Single,
    Matching,
    Ascending,
    Descending,
}

impl SetShape {
    /// Matching (and single) sets outrank consecutive ones.
    fn rank(self) -> u8 {
        match self {
            SetShape::Single | SetShape::Matching => 1,
            SetShape::Ascending | SetShape::Descending => 0,
        }
    }
}

/// Everything needed to compare two valid sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetStrength {
    pub len: usize,
    pub shape: SetShape,
    pub min_face: u8,
}

impl SetStrength {
    /// Classify a slice of cards.
    pub fn of(cards: &[Card]) -> Result<Self, SetError> {
        Self::from_faces(cards.iter().map(Card::face))
    }

    /// Classify a sequence of face values in a single pass.
    pub fn from_faces(faces: impl IntoIterator<Item = u8>) -> Result<Self, SetError> {
        let mut faces = faces.into_iter();
        let first = faces.next().ok_or(SetError::Empty)?;

        let mut strength = SetStrength {
            len: 1,
            shape: SetShape::Single,
            min_face: first,
        };
        let mut prev = first;

        for face in faces {
            let step = i16::from(face) - i16::from(prev);
            strength.shape = match (strength.shape, step) {
                (SetShape::Single | SetShape::Matching, 0) => SetShape::Matching,
                (SetShape::Single | SetShape::Ascending, 1) => SetShape::Ascending,
                (SetShape::Single | SetShape::Descending, -1) => SetShape::Descending,
                _ => return Err(SetError::Broken),
            };
            strength.len += 1;
            strength.min_face = strength.min_face.min(face);
            prev = face;
        }

        Ok(strength)
    }

    /// Check if this set may replace `active`. Anything beats an empty table.
    #[must_use]
    pub fn beats(&self, active: Option<&SetStrength>) -> bool {
        let Some(active) = active else {
            return true;
        };

        match self.len.cmp(&active.len) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => match self.shape.rank().cmp(&active.shape.rank()) {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => self.min_face < active.min_face,
            },
        }
    }
}

/// Check a run of cards, returning its shape.
///
/// ```
/// use scout_engine::cards::{validate_set, Card, SetShape};
///
/// let cards: Vec<Card> = [(5, 1), (4, 1), (3, 1)]
///     .iter()
///     .map(|&(f, b)| Card::new(f, b).unwrap())
///     .collect();
/// assert_eq!(validate_set(&cards), Ok(SetShape::Descending));
/// ```
pub fn validate_set(cards: &[Card]) -> Result<SetShape, SetError> {
    SetStrength::of(cards).map(|s| s.shape)
}

/// Check whether `candidate` beats the `active` set.
///
/// Fails if either run is not a valid set. An empty `active` is the empty
/// table and is always beaten.
pub fn beats(candidate: &[Card], active: &[Card]) -> Result<bool, SetError> {
    let candidate = SetStrength::of(candidate)?;
    if active.is_empty() {
        return Ok(true);
    }
    let active = SetStrength::of(active)?;
    Ok(candidate.beats(Some(&active)))
}
