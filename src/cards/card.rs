//! Two-valued, orientable cards.
//!
//! Every card carries two numbers. The *face* value is the one that counts
//! for sets; reversing a card swaps which value is the face.

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;

/// A card with an active (face) value and a hidden (back) value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    face: u8,
    back: u8,
}

impl Card {
    /// Create a card showing `face`. Neither value may be zero.
    ///
    /// ```
    /// use scout_engine::cards::Card;
    ///
    /// let mut card = Card::new(3, 8).unwrap();
    /// card.reverse();
    /// assert_eq!(card.face(), 8);
    /// assert!(Card::new(0, 4).is_err());
    /// ```
    pub fn new(face: u8, back: u8) -> Result<Self, ConfigError> {
        if face == 0 || back == 0 {
            return Err(ConfigError::ZeroCardValue(face, back));
        }
        Ok(Self { face, back })
    }

    /// Create a card from values known to be non-zero.
    pub(crate) const fn pair(face: u8, back: u8) -> Self {
        debug_assert!(face != 0 && back != 0);
        Self { face, back }
    }

    /// The active value.
    #[must_use]
    pub const fn face(&self) -> u8 {
        self.face
    }

    /// The inactive value.
    #[must_use]
    pub const fn back(&self) -> u8 {
        self.back
    }

    /// Both values, face first.
    #[must_use]
    pub const fn values(&self) -> (u8, u8) {
        (self.face, self.back)
    }

    /// Swap face and back in place.
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.face, &mut self.back);
    }

    /// A reversed copy.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            face: self.back,
            back: self.face,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.face, self.back)
    }
}
