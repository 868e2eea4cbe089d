//! The set on the table that the next show has to beat.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, SetError, SetStrength};
use crate::core::PlayerId;

/// Cards on the table plus the player who showed them.
///
/// Scouting removes cards from either end; the owner stays recorded even
/// when the last card is scouted away.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSet {
    cards: SmallVec<[Card; 12]>,
    owner: Option<PlayerId>,
}

impl ActiveSet {
    /// The cards, in table order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Who showed the current set. `None` at the start of a round.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// Check if `index` is the first or last card.
    #[must_use]
    pub fn is_end(&self, index: usize) -> bool {
        !self.cards.is_empty() && (index == 0 || index == self.cards.len() - 1)
    }

    /// Strength of the set, or `None` for an empty table.
    pub fn strength(&self) -> Result<Option<SetStrength>, SetError> {
        if self.cards.is_empty() {
            return Ok(None);
        }
        SetStrength::of(&self.cards).map(Some)
    }

    /// Strength of the set as it would be with the card at `index` removed.
    pub fn strength_without(&self, index: usize) -> Result<Option<SetStrength>, SetError> {
        if self.cards.len() <= 1 {
            return Ok(None);
        }
        let faces = self
            .cards
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, card)| card.face());
        SetStrength::from_faces(faces).map(Some)
    }

    /// Remove and return the card at `index`.
    pub(crate) fn take(&mut self, index: usize) -> Card {
        self.cards.remove(index)
    }

    /// Put a new set on the table.
    pub(crate) fn replace(&mut self, cards: SmallVec<[Card; 12]>, owner: PlayerId) {
        self.cards = cards;
        self.owner = Some(owner);
    }

    /// Clear the table for a new round.
    pub(crate) fn clear(&mut self) {
        self.cards.clear();
        self.owner = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn table(faces: &[u8]) -> ActiveSet {
        let mut set = ActiveSet::default();
        set.replace(
            faces.iter().map(|&f| Card::pair(f, 10)).collect(),
            PlayerId::new(0),
        );
        set
    }

    #[test]
    fn test_ends() {
        let set = table(&[3, 4, 5]);
        assert!(set.is_end(0));
        assert!(!set.is_end(1));
        assert!(set.is_end(2));
        assert!(!set.is_end(3));
        assert!(!ActiveSet::default().is_end(0));
    }

    #[test]
    fn test_strength_without_end() {
        let set = table(&[3, 4, 5]);
        let remaining = set.strength_without(0).unwrap().unwrap();
        assert_eq!(remaining.len, 2);
        assert_eq!(remaining.min_face, 4);

        assert_eq!(table(&[7]).strength_without(0), Ok(None));
        assert_eq!(ActiveSet::default().strength(), Ok(None));
    }

    #[test]
    fn test_owner_survives_emptying() {
        let mut set = ActiveSet::default();
        set.replace(smallvec![Card::pair(2, 3)], PlayerId::new(1));

        set.take(0);
        assert!(set.is_empty());
        assert_eq!(set.owner(), Some(PlayerId::new(1)));

        set.clear();
        assert_eq!(set.owner(), None);
    }
}
