//! Deck composition, shuffling and dealing.
//!
//! The deck is a pure function of the player count:
//! - every pair `(i, j)` with `1 <= i < j <= 9` (36 cards)
//! - `(9, 10)` for 3 or 5 players
//! - `(i, 10)` for `i` in `1..=8` for 2, 4 or 5 players
//!
//! Each round shuffles and deals a fresh copy of the same composition.

use tracing::trace;

use super::card::Card;
use crate::core::config::{MAX_PLAYERS, MIN_PLAYERS};
use crate::core::error::ConfigError;
use crate::core::rng::GameRng;

/// An ordered pile of cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the unshuffled deck for a table of `player_count`.
    ///
    /// ```
    /// use scout_engine::cards::Deck;
    ///
    /// assert_eq!(Deck::for_players(4).unwrap().len(), 44);
    /// assert!(Deck::for_players(1).is_err());
    /// ```
    pub fn for_players(player_count: usize) -> Result<Self, ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(ConfigError::PlayerCount(player_count));
        }

        let mut cards = Vec::with_capacity(45);
        for i in 1..=9u8 {
            for j in (i + 1)..=9 {
                cards.push(Card::pair(i, j));
            }
        }

        if player_count == 3 || player_count == 5 {
            cards.push(Card::pair(9, 10));
        }

        if player_count != 3 {
            cards.extend((1..=8u8).map(|i| Card::pair(i, 10)));
        }

        Ok(Self { cards })
    }

    /// Build, then shuffle, the deck for `player_count`.
    pub fn shuffled(player_count: usize, rng: &mut GameRng) -> Result<Self, ConfigError> {
        let mut deck = Self::for_players(player_count)?;
        deck.shuffle(rng);
        Ok(deck)
    }

    /// Randomize order, then flip each card with probability 1/2.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
        for card in &mut self.cards {
            if rng.coin_flip() {
                card.reverse();
            }
        }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Deal round-robin into equal hands.
    ///
    /// Each player gets `len / player_count` cards; the remainder is not
    /// dealt. Zero players get no hands.
    #[must_use]
    pub fn deal(self, player_count: usize) -> Vec<Vec<Card>> {
        if player_count == 0 {
            return Vec::new();
        }
        let per_hand = self.cards.len() / player_count;
        let mut hands = vec![Vec::with_capacity(per_hand); player_count];

        for (i, card) in self.cards.into_iter().take(per_hand * player_count).enumerate() {
            hands[i % player_count].push(card);
        }

        trace!(player_count, per_hand, "dealt hands");
        hands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_pairs(deck: &Deck) -> Vec<(u8, u8)> {
        let mut pairs: Vec<_> = deck
            .cards()
            .iter()
            .map(|c| (c.face().min(c.back()), c.face().max(c.back())))
            .collect();
        pairs.sort_unstable();
        pairs
    }

    #[test]
    fn test_deck_sizes() {
        assert_eq!(Deck::for_players(2).unwrap().len(), 44);
        assert_eq!(Deck::for_players(3).unwrap().len(), 37);
        assert_eq!(Deck::for_players(4).unwrap().len(), 44);
        assert_eq!(Deck::for_players(5).unwrap().len(), 45);
    }

    #[test]
    fn test_bad_player_counts() {
        assert_eq!(Deck::for_players(0), Err(ConfigError::PlayerCount(0)));
        assert_eq!(Deck::for_players(6), Err(ConfigError::PlayerCount(6)));
    }

    #[test]
    fn test_ten_cards_by_player_count() {
        let tens = |n| {
            Deck::for_players(n)
                .unwrap()
                .cards()
                .iter()
                .filter(|c| c.back() == 10)
                .count()
        };
        assert_eq!(tens(2), 8);
        assert_eq!(tens(3), 1);
        assert_eq!(tens(4), 8);
        assert_eq!(tens(5), 9);
    }

    #[test]
    fn test_composition_is_pure() {
        for n in 2..=5 {
            assert_eq!(Deck::for_players(n).unwrap(), Deck::for_players(n).unwrap());
        }
    }

    #[test]
    fn test_no_duplicate_cards() {
        let deck = Deck::for_players(5).unwrap();
        let mut pairs = sorted_pairs(&deck);
        pairs.dedup();
        assert_eq!(pairs.len(), 45);
    }

    #[test]
    fn test_shuffle_preserves_cards() {
        let mut rng = GameRng::new(42);
        let plain = Deck::for_players(4).unwrap();
        let shuffled = Deck::shuffled(4, &mut rng).unwrap();

        assert_ne!(plain.cards(), shuffled.cards());
        assert_eq!(sorted_pairs(&plain), sorted_pairs(&shuffled));
    }

    #[test]
    fn test_shuffle_flips_some_cards() {
        let mut rng = GameRng::new(42);
        let deck = Deck::shuffled(4, &mut rng).unwrap();
        let flipped = deck.cards().iter().filter(|c| c.face() > c.back()).count();

        assert!(flipped > 0 && flipped < deck.len());
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let a = Deck::shuffled(3, &mut GameRng::new(9)).unwrap();
        let b = Deck::shuffled(3, &mut GameRng::new(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_deal_to_nobody() {
        assert!(Deck::for_players(2).unwrap().deal(0).is_empty());
    }

    #[test]
    fn test_deal_even_hands() {
        let hands = Deck::for_players(3).unwrap().deal(3);
        assert_eq!(hands.len(), 3);
        assert!(hands.iter().all(|h| h.len() == 12));

        let hands = Deck::for_players(5).unwrap().deal(5);
        assert!(hands.iter().all(|h| h.len() == 9));
    }
}
