//! Copy-out views of a game.
//!
//! Snapshots own their data, so they can outlive any lock held while taking
//! them. `GameSnapshot` carries only public information; a hand's contents
//! appear only in that player's own `PlayerSnapshot`.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{GameId, Player, PlayerId};

/// What every player can see about a seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    pub index: PlayerId,
    pub score: i32,
    pub hand_size: usize,
    pub may_reverse_hand: bool,
    pub may_scout_and_show: bool,
}

impl From<&Player> for PlayerSummary {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            index: player.id,
            score: player.score,
            hand_size: player.hand.len(),
            may_reverse_hand: player.may_reverse_hand,
            may_scout_and_show: player.may_scout_and_show,
        }
    }
}

/// A seat including its hand. Only for the owning player's view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    #[serde(flatten)]
    pub summary: PlayerSummary,
    pub hand: Vec<Card>,
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        Self {
            summary: PlayerSummary::from(player),
            hand: player.hand.clone(),
        }
    }
}

/// Public game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game_id: GameId,
    pub players: Vec<PlayerSummary>,
    pub active_set: Vec<Card>,
    pub active_set_owner: Option<PlayerId>,
    pub active_player: PlayerId,
    pub consecutive_scouts: usize,
    /// Current round, 1-based.
    pub round: u32,
    pub total_rounds: u32,
    pub complete: bool,
}
