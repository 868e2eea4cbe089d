//! Action validity masks.
//!
//! A mask is the catalog filtered through `RulesEngine::is_legal`, so an
//! entry is `true` exactly when `apply_action` would accept that action.

use super::catalog::ActionCatalog;
use crate::core::{ActionId, PlayerId};
use crate::rules::RulesEngine;

/// Legality of every catalog entry for `player`, indexed by action ID.
///
/// Players who cannot act (not their turn, unknown seat, game over) get an
/// all-`false` mask.
pub fn valid_actions_mask<E: RulesEngine + ?Sized>(
    engine: &E,
    catalog: &ActionCatalog,
    player: PlayerId,
) -> Vec<bool> {
    if engine.is_terminal().is_some() || engine.active_player() != player {
        return vec![false; catalog.len()];
    }
    catalog
        .iter()
        .map(|spec| engine.is_legal(player, &spec.action))
        .collect()
}

/// IDs of the legal actions for `player`, ascending.
pub fn legal_action_ids<E: RulesEngine + ?Sized>(
    engine: &E,
    catalog: &ActionCatalog,
    player: PlayerId,
) -> Vec<ActionId> {
    valid_actions_mask(engine, catalog, player)
        .into_iter()
        .enumerate()
        .filter(|&(_, legal)| legal)
        .map(|(i, _)| ActionId::new(i as u32))
        .collect()
}
