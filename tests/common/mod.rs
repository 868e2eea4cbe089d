//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use scout_engine::{
    legal_action_ids, Action, ActionCatalog, ActionSpaceBounds, Card, GameRng, RulesEngine,
    ScoutGame,
};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Build cards from `(face, back)` pairs.
pub fn cards(values: &[(u8, u8)]) -> Vec<Card> {
    values
        .iter()
        .map(|&(face, back)| Card::new(face, back).unwrap())
        .collect()
}

/// Catalog small enough to scan on every step of a playout.
pub fn small_catalog() -> ActionCatalog {
    ActionCatalog::new(ActionSpaceBounds::new(14, 6).unwrap())
}

/// Uniformly random legal action for the active player.
pub fn random_legal_action(game: &ScoutGame, catalog: &ActionCatalog, rng: &mut GameRng) -> Action {
    let ids = legal_action_ids(game, catalog, game.active_player());
    assert!(!ids.is_empty(), "active player has no legal action");
    let id = ids[rng.gen_range_usize(0..ids.len())];
    catalog.get(id).unwrap().action
}

/// Play random legal actions until the game completes or `max_steps` pass.
///
/// Returns the number of actions taken.
pub fn random_playout(
    game: &mut ScoutGame,
    catalog: &ActionCatalog,
    policy_seed: u64,
    max_steps: usize,
) -> usize {
    let mut rng = GameRng::new(policy_seed);
    let mut steps = 0;
    while !game.is_complete() && steps < max_steps {
        let player = game.active_player();
        let action = random_legal_action(game, catalog, &mut rng);
        game.apply_action(player, &action).unwrap();
        steps += 1;
    }
    steps
}
