pub mod actions;
pub mod loot;
pub mod resolution;

pub use actions::{available_actions, available_moves};
pub use resolution::{apply_action, apply_loot, simulate_one_round, simulate_one_round_with};

use crate::types::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("enemy index {index} past end of roster ({count} enemies)")]
    EnemyIndexOutOfRange { index: usize, count: usize },
    #[error("loot phase flag disagrees with loot options")]
    LootPhaseMismatch,
    #[error("more than 4 loot options ({0})")]
    TooManyLootOptions(usize),
    #[error("health or armor outside [0, max]")]
    PoolOutOfRange,
    #[error("charges outside [-1, 3]")]
    ChargesOutOfRange,
}

/// Build the state for a fresh run. The enemy roster is fought in order;
/// an empty roster is an already-won run.
pub fn new_run(player: Fighter, enemies: Vec<Fighter>, seed: u64) -> RunState {
    RunState {
        player,
        enemies,
        current_enemy_index: 0,
        loot_phase: false,
        loot_options: Vec::new(),
        rng_seed: seed,
    }
}

/// Check the structural invariants an externally produced state (e.g. one
/// translated from a game server) must satisfy before the engine or any
/// search is allowed to consume it.
pub fn validate(state: &RunState) -> Result<(), EngineError> {
    if state.current_enemy_index > state.enemies.len() {
        return Err(EngineError::EnemyIndexOutOfRange {
            index: state.current_enemy_index,
            count: state.enemies.len(),
        });
    }
    if state.loot_phase != !state.loot_options.is_empty() {
        return Err(EngineError::LootPhaseMismatch);
    }
    if state.loot_options.len() > 4 {
        return Err(EngineError::TooManyLootOptions(state.loot_options.len()));
    }
    for fighter in std::iter::once(&state.player).chain(state.enemies.iter()) {
        for pool in [&fighter.health, &fighter.armor] {
            if pool.current < 0 || pool.current > pool.max {
                return Err(EngineError::PoolOutOfRange);
            }
        }
        for kind in MoveKind::ALL {
            let charges = fighter.move_stat(kind).charges;
            if !(SPAM_LOCK..=CHARGE_CAP).contains(&charges) {
                return Err(EngineError::ChargesOutOfRange);
            }
        }
    }
    Ok(())
}
