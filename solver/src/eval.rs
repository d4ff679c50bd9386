//! State evaluation. Every strategy scores states through a plain
//! `fn(&RunState) -> f64`; higher is always better and the function must be
//! total, including on terminal states.

use gauntlet_core::{MoveKind, RunState};

/// Pluggable evaluation hook carried by every strategy config.
pub type EvalFn = fn(&RunState) -> f64;

/// Hyperparameters for the default evaluation.
#[derive(Debug, Clone, Copy)]
pub struct EvalWeights {
    /// Weight on current/max health. Survival dominates, so HP counts double.
    pub hp_ratio: f64,
    pub armor_ratio: f64,
    /// Weight on the summed (attack + defense) of the two strongest moves.
    pub synergy: f64,
    /// Penalty per spam-locked move.
    pub spam_penalty: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            hp_ratio: 2.0,
            armor_ratio: 1.0,
            synergy: 0.01,
            spam_penalty: 0.3,
        }
    }
}

/// Score a state: progress (enemies defeated) plus weighted survivability
/// and move synergy, minus spam lockouts. A dead player scores 0.
pub fn evaluate(state: &RunState, weights: &EvalWeights) -> f64 {
    let player = &state.player;
    if player.is_dead() {
        return 0.0;
    }

    let mut powers: Vec<i32> = MoveKind::ALL
        .iter()
        .map(|kind| {
            let stat = player.move_stat(*kind);
            stat.attack + stat.defense
        })
        .collect();
    powers.sort_unstable_by(|a, b| b.cmp(a));
    let synergy = (powers[0] + powers[1]) as f64;

    let spam_locked = MoveKind::ALL
        .iter()
        .filter(|kind| player.move_stat(**kind).charges < 0)
        .count() as f64;

    state.enemies_defeated() as f64
        + weights.hp_ratio * player.health.ratio()
        + weights.armor_ratio * player.armor.ratio()
        + weights.synergy * synergy
        - weights.spam_penalty * spam_locked
}

/// `evaluate` with the default weights; the stock `EvalFn` for every
/// strategy config.
pub fn default_evaluate(state: &RunState) -> f64 {
    evaluate(state, &EvalWeights::default())
}
