//! One-ply greedy policy: weighted move stats in combat, a single
//! clone-apply-evaluate pass over the offers in a loot phase.

use crate::eval::{default_evaluate, EvalFn};
use crate::search::{step, Strategy};
use gauntlet_core::logic::available_moves;
use gauntlet_core::{Action, MoveKind, RunState};
use log::debug;

#[derive(Debug, Clone, Copy)]
pub struct GreedyConfig {
    pub atk_weight: f64,
    pub def_weight: f64,
    pub eval: EvalFn,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            atk_weight: 2.0,
            def_weight: 1.0,
            eval: default_evaluate,
        }
    }
}

pub struct Greedy {
    config: GreedyConfig,
}

impl Greedy {
    pub fn new(config: GreedyConfig) -> Self {
        Self { config }
    }

    /// Score each charged move on current stats only; ties keep the
    /// first-seen move, no simulation involved.
    fn pick_move(&self, state: &RunState) -> Action {
        let mut best: Option<(MoveKind, f64)> = None;
        for kind in available_moves(&state.player) {
            let stat = state.player.move_stat(kind);
            let score =
                stat.attack as f64 * self.config.atk_weight + stat.defense as f64 * self.config.def_weight;
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((kind, score));
            }
        }
        match best {
            Some((kind, _)) => Action::Move(kind),
            None => Action::Move(MoveKind::Rock),
        }
    }

    /// Try each offer on a clone and keep the best evaluation; ties keep
    /// the first-seen index.
    fn pick_loot(&self, state: &RunState) -> Action {
        let mut best_index = 0;
        let mut best_score = f64::NEG_INFINITY;
        for index in 0..state.loot_options.len() {
            let next = step(state, Action::PickLoot(index as u8));
            let score = (self.config.eval)(&next);
            if score > best_score {
                best_score = score;
                best_index = index;
            }
        }
        Action::PickLoot(best_index as u8)
    }
}

impl Strategy for Greedy {
    fn pick_action(&mut self, state: &RunState) -> Action {
        let action = if state.loot_phase && !state.loot_options.is_empty() {
            self.pick_loot(state)
        } else {
            self.pick_move(state)
        };
        debug!("greedy: picked {:?}", action);
        action
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}
