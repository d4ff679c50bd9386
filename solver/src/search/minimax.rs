//! Depth-bounded minimax with alpha-beta pruning.
//!
//! The minimizing layer models the environment's reply as an adversary
//! picking from the same action set. The real opponent draws uniformly at
//! random among its charged moves, so this is a deliberate worst-case
//! approximation, kept for parity with the live bot's behavior.

use crate::eval::{default_evaluate, EvalFn};
use crate::search::{step, Strategy};
use gauntlet_core::logic::available_actions;
use gauntlet_core::{Action, MoveKind, RunState};
use log::{debug, warn};

#[derive(Debug, Clone, Copy)]
pub struct MinimaxConfig {
    pub max_depth: u32,
    pub eval: EvalFn,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            eval: default_evaluate,
        }
    }
}

pub struct Minimax {
    config: MinimaxConfig,
}

impl Minimax {
    pub fn new(config: MinimaxConfig) -> Self {
        Self { config }
    }

    fn alpha_beta(
        &self,
        state: &RunState,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> f64 {
        if depth == 0 || state.is_terminal() {
            return (self.config.eval)(state);
        }

        if maximizing {
            let mut value = f64::NEG_INFINITY;
            for action in available_actions(state) {
                let next = step(state, action);
                value = value.max(self.alpha_beta(&next, depth - 1, alpha, beta, false));
                alpha = alpha.max(value);
                if alpha >= beta {
                    break;
                }
            }
            value
        } else {
            let mut value = f64::INFINITY;
            for action in available_actions(state) {
                let next = step(state, action);
                value = value.min(self.alpha_beta(&next, depth - 1, alpha, beta, true));
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            value
        }
    }
}

impl Strategy for Minimax {
    fn pick_action(&mut self, state: &RunState) -> Action {
        let mut best: Option<(Action, f64)> = None;
        for action in available_actions(state) {
            let next = step(state, action);
            let value = self.alpha_beta(
                &next,
                self.config.max_depth.saturating_sub(1),
                f64::NEG_INFINITY,
                f64::INFINITY,
                false,
            );
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((action, value));
            }
        }

        match best {
            Some((action, value)) => {
                debug!("minimax: picked {:?} (value {:.2})", action, value);
                action
            }
            None => {
                warn!("minimax: no action found, falling back to Rock");
                Action::Move(MoveKind::Rock)
            }
        }
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}
