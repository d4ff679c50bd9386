//! Bounded-horizon dynamic programming over the action tree, memoized on a
//! canonical encoding of every field that can influence future value.

use crate::eval::{default_evaluate, EvalFn};
use crate::search::{step, Strategy};
use gauntlet_core::logic::available_actions;
use gauntlet_core::{Action, Fighter, LootOption, MoveKind, RunState};
use log::{debug, warn};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
pub struct DpConfig {
    pub max_horizon: u32,
    pub eval: EvalFn,
}

impl Default for DpConfig {
    fn default() -> Self {
        Self {
            max_horizon: 5,
            eval: default_evaluate,
        }
    }
}

/// Memo key: remaining depth plus all mutable fighter state on both sides
/// of the active duel, the roster position, and the pending loot offer.
/// Entries are pure functions of this key, so hits are always safe.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct DpKey {
    depth: u32,
    enemy_index: usize,
    player: Fighter,
    enemy: Option<Fighter>,
    loot_phase: bool,
    loot_options: Vec<LootOption>,
}

impl DpKey {
    fn new(state: &RunState, depth: u32) -> Self {
        Self {
            depth,
            enemy_index: state.current_enemy_index,
            player: state.player,
            enemy: state.current_enemy().copied(),
            loot_phase: state.loot_phase,
            loot_options: state.loot_options.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DpResult {
    pub value: f64,
    pub action: Option<Action>,
}

pub struct Dp {
    config: DpConfig,
    memo: HashMap<DpKey, DpResult>,
}

impl Dp {
    pub fn new(config: DpConfig) -> Self {
        Self {
            config,
            memo: HashMap::new(),
        }
    }

    /// Best value reachable within `depth` steps, and the first action of a
    /// maximizing sequence. Public so the memo's transparency (same input,
    /// bit-identical output, with or without cached entries) stays testable.
    pub fn search(&mut self, state: &RunState, depth: u32) -> DpResult {
        if depth == 0 || state.is_terminal() {
            return DpResult {
                value: (self.config.eval)(state),
                action: None,
            };
        }

        let key = DpKey::new(state, depth);
        if let Some(hit) = self.memo.get(&key) {
            return *hit;
        }

        let mut best = DpResult {
            value: f64::NEG_INFINITY,
            action: None,
        };
        for action in available_actions(state) {
            let next = step(state, action);
            let sub = self.search(&next, depth - 1);
            if sub.value > best.value {
                best = DpResult {
                    value: sub.value,
                    action: Some(action),
                };
            }
        }

        self.memo.insert(key, best);
        best
    }
}

impl Strategy for Dp {
    fn pick_action(&mut self, state: &RunState) -> Action {
        // fresh table per decision: nothing cached outlives the
        // authoritative state it was computed against
        self.memo.clear();

        let result = self.search(state, self.config.max_horizon);
        match result.action {
            Some(action) => {
                debug!("dp: picked {:?} (value {:.2})", action, result.value);
                action
            }
            None => {
                warn!("dp: no action found, falling back to Rock");
                Action::Move(MoveKind::Rock)
            }
        }
    }

    fn name(&self) -> &'static str {
        "dp"
    }
}
