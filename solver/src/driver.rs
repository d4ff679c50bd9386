//! Drives a full run: the only place the authoritative state is mutated.

use crate::search::Strategy;
use gauntlet_core::logic::{self, loot, EngineError};
use gauntlet_core::{Action, RunState};
use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy)]
pub struct DriverConfig {
    /// Loot options rolled after each victory.
    pub loot_count: usize,
    /// Hard cap on actions per run. Two fighters that can no longer hurt
    /// each other would otherwise loop forever.
    pub max_actions: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            loot_count: 3,
            max_actions: 1000,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RunSummary {
    pub enemies_defeated: usize,
    pub survived: bool,
    pub actions_taken: u32,
}

/// A finished run: everything needed to replay or inspect it. The loot
/// seed and count are kept so a replay can re-roll the exact offers the
/// driver presented.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub initial_state: RunState,
    pub actions: Vec<Action>,
    pub final_state: RunState,
    pub summary: RunSummary,
    pub loot_seed: u64,
    pub loot_count: usize,
}

pub struct RunDriver {
    pub state: RunState,
    config: DriverConfig,
    loot_rng: StdRng,
    loot_seed: u64,
    initial_state: RunState,
    actions: Vec<Action>,
}

impl RunDriver {
    /// Wrap an externally supplied state, rejecting one that breaks the
    /// model invariants (a translation bug upstream, not a combat outcome).
    pub fn new(state: RunState, config: DriverConfig, loot_seed: u64) -> Result<Self, EngineError> {
        logic::validate(&state)?;
        Ok(Self {
            initial_state: state.clone(),
            state,
            config,
            loot_rng: StdRng::seed_from_u64(loot_seed),
            loot_seed,
            actions: Vec::new(),
        })
    }

    /// Let `strategy` play the run to the end. Each round the strategy
    /// picks from a snapshot and the engine advances the real state; after
    /// every victory with enemies left a fresh loot offer is rolled.
    pub fn play(&mut self, strategy: &mut dyn Strategy) -> RunSummary {
        while !self.state.is_terminal() {
            if self.actions.len() as u32 >= self.config.max_actions {
                warn!(
                    "run stopped after {} actions without a result",
                    self.actions.len()
                );
                break;
            }

            let action = strategy.pick_action(&self.state);
            let enemies_before = self.state.current_enemy_index;
            logic::apply_action(&mut self.state, action);
            self.actions.push(action);

            if self.state.current_enemy_index > enemies_before && !self.state.is_terminal() {
                self.state.loot_options =
                    loot::random_loot_options(&mut self.loot_rng, self.config.loot_count);
                self.state.loot_phase = !self.state.loot_options.is_empty();
            }
        }

        let summary = self.summary();
        info!(
            "run finished: {} enemies defeated, survived={}, {} actions",
            summary.enemies_defeated, summary.survived, summary.actions_taken
        );
        summary
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            enemies_defeated: self.state.enemies_defeated(),
            survived: !self.state.is_lost(),
            actions_taken: self.actions.len() as u32,
        }
    }

    pub fn into_record(self) -> RunRecord {
        let summary = self.summary();
        RunRecord {
            initial_state: self.initial_state,
            actions: self.actions,
            final_state: self.state,
            summary,
            loot_seed: self.loot_seed,
            loot_count: self.config.loot_count,
        }
    }
}
