//! Best-first lookahead. Evaluation scores are rewards, so the search
//! minimizes their negation: with no heuristic supplied this is plain
//! uniform-cost expansion over the action tree.

use crate::eval::{default_evaluate, EvalFn};
use crate::search::{step, Strategy};
use gauntlet_core::logic::available_actions;
use gauntlet_core::{Action, LootKind, RunState};
use log::debug;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

#[derive(Debug, Clone, Copy)]
pub struct AStarConfig {
    /// Total node expansions allowed per root action. Zero is legal: the
    /// search then scores only the state reached by the root action itself.
    pub max_iterations: u32,
    pub eval: EvalFn,
    /// Optional admissible-ish estimate of remaining reward; defaults to 0
    /// (Dijkstra behavior).
    pub heuristic: Option<EvalFn>,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            eval: default_evaluate,
            heuristic: None,
        }
    }
}

/// Dedup key for the closed set: where we are in the run and the player
/// fields the evaluation feeds on, plus the shape of any pending offer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct VisitKey {
    enemy_index: usize,
    health: i32,
    armor: i32,
    charges: [i8; 3],
    loot_phase: bool,
    loot_kinds: Vec<LootKind>,
}

impl VisitKey {
    fn new(state: &RunState) -> Self {
        Self {
            enemy_index: state.current_enemy_index,
            health: state.player.health.current,
            armor: state.player.armor.current,
            charges: [
                state.player.rock.charges,
                state.player.paper.charges,
                state.player.scissor.charges,
            ],
            loot_phase: state.loot_phase,
            loot_kinds: state.loot_options.iter().map(|loot| loot.kind).collect(),
        }
    }
}

/// Frontier entry ordered by lowest f-cost first.
struct OpenNode {
    f: f64,
    g: f64,
    state: RunState,
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.f.total_cmp(&other.f) == Ordering::Equal
    }
}
impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: BinaryHeap is a max-heap, we pop the smallest f
        other.f.total_cmp(&self.f)
    }
}

pub struct AStar {
    config: AStarConfig,
}

impl AStar {
    pub fn new(config: AStarConfig) -> Self {
        Self { config }
    }

    fn heuristic(&self, state: &RunState) -> f64 {
        self.config.heuristic.map_or(0.0, |h| h(state))
    }

    /// Bounded best-first expansion from `start`; returns the highest
    /// evaluation observed among the start and every generated state, even
    /// when the budget runs out before any terminal is reached.
    fn search_from(&self, start: RunState) -> f64 {
        let start_score = (self.config.eval)(&start);
        let mut best = start_score;

        let mut open = BinaryHeap::new();
        let mut closed: HashSet<VisitKey> = HashSet::new();
        let g = -start_score;
        open.push(OpenNode {
            f: g - self.heuristic(&start),
            g,
            state: start,
        });

        let mut iterations = 0;
        loop {
            if iterations >= self.config.max_iterations {
                break;
            }
            let Some(node) = open.pop() else {
                break;
            };
            iterations += 1;

            if node.state.is_terminal() {
                best = best.max((self.config.eval)(&node.state));
                continue;
            }
            closed.insert(VisitKey::new(&node.state));

            for action in available_actions(&node.state) {
                let next = step(&node.state, action);
                if closed.contains(&VisitKey::new(&next)) {
                    continue;
                }
                let score = (self.config.eval)(&next);
                if score > best {
                    best = score;
                }
                let g = node.g - score;
                open.push(OpenNode {
                    f: g - self.heuristic(&next),
                    g,
                    state: next,
                });
            }
        }

        best
    }
}

impl Strategy for AStar {
    fn pick_action(&mut self, state: &RunState) -> Action {
        let actions = available_actions(state);
        if actions.len() == 1 {
            debug!("astar: single legal action, skipping search");
            return actions[0];
        }

        let mut best_action = actions[0];
        let mut best_score = f64::NEG_INFINITY;
        for action in actions {
            let next = step(state, action);
            let score = self.search_from(next);
            if score > best_score {
                best_score = score;
                best_action = action;
            }
        }

        debug!("astar: picked {:?} (score {:.2})", best_action, best_score);
        best_action
    }

    fn name(&self) -> &'static str {
        "astar"
    }
}
