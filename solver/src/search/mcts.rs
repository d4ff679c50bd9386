//! Monte Carlo Tree Search with UCB1 selection and random rollouts.
//!
//! Nodes live in a flat arena and refer to each other by index, so
//! backpropagation is a plain walk up the ancestor chain.

use crate::eval::{default_evaluate, EvalFn};
use crate::search::{step, Strategy};
use gauntlet_core::logic::{apply_action, available_actions};
use gauntlet_core::{Action, MoveKind, RunState};
use log::{debug, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[derive(Debug, Clone, Copy)]
pub struct MctsConfig {
    /// Select/expand/rollout/backpropagate iterations per decision.
    pub simulations: u32,
    /// Rollout length cap, in rounds.
    pub max_depth: u32,
    /// UCB1 exploration constant.
    pub exploration: f64,
    pub seed: u64,
    pub eval: EvalFn,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            simulations: 500,
            max_depth: 4,
            exploration: 1.414,
            seed: 12345,
            eval: default_evaluate,
        }
    }
}

struct Node {
    parent: Option<usize>,
    children: Vec<usize>,
    /// The action that led here from the parent; None only at the root.
    action: Option<Action>,
    state: RunState,
    visits: u32,
    total_value: f64,
}

impl Node {
    fn average(&self) -> f64 {
        self.total_value / self.visits as f64
    }
}

pub struct Mcts {
    config: MctsConfig,
    rng: StdRng,
}

impl Mcts {
    pub fn new(config: MctsConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(config.seed),
            config,
        }
    }

    /// Descend by UCB1 until a node with no children.
    fn select(&self, arena: &[Node]) -> usize {
        let mut current = 0;
        while !arena[current].children.is_empty() {
            let parent_visits = arena[current].visits;
            let mut best_child = arena[current].children[0];
            let mut best_ucb = f64::NEG_INFINITY;
            for &child in &arena[current].children {
                let ucb = ucb_value(&arena[child], parent_visits, self.config.exploration);
                if ucb > best_ucb {
                    best_ucb = ucb;
                    best_child = child;
                }
            }
            current = best_child;
        }
        current
    }

    /// Add one child per legal action; terminal leaves stay childless.
    fn expand(&self, arena: &mut Vec<Node>, leaf: usize) {
        if !arena[leaf].children.is_empty() || arena[leaf].state.is_terminal() {
            return;
        }
        for action in available_actions(&arena[leaf].state) {
            let child_state = step(&arena[leaf].state, action);
            let child = arena.len();
            arena.push(Node {
                parent: Some(leaf),
                children: Vec::new(),
                action: Some(action),
                state: child_state,
                visits: 0,
                total_value: 0.0,
            });
            arena[leaf].children.push(child);
        }
    }

    /// Play uniformly random legal actions for up to `max_depth` rounds or
    /// until the run ends, then score the reached state.
    fn rollout(&mut self, state: &RunState) -> f64 {
        let mut sim = state.clone();
        let mut depth = 0;
        while depth < self.config.max_depth && !sim.is_terminal() {
            let actions = available_actions(&sim);
            let action = actions[self.rng.gen_range(0..actions.len())];
            apply_action(&mut sim, action);
            depth += 1;
        }
        (self.config.eval)(&sim)
    }
}

fn ucb_value(child: &Node, parent_visits: u32, exploration: f64) -> f64 {
    if child.visits == 0 {
        return f64::INFINITY;
    }
    child.average()
        + exploration * ((parent_visits as f64).ln() / child.visits as f64).sqrt()
}

fn backpropagate(arena: &mut [Node], from: usize, value: f64) {
    let mut current = Some(from);
    while let Some(index) = current {
        arena[index].visits += 1;
        arena[index].total_value += value;
        current = arena[index].parent;
    }
}

impl Strategy for Mcts {
    fn pick_action(&mut self, state: &RunState) -> Action {
        let mut arena = vec![Node {
            parent: None,
            children: Vec::new(),
            action: None,
            state: state.clone(),
            visits: 0,
            total_value: 0.0,
        }];

        for _ in 0..self.config.simulations {
            let leaf = self.select(&arena);
            self.expand(&mut arena, leaf);

            let rollout_node = if arena[leaf].children.is_empty() {
                leaf
            } else {
                let children = &arena[leaf].children;
                children[self.rng.gen_range(0..children.len())]
            };

            let value = self.rollout(&arena[rollout_node].state);
            backpropagate(&mut arena, rollout_node, value);
        }

        let mut best: Option<(Action, f64)> = None;
        for &child in &arena[0].children {
            let node = &arena[child];
            if node.visits == 0 {
                continue;
            }
            let average = node.average();
            if best.map_or(true, |(_, best_avg)| average > best_avg) {
                // root children always carry the action that produced them
                best = node.action.map(|action| (action, average));
            }
        }

        match best {
            Some((action, average)) => {
                debug!("mcts: picked {:?} (avg {:.2})", action, average);
                action
            }
            None => {
                warn!("mcts: no visited child, falling back to Rock");
                Action::Move(MoveKind::Rock)
            }
        }
    }

    fn name(&self) -> &'static str {
        "mcts"
    }
}
