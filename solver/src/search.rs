//! The five interchangeable decision strategies.

pub mod astar;
pub mod config;
pub mod dp;
pub mod greedy;
pub mod mcts;
pub mod minimax;

pub use astar::{AStar, AStarConfig};
pub use config::{SearchArgs, StrategyKind};
pub use dp::{Dp, DpConfig};
pub use greedy::{Greedy, GreedyConfig};
pub use mcts::{Mcts, MctsConfig};
pub use minimax::{Minimax, MinimaxConfig};

use gauntlet_core::logic::apply_action;
use gauntlet_core::{Action, RunState};

/// A decision policy over run states. `pick_action` blocks until its search
/// budget is spent and always returns a legal action; degenerate states
/// fall back to Rock rather than failing.
pub trait Strategy {
    fn pick_action(&mut self, state: &RunState) -> Action;

    /// Display label for reports.
    fn name(&self) -> &'static str;
}

/// Speculative step: clone the state and run the action through the engine.
/// All lookahead goes through here so only the driver ever mutates the
/// authoritative state in place.
pub(crate) fn step(state: &RunState, action: Action) -> RunState {
    let mut next = state.clone();
    apply_action(&mut next, action);
    next
}
