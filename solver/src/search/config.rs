//! Shared CLI knobs for the search strategies.

use crate::search::{
    AStar, AStarConfig, Dp, DpConfig, Greedy, GreedyConfig, Mcts, MctsConfig, Minimax,
    MinimaxConfig, Strategy,
};
use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Greedy,
    Minimax,
    Dp,
    Astar,
    Mcts,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::Greedy,
        StrategyKind::Minimax,
        StrategyKind::Dp,
        StrategyKind::Astar,
        StrategyKind::Mcts,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Greedy => "greedy",
            StrategyKind::Minimax => "minimax",
            StrategyKind::Dp => "dp",
            StrategyKind::Astar => "astar",
            StrategyKind::Mcts => "mcts",
        }
    }
}

#[derive(Parser, Debug, Clone, Copy)]
pub struct SearchArgs {
    /// Minimax lookahead depth
    #[arg(long, default_value_t = 4)]
    pub depth: u32,

    /// DP horizon (steps)
    #[arg(long, default_value_t = 5)]
    pub horizon: u32,

    /// A* expansion budget per root action
    #[arg(long, default_value_t = 200)]
    pub iterations: u32,

    /// MCTS simulations per decision
    #[arg(long, default_value_t = 500)]
    pub simulations: u32,

    /// MCTS rollout depth (rounds)
    #[arg(long, default_value_t = 4)]
    pub rollout_depth: u32,

    /// Seed for MCTS internal randomness
    #[arg(long, default_value_t = 12345)]
    pub search_seed: u64,
}

impl SearchArgs {
    pub fn build(&self, kind: StrategyKind) -> Box<dyn Strategy> {
        match kind {
            StrategyKind::Greedy => Box::new(Greedy::new(GreedyConfig::default())),
            StrategyKind::Minimax => Box::new(Minimax::new(MinimaxConfig {
                max_depth: self.depth,
                ..Default::default()
            })),
            StrategyKind::Dp => Box::new(Dp::new(DpConfig {
                max_horizon: self.horizon,
                ..Default::default()
            })),
            StrategyKind::Astar => Box::new(AStar::new(AStarConfig {
                max_iterations: self.iterations,
                ..Default::default()
            })),
            StrategyKind::Mcts => Box::new(Mcts::new(MctsConfig {
                simulations: self.simulations,
                max_depth: self.rollout_depth,
                seed: self.search_seed,
                ..Default::default()
            })),
        }
    }
}
