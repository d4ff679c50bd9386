use gauntlet_core::logic::{self, available_actions};
use gauntlet_core::*;
use gauntlet_solver::eval::default_evaluate;
use gauntlet_solver::search::{AStar, AStarConfig, Strategy};

fn fresh_run() -> RunState {
    logic::new_run(
        Fighter::from_move_stats([15, 2, 1, 8, 3, 2, 18, 8]),
        vec![Fighter::from_move_stats([4, 0, 0, 4, 2, 2, 4, 2])],
        7,
    )
}

#[test]
fn returns_a_legal_action() {
    let mut astar = AStar::new(AStarConfig::default());
    let state = fresh_run();
    let action = astar.pick_action(&state);
    assert!(available_actions(&state).contains(&action));
}

#[test]
fn zero_iteration_budget_still_picks_a_legal_action() {
    // with no expansions each root action is judged by its own outcome only
    let mut astar = AStar::new(AStarConfig {
        max_iterations: 0,
        ..Default::default()
    });
    let state = fresh_run();
    let action = astar.pick_action(&state);
    assert!(available_actions(&state).contains(&action));
}

#[test]
fn single_legal_action_short_circuits() {
    let mut state = fresh_run();
    state.loot_options = vec![LootOption::new(LootKind::Heal, 6, 0)];
    state.loot_phase = true;

    let mut astar = AStar::new(AStarConfig::default());
    assert_eq!(astar.pick_action(&state), Action::PickLoot(0));
}

#[test]
fn all_moves_locked_short_circuits_to_rock() {
    let mut state = fresh_run();
    state.player.rock.charges = 0;
    state.player.paper.charges = 0;
    state.player.scissor.charges = -1;

    let mut astar = AStar::new(AStarConfig::default());
    assert_eq!(astar.pick_action(&state), Action::Move(MoveKind::Rock));
}

#[test]
fn is_deterministic_for_a_fixed_state() {
    let mut astar = AStar::new(AStarConfig::default());
    let state = fresh_run();
    assert_eq!(astar.pick_action(&state), astar.pick_action(&state));
}

#[test]
fn custom_heuristic_is_accepted() {
    let mut astar = AStar::new(AStarConfig {
        max_iterations: 50,
        heuristic: Some(default_evaluate),
        ..Default::default()
    });
    let state = fresh_run();
    let action = astar.pick_action(&state);
    assert!(available_actions(&state).contains(&action));
}
