use gauntlet_core::logic::{self, available_actions};
use gauntlet_core::*;
use gauntlet_solver::search::{Minimax, MinimaxConfig, Strategy};

fn fresh_run() -> RunState {
    logic::new_run(
        Fighter::from_move_stats([15, 2, 1, 8, 3, 2, 18, 8]),
        vec![Fighter::from_move_stats([4, 0, 0, 4, 2, 2, 4, 2])],
        7,
    )
}

#[test]
fn returns_a_legal_action() {
    let mut minimax = Minimax::new(MinimaxConfig::default());
    let state = fresh_run();
    let action = minimax.pick_action(&state);
    assert!(available_actions(&state).contains(&action));
}

#[test]
fn is_deterministic_for_a_fixed_state() {
    // lookahead only touches clones, and clones replay their seeds
    let mut minimax = Minimax::new(MinimaxConfig::default());
    let state = fresh_run();
    let first = minimax.pick_action(&state);
    let second = minimax.pick_action(&state);
    assert_eq!(first, second);
}

#[test]
fn search_leaves_the_input_state_untouched() {
    let mut minimax = Minimax::new(MinimaxConfig { max_depth: 6, ..Default::default() });
    let state = fresh_run();
    let before = state.clone();
    minimax.pick_action(&state);
    assert_eq!(state, before);
}

#[test]
fn shallow_depth_still_works() {
    let mut minimax = Minimax::new(MinimaxConfig { max_depth: 1, ..Default::default() });
    let state = fresh_run();
    let action = minimax.pick_action(&state);
    assert!(available_actions(&state).contains(&action));
}

#[test]
fn picks_loot_during_loot_phase() {
    let mut state = fresh_run();
    state.loot_options = vec![
        LootOption::new(LootKind::UpgradeRock, 3, 0),
        LootOption::new(LootKind::Heal, 6, 0),
    ];
    state.loot_phase = true;

    let mut minimax = Minimax::new(MinimaxConfig::default());
    let action = minimax.pick_action(&state);
    assert!(matches!(action, Action::PickLoot(_)));
}
