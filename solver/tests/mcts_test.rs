use gauntlet_core::logic::{self, available_actions};
use gauntlet_core::*;
use gauntlet_solver::search::{Mcts, MctsConfig, Strategy};

fn fresh_run() -> RunState {
    logic::new_run(
        Fighter::from_move_stats([15, 2, 1, 8, 3, 2, 18, 8]),
        vec![Fighter::from_move_stats([4, 0, 0, 4, 2, 2, 4, 2])],
        7,
    )
}

fn quick_config() -> MctsConfig {
    MctsConfig {
        simulations: 200,
        ..Default::default()
    }
}

#[test]
fn returns_a_legal_action() {
    let mut mcts = Mcts::new(quick_config());
    let state = fresh_run();
    let action = mcts.pick_action(&state);
    assert!(available_actions(&state).contains(&action));
}

#[test]
fn same_seed_reproduces_the_choice() {
    let state = fresh_run();
    let first = Mcts::new(quick_config()).pick_action(&state);
    let second = Mcts::new(quick_config()).pick_action(&state);
    assert_eq!(first, second);
}

#[test]
fn single_loot_option_is_taken() {
    let mut state = fresh_run();
    state.loot_options = vec![LootOption::new(LootKind::UpgradeRock, 2, 0)];
    state.loot_phase = true;

    let mut mcts = Mcts::new(quick_config());
    assert_eq!(mcts.pick_action(&state), Action::PickLoot(0));
}

#[test]
fn terminal_root_falls_back_to_rock() {
    // a dead root never expands, so no child is ever visited
    let mut state = fresh_run();
    state.player.health.current = 0;

    let mut mcts = Mcts::new(quick_config());
    assert_eq!(mcts.pick_action(&state), Action::Move(MoveKind::Rock));
}

#[test]
fn search_leaves_the_input_state_untouched() {
    let mut mcts = Mcts::new(quick_config());
    let state = fresh_run();
    let before = state.clone();
    mcts.pick_action(&state);
    assert_eq!(state, before);
}
