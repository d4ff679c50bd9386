//! Full-run behavior across every strategy, plus record/replay plumbing.

use gauntlet_core::logic;
use gauntlet_core::*;
use gauntlet_solver::driver::{DriverConfig, RunDriver};
use gauntlet_solver::replay;
use gauntlet_solver::scenario;
use gauntlet_solver::search::{Mcts, MctsConfig, SearchArgs, Strategy, StrategyKind};
use clap::Parser;

fn standard_player() -> Fighter {
    Fighter::from_move_stats([15, 2, 1, 8, 3, 2, 18, 8])
}

fn weak_enemy() -> Fighter {
    Fighter::from_move_stats([4, 0, 0, 4, 2, 2, 4, 2])
}

fn search_defaults() -> SearchArgs {
    SearchArgs::parse_from(["test"])
}

#[test]
fn every_strategy_beats_the_single_weak_enemy() {
    // the reference duel: this enemy is frail enough that any
    // non-degenerate policy must win it
    let args = search_defaults();
    for kind in StrategyKind::ALL {
        let state = logic::new_run(standard_player(), vec![weak_enemy()], 7);
        let mut driver = RunDriver::new(state, DriverConfig::default(), 7).unwrap();
        let mut strategy = args.build(kind);
        let summary = driver.play(strategy.as_mut());

        assert_eq!(
            summary.enemies_defeated, 1,
            "{} failed to defeat the enemy",
            kind.name()
        );
        assert!(summary.survived, "{} died to a frail enemy", kind.name());
    }
}

#[test]
fn loot_phase_is_offered_between_fights() {
    let state = logic::new_run(standard_player(), vec![weak_enemy(), weak_enemy()], 11);
    let mut driver = RunDriver::new(state, DriverConfig::default(), 11).unwrap();
    let mut strategy = Mcts::new(MctsConfig {
        simulations: 100,
        ..Default::default()
    });
    let summary = driver.play(&mut strategy);

    assert_eq!(summary.enemies_defeated, 2);
    assert!(summary.survived);

    let record = driver.into_record();
    assert!(
        record
            .actions
            .iter()
            .any(|action| matches!(action, Action::PickLoot(_))),
        "a loot pick must happen between the two fights"
    );
}

#[test]
fn stalemates_hit_the_action_cap() {
    // neither side can deal damage: the driver must bail out on its own
    let pacifist = Fighter::from_move_stats([0, 0, 0, 0, 0, 0, 10, 0]);
    let state = logic::new_run(pacifist, vec![pacifist], 3);
    let config = DriverConfig {
        max_actions: 50,
        ..Default::default()
    };
    let mut driver = RunDriver::new(state, config, 3).unwrap();
    let mut strategy = Mcts::new(MctsConfig {
        simulations: 20,
        ..Default::default()
    });
    let summary = driver.play(&mut strategy);

    assert_eq!(summary.actions_taken, 50);
    assert_eq!(summary.enemies_defeated, 0);
    assert!(summary.survived);
}

#[test]
fn driver_rejects_invalid_states() {
    let mut state = logic::new_run(standard_player(), vec![weak_enemy()], 3);
    state.loot_phase = true; // flag without options
    assert!(RunDriver::new(state, DriverConfig::default(), 3).is_err());
}

#[test]
fn record_replays_and_serializes() {
    let scenario = scenario::generate(42, 3);
    let mut driver = RunDriver::new(scenario.into_run(), DriverConfig::default(), 42).unwrap();
    let mut strategy = Mcts::new(MctsConfig {
        simulations: 100,
        ..Default::default()
    });
    driver.play(&mut strategy);
    let record = driver.into_record();

    let lines = replay::format_trajectory(&record);
    assert!(lines.first().unwrap().contains("RUN START"));
    assert!(lines.last().unwrap().contains("RUN OVER"));
    assert!(
        lines.len() as u32 >= record.summary.actions_taken,
        "at least one line per action"
    );

    let json = serde_json::to_string(&record).unwrap();
    let back: gauntlet_solver::driver::RunRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back.final_state, record.final_state);
    assert_eq!(back.summary.enemies_defeated, record.summary.enemies_defeated);
}
