//! Human-readable rendering of a finished run.
//!
//! The record carries the initial state, the action list, and the loot
//! seed; replaying through the engine reconstructs every intermediate
//! state deterministically.

use crate::driver::RunRecord;
use gauntlet_core::logic::{self, loot};
use gauntlet_core::{Action, RunState};
use rand::{rngs::StdRng, SeedableRng};
use std::fmt::Write;

/// One line per action, grouped per duel, ending with the run result.
pub fn format_trajectory(record: &RunRecord) -> Vec<String> {
    let mut lines = Vec::new();
    let mut state = record.initial_state.clone();
    let mut loot_rng = StdRng::seed_from_u64(record.loot_seed);

    lines.push(format!(
        "=== RUN START: {} enemies, player {}hp/{}armor ===",
        state.enemies.len(),
        state.player.health.current,
        state.player.armor.current
    ));
    lines.push(duel_header(&state));

    for (round, action) in record.actions.iter().enumerate() {
        let enemies_before = state.current_enemy_index;
        logic::apply_action(&mut state, *action);

        let mut line = String::new();
        write!(line, "  [{:>3}] {}", round + 1, describe_action(*action, &state)).unwrap();
        write!(
            line,
            " | player {}hp/{}armor",
            state.player.health.current, state.player.armor.current
        )
        .unwrap();
        if let Some(enemy) = state.current_enemy() {
            write!(
                line,
                " | enemy {}hp/{}armor",
                enemy.health.current, enemy.armor.current
            )
            .unwrap();
        }
        lines.push(line);

        if state.current_enemy_index > enemies_before {
            lines.push(format!(
                "  --- enemy #{} defeated ---",
                enemies_before + 1
            ));
            if !state.is_terminal() {
                // re-roll the same offers the driver presented
                state.loot_options = loot::random_loot_options(&mut loot_rng, record.loot_count);
                state.loot_phase = !state.loot_options.is_empty();
                lines.push(format!("  loot offered: {:?}", state.loot_options));
                lines.push(duel_header(&state));
            }
        }
    }

    let summary = &record.summary;
    lines.push(format!(
        "=== RUN OVER: defeated {}, survived={} ===",
        summary.enemies_defeated, summary.survived
    ));
    lines
}

fn duel_header(state: &RunState) -> String {
    match state.current_enemy() {
        Some(enemy) => format!(
            "--- enemy #{}: {}hp/{}armor ---",
            state.current_enemy_index + 1,
            enemy.health.current,
            enemy.armor.current
        ),
        None => "--- no enemies left ---".to_string(),
    }
}

fn describe_action(action: Action, _state: &RunState) -> String {
    match action {
        Action::Move(kind) => format!("play {:?}", kind),
        Action::PickLoot(index) => format!("take loot #{}", index + 1),
    }
}
