//! Legal-action enumeration.

use crate::types::*;

/// Moves with charges left, in fixed Rock/Paper/Scissor order.
pub fn available_moves(fighter: &Fighter) -> Vec<MoveKind> {
    MoveKind::ALL
        .into_iter()
        .filter(|kind| fighter.move_stat(*kind).charges > 0)
        .collect()
}

/// The legal actions for a state, never empty.
///
/// During a loot phase these are the loot picks in offer order. Otherwise
/// they are the player's charged moves; if every move is empty or
/// spam-locked the enumerator still returns Rock so a round can always be
/// played (the forced move may well lose, but the run keeps progressing).
pub fn available_actions(state: &RunState) -> Vec<Action> {
    if state.loot_phase && !state.loot_options.is_empty() {
        return (0..state.loot_options.len())
            .map(|index| Action::PickLoot(index as u8))
            .collect();
    }

    let moves = available_moves(&state.player);
    if moves.is_empty() {
        return vec![Action::Move(MoveKind::Rock)];
    }
    moves.into_iter().map(Action::Move).collect()
}
