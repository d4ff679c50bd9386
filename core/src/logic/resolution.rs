//! The combat transition engine: everything that mutates a `RunState`
//! according to the rules lives here.

use crate::logic::actions::available_moves;
use crate::types::*;
use log::{debug, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};

struct RoundOutcome {
    damage_to_enemy: i32,
    damage_to_player: i32,
    armor_gain_player: i32,
    armor_gain_enemy: i32,
}

/// Resolve one round against the current enemy, drawing the enemy's move
/// uniformly among its charged moves from the state's seed. No-op when the
/// run is already over.
pub fn simulate_one_round(state: &mut RunState, player_move: MoveKind) {
    if state.current_enemy_index >= state.enemies.len() {
        warn!("simulate_one_round: no active enemy, run is already over");
        return;
    }
    let mut rng = StdRng::seed_from_u64(state.rng_seed);
    let enemy_move = sample_enemy_move(&state.enemies[state.current_enemy_index], &mut rng);
    state.rng_seed = rng.gen();
    simulate_one_round_with(state, player_move, enemy_move);
}

/// Resolve one round with an explicit enemy move. Used by deterministic
/// tests and scripted scenarios; `simulate_one_round` delegates here.
pub fn simulate_one_round_with(state: &mut RunState, player_move: MoveKind, enemy_move: MoveKind) {
    let index = state.current_enemy_index;
    let Some(enemy) = state.enemies.get_mut(index) else {
        warn!("simulate_one_round: no active enemy, run is already over");
        return;
    };
    let player = &mut state.player;

    debug!(
        "round: player={:?} enemy={:?} (enemy #{})",
        player_move, enemy_move, index
    );

    let outcome = round_outcome(player_move, enemy_move, player, enemy);

    // The player's side resolves first: armor gained this round absorbs
    // the enemy's damage in the same round.
    apply_damage_and_armor(outcome.damage_to_enemy, outcome.armor_gain_player, player, enemy);
    apply_damage_and_armor(outcome.damage_to_player, outcome.armor_gain_enemy, enemy, player);

    update_charges(player, player_move);
    update_charges(enemy, enemy_move);
}

/// Damage dealt and armor gained by each side. On a tie both sides count
/// as winners; otherwise only the winner deals its attack and banks its
/// defense as armor.
fn round_outcome(
    player_move: MoveKind,
    enemy_move: MoveKind,
    player: &Fighter,
    enemy: &Fighter,
) -> RoundOutcome {
    let player_stat = player.move_stat(player_move);
    let enemy_stat = enemy.move_stat(enemy_move);

    if player_move == enemy_move {
        RoundOutcome {
            damage_to_enemy: player_stat.attack,
            damage_to_player: enemy_stat.attack,
            armor_gain_player: player_stat.defense,
            armor_gain_enemy: enemy_stat.defense,
        }
    } else if player_move.beats(enemy_move) {
        RoundOutcome {
            damage_to_enemy: player_stat.attack,
            damage_to_player: 0,
            armor_gain_player: player_stat.defense,
            armor_gain_enemy: 0,
        }
    } else {
        RoundOutcome {
            damage_to_enemy: 0,
            damage_to_player: enemy_stat.attack,
            armor_gain_player: 0,
            armor_gain_enemy: enemy_stat.defense,
        }
    }
}

/// Attacker banks its armor gain first, then the defender soaks the damage
/// with armor before any overflow hits health (floored at 0).
fn apply_damage_and_armor(
    incoming: i32,
    armor_gain: i32,
    attacker: &mut Fighter,
    defender: &mut Fighter,
) {
    attacker.armor.gain(armor_gain);

    let mut left = incoming;
    if defender.armor.current > 0 && left > 0 {
        let absorbed = left.min(defender.armor.current);
        defender.armor.current -= absorbed;
        left -= absorbed;
    }
    if left > 0 {
        defender.health.current = (defender.health.current - left).max(0);
    }
}

/// Charge bookkeeping, once per fighter per round: the used move is
/// decremented (and spam-locked when it was at its last charge); every
/// other move recovers from lockout to 0, or gains a charge up to the cap.
/// A move forced while at 0 or below is left unchanged.
pub fn update_charges(fighter: &mut Fighter, used: MoveKind) {
    let stat = fighter.move_stat_mut(used);
    if stat.charges > 1 {
        stat.charges -= 1;
    } else if stat.charges == 1 {
        stat.charges = SPAM_LOCK;
        debug!("update_charges: {:?} exhausted, spam-locked for a round", used);
    }

    for kind in MoveKind::ALL {
        if kind == used {
            continue;
        }
        let stat = fighter.move_stat_mut(kind);
        if stat.charges == SPAM_LOCK {
            stat.charges = 0;
        } else if (0..CHARGE_CAP).contains(&stat.charges) {
            stat.charges += 1;
        }
    }
}

fn sample_enemy_move(enemy: &Fighter, rng: &mut StdRng) -> MoveKind {
    let candidates = available_moves(enemy);
    if candidates.is_empty() {
        // every move spam-locked or empty at once
        return MoveKind::Rock;
    }
    candidates[rng.gen_range(0..candidates.len())]
}

/// Apply a chosen loot option to the player. Upgrades are unbounded;
/// healing and max-pool gains respect the pool caps.
pub fn apply_loot(state: &mut RunState, loot: &LootOption) {
    let player = &mut state.player;
    match loot.kind {
        LootKind::Heal => {
            player.health.gain(loot.value1);
        }
        LootKind::AddMaxHealth => {
            player.health.max += loot.value1;
            player.health.gain(loot.value1);
        }
        LootKind::AddMaxArmor => {
            // only the cap grows; current armor is unchanged
            player.armor.max += loot.value1;
        }
        LootKind::UpgradeRock => {
            player.rock.attack += loot.value1;
            player.rock.defense += loot.value2;
        }
        LootKind::UpgradePaper => {
            player.paper.attack += loot.value1;
            player.paper.defense += loot.value2;
        }
        LootKind::UpgradeScissor => {
            player.scissor.attack += loot.value1;
            player.scissor.defense += loot.value2;
        }
    }
    debug!(
        "apply_loot: {:?} (+{}, +{})",
        loot.kind, loot.value1, loot.value2
    );
}

/// Dispatch a generic action. Any loot pick ends the loot phase, even an
/// out-of-range index (logged, otherwise a no-op). A defeated enemy
/// advances `current_enemy_index` as a postcondition.
pub fn apply_action(state: &mut RunState, action: Action) {
    match action {
        Action::Move(kind) => simulate_one_round(state, kind),
        Action::PickLoot(index) => {
            match state.loot_options.get(index as usize) {
                Some(loot) => {
                    let loot = *loot;
                    apply_loot(state, &loot);
                }
                None => warn!(
                    "apply_action: loot index {} out of range ({} options)",
                    index,
                    state.loot_options.len()
                ),
            }
            state.loot_options.clear();
            state.loot_phase = false;
        }
    }
    advance_defeated_enemy(state);
}

/// Move on to the next enemy once the active one is dead.
pub fn advance_defeated_enemy(state: &mut RunState) {
    if let Some(enemy) = state.current_enemy() {
        if enemy.is_dead() {
            state.current_enemy_index += 1;
        }
    }
}
