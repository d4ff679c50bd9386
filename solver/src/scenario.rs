//! Synthetic runs for offline play. Live runs come from the game service;
//! these rosters exist so the binaries and tests can fight something.

use gauntlet_core::logic;
use gauntlet_core::{Fighter, RunState};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// A self-contained offline run setup, serializable so interesting setups
/// can be saved and replayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub player: Fighter,
    pub enemies: Vec<Fighter>,
    pub seed: u64,
}

impl Scenario {
    pub fn into_run(self) -> RunState {
        logic::new_run(self.player, self.enemies, self.seed)
    }
}

/// The reference player build: a heavy rock, a defensive paper and a light
/// scissor, 18 health behind 8 armor.
pub fn standard_player() -> Fighter {
    Fighter::from_move_stats([15, 2, 1, 8, 3, 2, 18, 8])
}

/// Roll one enemy for roster slot `tier` (0-based). Later slots get more
/// health, armor and move power.
pub fn random_enemy(rng: &mut StdRng, tier: usize) -> Fighter {
    let tier = tier as i32;
    let roll = |rng: &mut StdRng, base: i32| -> i32 { rng.gen_range(0..=base + tier) };
    Fighter::from_move_stats([
        roll(rng, 4),
        roll(rng, 2),
        roll(rng, 4),
        roll(rng, 2),
        roll(rng, 4),
        roll(rng, 2),
        6 + 3 * tier + rng.gen_range(0..=2),
        1 + tier,
    ])
}

pub fn random_roster(rng: &mut StdRng, count: usize) -> Vec<Fighter> {
    (0..count).map(|tier| random_enemy(rng, tier)).collect()
}

/// A full scenario from one seed: standard player, scaled random roster.
pub fn generate(seed: u64, enemy_count: usize) -> Scenario {
    let mut rng = StdRng::seed_from_u64(seed);
    let enemies = random_roster(&mut rng, enemy_count);
    Scenario {
        player: standard_player(),
        enemies,
        // run seed derived from the roster rng so scenario and run are
        // reproducible from the single input seed
        seed: rng.gen(),
    }
}
