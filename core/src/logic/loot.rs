//! Weighted-random loot generation for offline simulation.
//!
//! Live runs receive their loot offers from the game service; this module
//! exists so drivers and tests can roll plausible offers locally.

use crate::types::*;
use rand::{rngs::StdRng, Rng};

/// Rarity tiers 0..=4 (common through legendary).
const RARITY_WEIGHTS: [f64; 5] = [0.40, 0.30, 0.15, 0.10, 0.05];

const HEAL_VALUES: [i32; 5] = [6, 8, 12, 25, 36];
const MAX_HEALTH_VALUES: [i32; 5] = [2, 4, 6, 8, 12];
/// No common tier for armor caps; indexed by rarity - 1.
const MAX_ARMOR_VALUES: [i32; 4] = [1, 2, 4, 5];
const UPGRADE_VALUES: [i32; 5] = [1, 2, 3, 4, 5];

/// Roll one loot option: a uniform kind, a weighted rarity, and the value
/// table entry for that tier. Upgrades land on attack or defense 50/50.
pub fn random_loot_option(rng: &mut StdRng) -> LootOption {
    loop {
        let kind = LootKind::ALL[rng.gen_range(0..LootKind::ALL.len())];
        let rarity = pick_rarity(rng);

        match kind {
            LootKind::Heal => return LootOption::new(kind, HEAL_VALUES[rarity], 0),
            LootKind::AddMaxHealth => return LootOption::new(kind, MAX_HEALTH_VALUES[rarity], 0),
            LootKind::AddMaxArmor => {
                if rarity == 0 {
                    // armor caps have no common tier; reroll the option
                    continue;
                }
                return LootOption::new(kind, MAX_ARMOR_VALUES[rarity - 1], 0);
            }
            LootKind::UpgradeRock | LootKind::UpgradePaper | LootKind::UpgradeScissor => {
                let value = UPGRADE_VALUES[rarity];
                return if rng.gen_bool(0.5) {
                    LootOption::new(kind, value, 0)
                } else {
                    LootOption::new(kind, 0, value)
                };
            }
        }
    }
}

pub fn random_loot_options(rng: &mut StdRng, count: usize) -> Vec<LootOption> {
    (0..count).map(|_| random_loot_option(rng)).collect()
}

fn pick_rarity(rng: &mut StdRng) -> usize {
    let roll: f64 = rng.gen();
    let mut cumulative = 0.0;
    for (tier, weight) in RARITY_WEIGHTS.iter().enumerate() {
        cumulative += weight;
        if roll < cumulative {
            return tier;
        }
    }
    RARITY_WEIGHTS.len() - 1
}
