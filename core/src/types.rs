use serde::{Deserialize, Serialize};

/// Maximum charges a move can hold.
pub const CHARGE_CAP: i8 = 3;

/// Charge value marking a move as spam-locked for one round.
pub const SPAM_LOCK: i8 = -1;

/// The three moves of the combat triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    Rock,
    Paper,
    Scissor,
}

impl MoveKind {
    pub const ALL: [MoveKind; 3] = [MoveKind::Rock, MoveKind::Paper, MoveKind::Scissor];

    /// Standard precedence: Rock beats Scissor, Paper beats Rock, Scissor beats Paper.
    pub fn beats(self, other: MoveKind) -> bool {
        matches!(
            (self, other),
            (MoveKind::Rock, MoveKind::Scissor)
                | (MoveKind::Paper, MoveKind::Rock)
                | (MoveKind::Scissor, MoveKind::Paper)
        )
    }
}

/// Per-move stats. `charges` lives in [-1, 3]: 3 is full, 0 is empty and
/// -1 is the one-round spam lockout after a move was exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveStat {
    pub attack: i32,
    pub defense: i32,
    pub charges: i8,
}

impl MoveStat {
    pub fn new(attack: i32, defense: i32, charges: i8) -> Self {
        Self {
            attack,
            defense,
            charges,
        }
    }
}

/// A current/max pair used for both health and armor.
/// `current` is kept in [0, max] by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pool {
    pub current: i32,
    pub max: i32,
}

impl Pool {
    /// A pool that starts full.
    pub fn full(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Add `amount`, capped at `max`.
    pub fn gain(&mut self, amount: i32) {
        self.current = (self.current + amount).min(self.max);
    }

    pub fn ratio(&self) -> f64 {
        if self.max > 0 {
            self.current as f64 / self.max as f64
        } else {
            0.0
        }
    }
}

/// Either the player or an enemy. Both sides have the same shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fighter {
    pub rock: MoveStat,
    pub paper: MoveStat,
    pub scissor: MoveStat,
    pub health: Pool,
    pub armor: Pool,
}

impl Fighter {
    /// Build a fighter from the 8-slot stat array the upstream game service
    /// uses for enemies: rock atk/def, paper atk/def, scissor atk/def,
    /// max health, max armor. All moves start with full charges.
    pub fn from_move_stats(stats: [i32; 8]) -> Self {
        Self {
            rock: MoveStat::new(stats[0], stats[1], CHARGE_CAP),
            paper: MoveStat::new(stats[2], stats[3], CHARGE_CAP),
            scissor: MoveStat::new(stats[4], stats[5], CHARGE_CAP),
            health: Pool::full(stats[6]),
            armor: Pool::full(stats[7]),
        }
    }

    pub fn move_stat(&self, kind: MoveKind) -> &MoveStat {
        match kind {
            MoveKind::Rock => &self.rock,
            MoveKind::Paper => &self.paper,
            MoveKind::Scissor => &self.scissor,
        }
    }

    pub fn move_stat_mut(&mut self, kind: MoveKind) -> &mut MoveStat {
        match kind {
            MoveKind::Rock => &mut self.rock,
            MoveKind::Paper => &mut self.paper,
            MoveKind::Scissor => &mut self.scissor,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health.current <= 0
    }
}

/// The six upgrade families a loot option can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LootKind {
    Heal,
    AddMaxHealth,
    AddMaxArmor,
    UpgradeRock,
    UpgradePaper,
    UpgradeScissor,
}

impl LootKind {
    pub const ALL: [LootKind; 6] = [
        LootKind::Heal,
        LootKind::AddMaxHealth,
        LootKind::AddMaxArmor,
        LootKind::UpgradeRock,
        LootKind::UpgradePaper,
        LootKind::UpgradeScissor,
    ];
}

/// One offered upgrade. Upgrade kinds read `value1` as the attack delta and
/// `value2` as the defense delta; the other kinds only use `value1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LootOption {
    pub kind: LootKind,
    pub value1: i32,
    pub value2: i32,
}

impl LootOption {
    pub fn new(kind: LootKind, value1: i32, value2: i32) -> Self {
        Self {
            kind,
            value1,
            value2,
        }
    }
}

/// A single decision: play a move, or take one of the offered loot options.
/// Produced by a strategy, consumed exactly once by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Move(MoveKind),
    PickLoot(u8),
}

/// The full state of one run: the player, the ordered enemy roster, and
/// where in the run we are.
///
/// `rng_seed` drives the next random event (the enemy's move draw) and is
/// replaced with a fresh value after each draw, so cloning a state and
/// replaying the same actions reproduces it exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    pub player: Fighter,
    pub enemies: Vec<Fighter>,
    /// Index of the enemy currently being fought. Only ever increases;
    /// reaching `enemies.len()` means the run is won.
    pub current_enemy_index: usize,
    /// True while the only legal actions are loot picks.
    pub loot_phase: bool,
    /// The offered upgrades (0 to 4 entries), non-empty iff `loot_phase`.
    pub loot_options: Vec<LootOption>,
    /// Seed for the next deterministic random event.
    pub rng_seed: u64,
}

impl RunState {
    pub fn current_enemy(&self) -> Option<&Fighter> {
        self.enemies.get(self.current_enemy_index)
    }

    pub fn enemies_defeated(&self) -> usize {
        self.current_enemy_index
    }

    pub fn is_lost(&self) -> bool {
        self.player.is_dead()
    }

    pub fn is_won(&self) -> bool {
        self.current_enemy_index >= self.enemies.len()
    }

    /// A run ends on death regardless of how many enemies remain.
    pub fn is_terminal(&self) -> bool {
        self.is_lost() || self.is_won()
    }
}
