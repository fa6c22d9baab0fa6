//! Equipment bonus profile - 12 named integer bonuses per actor
//!
//! Five offensive by damage type, five defensive by damage type, plus
//! strength and prayer. Owned by the actor, read-only to combat.

use serde::{Deserialize, Serialize};

pub const ATTACK_STAB: usize = 0;
pub const ATTACK_SLASH: usize = 1;
pub const ATTACK_CRUSH: usize = 2;
pub const ATTACK_MAGIC: usize = 3;
pub const ATTACK_RANGED: usize = 4;
pub const DEFENCE_STAB: usize = 5;
pub const DEFENCE_SLASH: usize = 6;
pub const DEFENCE_CRUSH: usize = 7;
pub const DEFENCE_MAGIC: usize = 8;
pub const DEFENCE_RANGED: usize = 9;
pub const BONUS_STRENGTH: usize = 10;
pub const BONUS_PRAYER: usize = 11;

pub const BONUS_COUNT: usize = 12;

/// Display names in their exact identified slots
pub const BONUS_NAMES: [&str; BONUS_COUNT] = [
    "Stab", "Slash", "Crush", "Magic", "Range", "Stab", "Slash", "Crush", "Magic", "Range",
    "Strength", "Prayer",
];

/// Ordered set of equipment bonuses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusProfile([i32; BONUS_COUNT]);

impl BonusProfile {
    pub fn get(&self, slot: usize) -> i32 {
        self.0[slot]
    }

    pub fn set(&mut self, slot: usize, value: i32) {
        self.0[slot] = value;
    }

    /// Builder-style setter for tests and spawn tables
    pub fn with(mut self, slot: usize, value: i32) -> Self {
        self.0[slot] = value;
        self
    }

    pub fn strength(&self) -> i32 {
        self.0[BONUS_STRENGTH]
    }

    /// Offensive defensive slots pair up: offensive slot `i` is contested by
    /// defensive slot `i + 5`
    pub fn defensive_counterpart(offensive_slot: usize) -> usize {
        debug_assert!(offensive_slot < DEFENCE_STAB, "not an offensive slot");
        offensive_slot + 5
    }
}
