//! Fight styles and fight types
//!
//! A fight type is the weapon-interface selection a player makes: it fixes
//! which offensive bonus slot the attack rolls against, which style bonus
//! applies, and which skills train from the damage dealt.

use serde::{Deserialize, Serialize};

use crate::actor::skills::Skill;
use crate::combat::bonuses::{self, BonusProfile};

/// Sub-selection within a discipline affecting style bonuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FightStyle {
    Accurate,
    Aggressive,
    Defensive,
    Controlled,
}

impl FightStyle {
    /// Additive bonus to the attack roll
    pub fn accuracy_bonus(&self) -> i32 {
        match self {
            FightStyle::Accurate => 3,
            FightStyle::Controlled => 1,
            _ => 0,
        }
    }

    /// Additive bonus to the effective damage stat
    pub fn damage_bonus(&self) -> i32 {
        match self {
            FightStyle::Aggressive => 3,
            FightStyle::Controlled => 1,
            _ => 0,
        }
    }

    /// Additive bonus to the defence roll
    pub fn defence_bonus(&self) -> i32 {
        match self {
            FightStyle::Defensive => 3,
            FightStyle::Controlled => 1,
            _ => 0,
        }
    }

    /// Melee skills trained by this style
    fn melee_trained(&self) -> &'static [Skill] {
        match self {
            FightStyle::Accurate => &[Skill::Attack],
            FightStyle::Aggressive => &[Skill::Strength],
            FightStyle::Defensive => &[Skill::Defence],
            FightStyle::Controlled => &[Skill::Attack, Skill::Strength, Skill::Defence],
        }
    }
}

/// A player's selected fight type
#[derive(Debug, Clone, Serialize)]
pub struct FightType {
    pub style: FightStyle,
    /// Offensive bonus slot the attack roll reads
    pub attack_slot: usize,
    /// Defensive bonus slot contested on the victim
    pub defence_slot: usize,
    /// Skills credited with experience from damage dealt
    pub trained_skills: &'static [Skill],
}

impl FightType {
    /// Melee fight type over the given offensive slot (stab/slash/crush)
    pub fn melee(style: FightStyle, attack_slot: usize) -> Self {
        debug_assert!(attack_slot <= bonuses::ATTACK_CRUSH);
        Self {
            style,
            attack_slot,
            defence_slot: BonusProfile::defensive_counterpart(attack_slot),
            trained_skills: style.melee_trained(),
        }
    }

    pub fn ranged(style: FightStyle) -> Self {
        Self {
            style,
            attack_slot: bonuses::ATTACK_RANGED,
            defence_slot: bonuses::DEFENCE_RANGED,
            trained_skills: &[Skill::Ranged],
        }
    }

    /// Magic trains no style skills; the experience distributor handles the
    /// magic skill directly
    pub fn magic() -> Self {
        Self {
            style: FightStyle::Accurate,
            attack_slot: bonuses::ATTACK_MAGIC,
            defence_slot: bonuses::DEFENCE_MAGIC,
            trained_skills: &[],
        }
    }
}

impl Default for FightType {
    fn default() -> Self {
        Self::melee(FightStyle::Accurate, bonuses::ATTACK_CRUSH)
    }
}
