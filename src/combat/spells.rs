//! Combat spells and weaken effects
//!
//! Spell metadata drives the magic formula branch: maximum hit, base
//! experience (awarded even on a splash), attack range, and hits per cast.
//! Rune accounting belongs to the equipment collaborator.

use serde::{Deserialize, Serialize};

/// Which stat a weaken effect drains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeakenedStat {
    Attack,
    Strength,
    Defence,
}

/// An active drain on an autonomous actor, reducing its template max hit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeakenEffect {
    pub stat: WeakenedStat,
    /// Fraction removed from the affected value
    pub rate: f64,
}

/// Metadata for one combat spell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombatSpell {
    pub name: &'static str,
    pub max_hit: u32,
    /// Experience granted on cast regardless of damage
    pub base_experience: f64,
    pub range: u32,
    pub hit_count: u32,
    /// Weaken applied to the victim on a successful cast, if any
    pub weaken: Option<WeakenEffect>,
}

pub const EMBER_BOLT: CombatSpell = CombatSpell {
    name: "Ember Bolt",
    max_hit: 8,
    base_experience: 22.5,
    range: 8,
    hit_count: 1,
    weaken: None,
};

pub const FROST_LANCE: CombatSpell = CombatSpell {
    name: "Frost Lance",
    max_hit: 10,
    base_experience: 34.0,
    range: 8,
    hit_count: 1,
    weaken: None,
};

pub const STONE_BARRAGE: CombatSpell = CombatSpell {
    name: "Stone Barrage",
    max_hit: 12,
    base_experience: 42.5,
    range: 8,
    hit_count: 1,
    weaken: None,
};

pub const SAP_MIGHT: CombatSpell = CombatSpell {
    name: "Sap Might",
    max_hit: 0,
    base_experience: 20.5,
    range: 8,
    hit_count: 1,
    weaken: Some(WeakenEffect {
        stat: WeakenedStat::Strength,
        rate: 0.05,
    }),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weaken_spell_has_zero_max_hit() {
        assert_eq!(SAP_MIGHT.max_hit, 0);
        assert!(SAP_MIGHT.weaken.is_some());
    }

    #[test]
    fn test_damage_spells_award_base_experience() {
        for spell in [EMBER_BOLT, FROST_LANCE, STONE_BARRAGE] {
            assert!(spell.base_experience > 0.0);
            assert!(spell.hit_count >= 1);
        }
    }
}
