//! Combat disciplines - the three formula branches

use serde::{Deserialize, Serialize};

use crate::combat::prayer::Prayer;
use crate::core::types::Tick;

/// Which set of formulas and modifier tables an attack uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatDiscipline {
    Melee,
    Ranged,
    Magic,
}

impl CombatDiscipline {
    /// Ticks between attacks of this discipline
    pub fn cooldown_ticks(&self) -> Tick {
        match self {
            CombatDiscipline::Melee => 1,
            CombatDiscipline::Ranged => 2,
            CombatDiscipline::Magic => 3,
        }
    }

    /// The protection prayer that guards against this discipline
    pub fn protecting_prayer(&self) -> Prayer {
        match self {
            CombatDiscipline::Melee => Prayer::AegisOfSteel,
            CombatDiscipline::Ranged => Prayer::AegisOfWinds,
            CombatDiscipline::Magic => Prayer::AegisOfRunes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cooldowns() {
        assert_eq!(CombatDiscipline::Melee.cooldown_ticks(), 1);
        assert_eq!(CombatDiscipline::Ranged.cooldown_ticks(), 2);
        assert_eq!(CombatDiscipline::Magic.cooldown_ticks(), 3);
    }

    #[test]
    fn test_each_discipline_has_distinct_protection() {
        let prayers = [
            CombatDiscipline::Melee.protecting_prayer(),
            CombatDiscipline::Ranged.protecting_prayer(),
            CombatDiscipline::Magic.protecting_prayer(),
        ];
        assert_ne!(prayers[0], prayers[1]);
        assert_ne!(prayers[1], prayers[2]);
        assert_ne!(prayers[0], prayers[2]);
    }
}
