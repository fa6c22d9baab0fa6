//! Ranged weaponry - weapon categories, ammunition, and attack ranges
//!
//! The weapon-category table is closed configuration data: asking for a
//! ranged distance on an unmapped category is a data-table gap and fails
//! loudly rather than defaulting.

use serde::{Deserialize, Serialize};

use crate::core::error::{CombatError, Result};

/// Weapon interface categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponCategory {
    // Thrown
    Dart,
    ThrowingAxe,
    Knife,
    Javelin,
    // Launchers
    Shortbow,
    Longbow,
    Crossbow,
    /// Living-wood bow that grows its own projectiles
    Thornbow,
    // Melee
    Sword,
    Axe,
    Mace,
    Spear,
    // Other
    Staff,
    Unarmed,
}

impl WeaponCategory {
    /// Thrown weapons are their own ammunition
    pub fn is_thrown(&self) -> bool {
        matches!(
            self,
            WeaponCategory::Dart
                | WeaponCategory::ThrowingAxe
                | WeaponCategory::Knife
                | WeaponCategory::Javelin
        )
    }

    pub fn is_ranged(&self) -> bool {
        self.is_thrown()
            || matches!(
                self,
                WeaponCategory::Shortbow
                    | WeaponCategory::Longbow
                    | WeaponCategory::Crossbow
                    | WeaponCategory::Thornbow
            )
    }

    /// Self-supplying weapons fire without an ammunition slot
    pub fn is_self_supplying(&self) -> bool {
        matches!(self, WeaponCategory::Thornbow)
    }
}

/// Attack range in tiles for a ranged weapon category
pub fn ranged_distance(weapon: WeaponCategory) -> Result<u32> {
    match weapon {
        WeaponCategory::Dart | WeaponCategory::ThrowingAxe => Ok(4),
        WeaponCategory::Knife | WeaponCategory::Javelin => Ok(5),
        WeaponCategory::Shortbow => Ok(7),
        WeaponCategory::Crossbow | WeaponCategory::Longbow | WeaponCategory::Thornbow => Ok(8),
        other => Err(CombatError::UnmappedWeaponCategory(other)),
    }
}

/// Projectile a self-supplying weapon conjures for itself
pub fn conjured_ammo(weapon: WeaponCategory) -> Option<RangedAmmo> {
    match weapon {
        WeaponCategory::Thornbow => Some(THORN_SLIVER),
        _ => None,
    }
}

/// Broad ammunition classes, matched against the launcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmmoKind {
    Arrow,
    Bolt,
    Thrown,
}

/// Whether `kind` can be fired from `weapon`
pub fn compatible(weapon: WeaponCategory, kind: AmmoKind) -> bool {
    match weapon {
        WeaponCategory::Shortbow | WeaponCategory::Longbow => kind == AmmoKind::Arrow,
        WeaponCategory::Crossbow => kind == AmmoKind::Bolt,
        w if w.is_thrown() => kind == AmmoKind::Thrown,
        _ => false,
    }
}

/// One ammunition definition with its ranged-strength value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangedAmmo {
    pub name: &'static str,
    pub kind: AmmoKind,
    pub strength: i32,
}

pub const CRUDE_ARROW: RangedAmmo = RangedAmmo {
    name: "Crude Arrow",
    kind: AmmoKind::Arrow,
    strength: 7,
};

pub const TEMPERED_ARROW: RangedAmmo = RangedAmmo {
    name: "Tempered Arrow",
    kind: AmmoKind::Arrow,
    strength: 12,
};

pub const HEAVY_BOLT: RangedAmmo = RangedAmmo {
    name: "Heavy Bolt",
    kind: AmmoKind::Bolt,
    strength: 18,
};

pub const BALANCED_KNIFE: RangedAmmo = RangedAmmo {
    name: "Balanced Knife",
    kind: AmmoKind::Thrown,
    strength: 8,
};

pub const THORN_SLIVER: RangedAmmo = RangedAmmo {
    name: "Thorn Sliver",
    kind: AmmoKind::Arrow,
    strength: 15,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_table() {
        assert_eq!(ranged_distance(WeaponCategory::Dart).unwrap(), 4);
        assert_eq!(ranged_distance(WeaponCategory::Javelin).unwrap(), 5);
        assert_eq!(ranged_distance(WeaponCategory::Shortbow).unwrap(), 7);
        assert_eq!(ranged_distance(WeaponCategory::Longbow).unwrap(), 8);
        assert_eq!(ranged_distance(WeaponCategory::Crossbow).unwrap(), 8);
    }

    #[test]
    fn test_melee_category_is_a_configuration_error() {
        assert!(matches!(
            ranged_distance(WeaponCategory::Sword),
            Err(CombatError::UnmappedWeaponCategory(WeaponCategory::Sword))
        ));
    }

    #[test]
    fn test_self_supplying_weapon_conjures_its_own_ammo() {
        assert!(WeaponCategory::Thornbow.is_self_supplying());
        assert!(WeaponCategory::Thornbow.is_ranged());
        assert_eq!(conjured_ammo(WeaponCategory::Thornbow), Some(THORN_SLIVER));
        assert_eq!(conjured_ammo(WeaponCategory::Shortbow), None);
        assert_eq!(conjured_ammo(WeaponCategory::Knife), None);
        assert_eq!(ranged_distance(WeaponCategory::Thornbow).unwrap(), 8);
    }

    #[test]
    fn test_ammo_compatibility() {
        assert!(compatible(WeaponCategory::Shortbow, AmmoKind::Arrow));
        assert!(!compatible(WeaponCategory::Shortbow, AmmoKind::Bolt));
        assert!(compatible(WeaponCategory::Crossbow, AmmoKind::Bolt));
        assert!(compatible(WeaponCategory::Knife, AmmoKind::Thrown));
        assert!(!compatible(WeaponCategory::Sword, AmmoKind::Arrow));
    }
}
