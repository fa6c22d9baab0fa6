//! Equipped-item view combat reads from the inventory system
//!
//! Combat owns no item storage; it reads the weapon category, the equipped
//! item set (for themed-set predicates), and the ammunition slot, and it may
//! consume ammunition as a ranged-attack side effect.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::combat::ranged::{RangedAmmo, WeaponCategory};

/// Unique identifier for item definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

/// Equipped ammunition with remaining count
#[derive(Debug, Clone, Serialize)]
pub struct AmmoSlot {
    pub ammo: RangedAmmo,
    pub count: u32,
}

/// Read-mostly view of a player's equipped items
#[derive(Debug, Clone, Serialize)]
pub struct Equipment {
    pub weapon: WeaponCategory,
    pub ammo: Option<AmmoSlot>,
    items: AHashSet<ItemId>,
}

impl Equipment {
    pub fn new(weapon: WeaponCategory) -> Self {
        Self {
            weapon,
            ammo: None,
            items: AHashSet::new(),
        }
    }

    pub fn with_ammo(mut self, ammo: RangedAmmo, count: u32) -> Self {
        self.ammo = Some(AmmoSlot { ammo, count });
        self
    }

    pub fn equip(&mut self, item: ItemId) {
        self.items.insert(item);
    }

    pub fn unequip(&mut self, item: ItemId) {
        self.items.remove(&item);
    }

    /// Are all of `items` currently equipped?
    pub fn contains_all(&self, items: &[ItemId]) -> bool {
        items.iter().all(|i| self.items.contains(i))
    }

    /// Remove one unit of ammunition; returns the ammo fired, if any was left
    pub fn consume_ammo(&mut self) -> Option<RangedAmmo> {
        let slot = self.ammo.as_mut()?;
        if slot.count == 0 {
            return None;
        }
        slot.count -= 1;
        let fired = slot.ammo.clone();
        if slot.count == 0 {
            self.ammo = None;
        }
        Some(fired)
    }
}

impl Default for Equipment {
    fn default() -> Self {
        Self::new(WeaponCategory::Unarmed)
    }
}
