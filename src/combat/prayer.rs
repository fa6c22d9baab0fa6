//! Prayers - discrete buff tiers and protection aegides
//!
//! Offensive and defensive prayers come in three tiers (1.05 / 1.10 / 1.15
//! multipliers); the three aegis prayers give full protection against one
//! discipline each, handled by the modifier layer rather than the rolls.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Every prayer combat reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prayer {
    // Melee accuracy tiers
    FocusedStrike,
    HonedStrike,
    PerfectStrike,
    // Melee strength tiers
    RisingFury,
    SurgingFury,
    BoundlessFury,
    // Defence tiers
    BracedGuard,
    IronGuard,
    AdamantGuard,
    // Full protection, one per discipline
    AegisOfSteel,
    AegisOfWinds,
    AegisOfRunes,
}

/// Set of currently active prayers for a player
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrayerBook {
    active: AHashSet<Prayer>,
}

impl PrayerBook {
    pub fn activate(&mut self, prayer: Prayer) {
        self.active.insert(prayer);
    }

    pub fn deactivate(&mut self, prayer: Prayer) {
        self.active.remove(&prayer);
    }

    pub fn is_active(&self, prayer: Prayer) -> bool {
        self.active.contains(&prayer)
    }

    /// Melee accuracy multiplier from the highest active strike prayer
    pub fn accuracy_tier(&self) -> f64 {
        if self.is_active(Prayer::PerfectStrike) {
            1.15
        } else if self.is_active(Prayer::HonedStrike) {
            1.10
        } else if self.is_active(Prayer::FocusedStrike) {
            1.05
        } else {
            1.0
        }
    }

    /// Melee damage multiplier from the highest active fury prayer
    pub fn strength_tier(&self) -> f64 {
        if self.is_active(Prayer::BoundlessFury) {
            1.15
        } else if self.is_active(Prayer::SurgingFury) {
            1.10
        } else if self.is_active(Prayer::RisingFury) {
            1.05
        } else {
            1.0
        }
    }

    /// Defence multiplier from the highest active guard prayer
    pub fn defence_tier(&self) -> f64 {
        if self.is_active(Prayer::AdamantGuard) {
            1.15
        } else if self.is_active(Prayer::IronGuard) {
            1.10
        } else if self.is_active(Prayer::BracedGuard) {
            1.05
        } else {
            1.0
        }
    }
}
