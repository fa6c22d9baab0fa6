//! Special attack state
//!
//! Weapons grant a toggleable special attack that scales accuracy and damage
//! for the next hit batch. Energy accounting lives with the weapon system;
//! combat only reads the active multipliers.

use serde::{Deserialize, Serialize};

/// Multipliers applied while a special attack is toggled on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpecialAttack {
    /// Attack-roll multiplier
    pub accuracy: f64,
    /// Max-hit multiplier
    pub damage: f64,
}

impl SpecialAttack {
    pub fn new(accuracy: f64, damage: f64) -> Self {
        debug_assert!(accuracy > 0.0 && damage > 0.0);
        Self { accuracy, damage }
    }
}
