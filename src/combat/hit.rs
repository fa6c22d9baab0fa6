//! A single resolved swing

use serde::{Deserialize, Serialize};

use crate::combat::discipline::CombatDiscipline;

/// One resolved hit: raw damage plus the accuracy verdict
///
/// Mutable only inside the resolution pipeline for its one attack, then
/// frozen and delivered. An inaccurate hit always delivers zero damage
/// regardless of its raw roll.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CombatHit {
    pub damage: u32,
    pub accurate: bool,
    pub discipline: CombatDiscipline,
}

impl CombatHit {
    pub fn new(damage: u32, accurate: bool, discipline: CombatDiscipline) -> Self {
        Self {
            damage,
            accurate,
            discipline,
        }
    }

    /// Damage actually delivered to the victim
    pub fn effective_damage(&self) -> u32 {
        if self.accurate {
            self.damage
        } else {
            0
        }
    }
}
