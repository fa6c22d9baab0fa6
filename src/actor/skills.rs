//! Skill levels and experience for combat participants
//!
//! Combat only reads levels and pushes experience deltas; training curves and
//! level-up bookkeeping live outside this crate.

use serde::{Deserialize, Serialize};

/// Skills combat interacts with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    Attack,
    Strength,
    Defence,
    Ranged,
    Magic,
    Vitality,
}

pub const SKILL_COUNT: usize = 6;

impl Skill {
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Per-actor skill state: boosted level, real (unboosted) level, experience
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillSet {
    levels: [i32; SKILL_COUNT],
    real_levels: [i32; SKILL_COUNT],
    experience: [f64; SKILL_COUNT],
}

impl SkillSet {
    /// All skills at `level`, vitality full
    pub fn uniform(level: i32) -> Self {
        Self {
            levels: [level; SKILL_COUNT],
            real_levels: [level; SKILL_COUNT],
            experience: [0.0; SKILL_COUNT],
        }
    }

    /// Current (possibly boosted or drained) level
    pub fn level(&self, skill: Skill) -> i32 {
        self.levels[skill.index()]
    }

    /// Real level, unaffected by boosts and damage
    pub fn real_level(&self, skill: Skill) -> i32 {
        self.real_levels[skill.index()]
    }

    pub fn set_level(&mut self, skill: Skill, level: i32) {
        self.levels[skill.index()] = level;
        self.real_levels[skill.index()] = level;
    }

    /// Boost or drain the current level without touching the real level
    pub fn adjust_level(&mut self, skill: Skill, delta: i32) {
        let idx = skill.index();
        self.levels[idx] = (self.levels[idx] + delta).max(0);
    }

    pub fn experience(&self, skill: Skill) -> f64 {
        self.experience[skill.index()]
    }

    pub fn add_experience(&mut self, skill: Skill, amount: f64) {
        self.experience[skill.index()] += amount;
    }

    /// Current vitality (hitpoints); zero means defeated
    pub fn current_vitality(&self) -> i32 {
        self.level(Skill::Vitality)
    }

    pub fn max_vitality(&self) -> i32 {
        self.real_level(Skill::Vitality)
    }

    /// Max vitality minus current vitality
    pub fn vitality_deficit(&self) -> i32 {
        (self.max_vitality() - self.current_vitality()).max(0)
    }

    /// Apply damage to vitality, saturating at zero
    pub fn apply_damage(&mut self, amount: u32) {
        let idx = Skill::Vitality.index();
        let amount = amount.min(i32::MAX as u32) as i32;
        self.levels[idx] = self.levels[idx].saturating_sub(amount).max(0);
    }
}

impl Default for SkillSet {
    fn default() -> Self {
        let mut skills = Self::uniform(1);
        skills.set_level(Skill::Vitality, 10);
        skills
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_saturates_at_zero() {
        let mut skills = SkillSet::uniform(10);
        skills.apply_damage(25);
        assert_eq!(skills.current_vitality(), 0);
    }

    #[test]
    fn test_vitality_deficit() {
        let mut skills = SkillSet::uniform(50);
        skills.apply_damage(20);
        assert_eq!(skills.vitality_deficit(), 20);
        assert_eq!(skills.max_vitality(), 50);
    }

    #[test]
    fn test_experience_accumulates() {
        let mut skills = SkillSet::uniform(1);
        skills.add_experience(Skill::Attack, 40.0);
        skills.add_experience(Skill::Attack, 13.5);
        assert!((skills.experience(Skill::Attack) - 53.5).abs() < f64::EPSILON);
    }
}
