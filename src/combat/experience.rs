//! Experience distribution for damage dealt
//!
//! Only player attackers are credited. Non-magic damage splits evenly across
//! the fight type's trained skills; magic credits the magic skill with the
//! spell's base experience on top, even when the cast splashes for zero.

use crate::actor::{Actor, ActorKind, Skill};
use crate::combat::constants::{EXPERIENCE_PER_DAMAGE, VITALITY_EXPERIENCE_DIVISOR};
use crate::combat::discipline::CombatDiscipline;

/// Credit `attacker` for `total_damage` dealt with `discipline`
pub fn distribute_experience(
    attacker: &mut Actor,
    discipline: CombatDiscipline,
    total_damage: u32,
) {
    let (trained, spell_experience) = match &attacker.kind {
        ActorKind::Player(state) => (
            state.fight_type.trained_skills,
            state.casting.as_ref().map(|s| s.base_experience),
        ),
        ActorKind::Autonomous(_) => return,
    };

    if discipline == CombatDiscipline::Magic {
        let Some(base) = spell_experience else {
            return;
        };
        let exp = total_damage as f64 * EXPERIENCE_PER_DAMAGE + base;
        attacker.skills.add_experience(Skill::Magic, exp);
        attacker
            .skills
            .add_experience(Skill::Vitality, exp / VITALITY_EXPERIENCE_DIVISOR);
        return;
    }

    if trained.is_empty() {
        return;
    }
    let share = total_damage as f64 * EXPERIENCE_PER_DAMAGE / trained.len() as f64;
    for skill in trained {
        attacker.skills.add_experience(*skill, share);
    }
    attacker
        .skills
        .add_experience(Skill::Vitality, share / VITALITY_EXPERIENCE_DIVISOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::{AutonomousState, PlayerState};
    use crate::combat::bonuses;
    use crate::combat::spells;
    use crate::combat::styles::{FightStyle, FightType};
    use crate::core::types::TemplateId;

    #[test]
    fn test_controlled_style_splits_three_ways() {
        let mut attacker = Actor::player(PlayerState::default());
        attacker.as_player_mut().unwrap().fight_type =
            FightType::melee(FightStyle::Controlled, bonuses::ATTACK_STAB);

        distribute_experience(&mut attacker, CombatDiscipline::Melee, 30);

        // 30 * 4 / 3 skills = 40 each, vitality a third of a share
        for skill in [Skill::Attack, Skill::Strength, Skill::Defence] {
            assert!((attacker.skills.experience(skill) - 40.0).abs() < 1e-9);
        }
        assert!((attacker.skills.experience(Skill::Vitality) - 40.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_magic_awards_base_experience_on_splash() {
        let mut attacker = Actor::player(PlayerState::default());
        attacker.as_player_mut().unwrap().casting = Some(spells::EMBER_BOLT);

        distribute_experience(&mut attacker, CombatDiscipline::Magic, 0);

        let base = spells::EMBER_BOLT.base_experience;
        assert!((attacker.skills.experience(Skill::Magic) - base).abs() < 1e-9);
        assert!(
            (attacker.skills.experience(Skill::Vitality) - base / 3.0).abs() < 1e-9
        );
    }

    #[test]
    fn test_autonomous_attacker_is_a_no_op() {
        let mut attacker =
            Actor::autonomous(AutonomousState::new(TemplateId(1), "Ash Ghoul", 10));
        distribute_experience(&mut attacker, CombatDiscipline::Melee, 50);
        assert_eq!(attacker.skills.experience(Skill::Attack), 0.0);
        assert_eq!(attacker.skills.experience(Skill::Vitality), 0.0);
    }

    #[test]
    fn test_magic_without_spell_awards_nothing() {
        let mut attacker = Actor::player(PlayerState::default());
        distribute_experience(&mut attacker, CombatDiscipline::Magic, 12);
        assert_eq!(attacker.skills.experience(Skill::Magic), 0.0);
    }
}
