//! Hit resolver - accuracy and damage magnitude for one attack
//!
//! Pure formula layer: given attacker and victim state plus a discipline,
//! computes the attack/defence rolls, the hit probability, and the per-swing
//! damage draw. Intermediate values are reported through the observer and
//! never change control flow.

use crate::actor::{Actor, ActorKind, Skill};
use crate::combat::bonuses::{ATTACK_MAGIC, DEFENCE_MAGIC};
use crate::combat::constants::{
    ACCURACY_CEILING, ACCURACY_FLOOR, COLLAPSE_BONUS_THRESHOLD, COLLAPSE_DIE, GUARD_BREAK_DIE,
    GRAVETHIRST_DEFICIT_FACTOR, LOW_LEVEL_DAMAGE_MULTIPLIER, LOW_LEVEL_THRESHOLD,
};
use crate::combat::discipline::CombatDiscipline;
use crate::combat::hit::CombatHit;
use crate::combat::narrate::CombatObserver;
use crate::combat::sets::{has_full_set, SetBonus};
use crate::combat::spells::WeakenedStat;
use crate::combat::styles::FightStyle;
use crate::core::error::{CombatError, Result};
use crate::core::rng::SharedRng;

/// Success probability for an attack roll `A` against a defence roll `D`,
/// clamped to the configured floor and ceiling
pub fn hit_chance(attack_roll: f64, defence_roll: f64) -> f64 {
    let a = attack_roll.floor();
    let d = defence_roll.floor();
    let p = if a < d {
        (a - 1.0) / (2.0 * d)
    } else {
        1.0 - (d + 1.0) / (2.0 * a)
    };
    p.clamp(ACCURACY_FLOOR, ACCURACY_CEILING)
}

/// Warded Bulwark melee effect: one draw per attack, not per hit
pub fn roll_guard_break(
    attacker: &Actor,
    discipline: CombatDiscipline,
    rng: &SharedRng,
) -> bool {
    discipline == CombatDiscipline::Melee
        && has_full_set(attacker, SetBonus::WardedBulwark)
        && rng.one_in(GUARD_BREAK_DIE)
}

/// The attacker's scaled attack roll
pub fn attack_roll(attacker: &Actor, discipline: CombatDiscipline, rng: &SharedRng) -> f64 {
    let mut prayer_mod = 1.0;
    let mut equipment_bonus = 1.0_f64;
    let mut special_mod = 1.0;
    let mut style_bonus = 0;

    if let ActorKind::Player(state) = &attacker.kind {
        equipment_bonus = if discipline == CombatDiscipline::Magic {
            attacker.bonuses.get(ATTACK_MAGIC) as f64
        } else {
            attacker.bonuses.get(state.fight_type.attack_slot) as f64
        };
        if discipline == CombatDiscipline::Melee {
            prayer_mod = state.prayers.accuracy_tier();
        }
        style_bonus = state.fight_type.style.accuracy_bonus();
        if let Some(special) = &state.special {
            special_mod = special.accuracy;
        }
    }

    let mut roll = (equipment_bonus + attacker.base_attack(discipline) as f64).floor() + 8.0;
    roll *= prayer_mod;
    roll += style_bonus as f64;

    // A deeply negative bonus collapses the roll seven times out of eight
    if equipment_bonus < COLLAPSE_BONUS_THRESHOLD && !rng.one_in(COLLAPSE_DIE) {
        roll = 0.0;
    }
    roll * special_mod
}

/// The victim's scaled defence roll. The attacker's fight type decides which
/// defensive bonus slot is contested; autonomous attackers contest the raw
/// defence level instead.
pub fn defence_roll(
    attacker: &Actor,
    victim: &Actor,
    discipline: CombatDiscipline,
    guard_break: bool,
    rng: &SharedRng,
) -> f64 {
    let mut prayer_mod = 1.0;
    let mut equipment_bonus = 1.0_f64;
    let mut style_bonus = 0;

    if let ActorKind::Player(state) = &victim.kind {
        let contested_slot = attacker.as_player().map(|a| a.fight_type.defence_slot);
        equipment_bonus = if discipline == CombatDiscipline::Magic {
            victim.bonuses.get(DEFENCE_MAGIC) as f64
        } else {
            match contested_slot {
                Some(slot) => victim.bonuses.get(slot) as f64,
                None => victim.skills.level(Skill::Defence) as f64,
            }
        };
        prayer_mod = state.prayers.defence_tier();
        style_bonus = state.fight_type.style.defence_bonus();
    }

    let mut roll = (equipment_bonus + victim.base_defence(discipline) as f64).floor() + 8.0;
    roll *= prayer_mod;
    roll += style_bonus as f64;

    if equipment_bonus < COLLAPSE_BONUS_THRESHOLD && !rng.one_in(COLLAPSE_DIE) {
        roll = 0.0;
    }
    if guard_break {
        roll = 0.0;
    }
    roll
}

/// Whether one swing lands
pub fn is_accurate(
    attacker: &Actor,
    victim: &Actor,
    discipline: CombatDiscipline,
    guard_break: bool,
    rng: &SharedRng,
    observer: &dyn CombatObserver,
) -> bool {
    let attack = attack_roll(attacker, discipline, rng);
    let defence = defence_roll(attacker, victim, discipline, guard_break, rng);
    let chance = hit_chance(attack, defence);
    observer.accuracy_roll(attack.floor(), defence.floor(), chance);
    rng.next_f64() <= chance
}

/// Maximum melee hit for this attacker against this victim
pub fn max_melee_hit(attacker: &Actor, victim: &Actor) -> u32 {
    match &attacker.kind {
        ActorKind::Autonomous(state) => {
            let mut max = state.max_hit as i32;
            if let Some(weaken) = state.weakened_by {
                if weaken.stat == WeakenedStat::Strength {
                    max -= (weaken.rate * max as f64) as i32;
                }
            }
            max.max(0) as u32
        }
        ActorKind::Player(state) => {
            let strength_level = attacker.skills.level(Skill::Strength);
            let attack_level = attacker.skills.level(Skill::Attack);
            let prayer_mod = state.prayers.strength_tier();
            let style_bonus = state.fight_type.style.damage_bonus();
            let other_mod =
                if strength_level <= LOW_LEVEL_THRESHOLD || attack_level <= LOW_LEVEL_THRESHOLD {
                    LOW_LEVEL_DAMAGE_MULTIPLIER
                } else {
                    1.0
                };

            let effective = (strength_level as f64 * prayer_mod * other_mod) as i32 + style_bonus;
            let strength_bonus = attacker.bonuses.strength();
            let base = 1.3
                + (effective / 10) as f64
                + (strength_bonus / 80) as f64
                + ((effective * strength_bonus) / 640) as f64;

            let special_mod = state.special.as_ref().map(|s| s.damage).unwrap_or(1.0);
            let mut max = (base * special_mod) as i32;

            if has_full_set(attacker, SetBonus::Gravethirst) {
                max += (victim.skills.vitality_deficit() as f64 * GRAVETHIRST_DEFICIT_FACTOR)
                    as i32;
            }
            max.max(1) as u32
        }
    }
}

/// Maximum ranged hit for this attacker
pub fn max_ranged_hit(attacker: &Actor) -> u32 {
    match &attacker.kind {
        ActorKind::Autonomous(state) => state.max_hit,
        ActorKind::Player(state) => {
            let ammo_strength = state.ranged_ammo.as_ref().map(|a| a.strength).unwrap_or(0);
            let ranged_level = attacker.skills.level(Skill::Ranged);
            let style_bonus = if state.fight_type.style == FightStyle::Accurate {
                3
            } else {
                0
            };

            let effective = ranged_level + style_bonus;
            let base = 1.3
                + (effective / 10) as f64
                + (ammo_strength / 80) as f64
                + ((effective * ammo_strength) / 640) as f64;

            let special_mod = state.special.as_ref().map(|s| s.damage).unwrap_or(1.0);
            ((base * special_mod) as i32).max(1) as u32
        }
    }
}

/// One damage draw for a single swing. Melee and ranged draw `[1, maxHit]`,
/// magic draws `[0, spell maxHit]`.
pub fn random_hit(
    attacker: &Actor,
    victim: &Actor,
    discipline: CombatDiscipline,
    rng: &SharedRng,
    observer: &dyn CombatObserver,
) -> Result<CombatHit> {
    let damage = match discipline {
        CombatDiscipline::Melee => {
            let max = max_melee_hit(attacker, victim).max(1);
            observer.max_hit(max);
            rng.inclusive(1, max)
        }
        CombatDiscipline::Ranged => {
            let max = max_ranged_hit(attacker).max(1);
            observer.max_hit(max);
            rng.inclusive(1, max)
        }
        CombatDiscipline::Magic => {
            let spell = attacker.casting().ok_or(CombatError::NoSpellSelected)?;
            observer.max_hit(spell.max_hit);
            rng.inclusive(0, spell.max_hit)
        }
    };
    Ok(CombatHit::new(damage, true, discipline))
}
