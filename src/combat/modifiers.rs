//! Effect and prayer modifier layer
//!
//! Runs after the hit resolver, mutating an already-resolved batch in place.
//! Only player victims benefit: a matching aegis prayer shaves damage from
//! player attackers and can cancel hits outright, and silences autonomous
//! attackers entirely. A Warded Bulwark attacker walks straight through.

use crate::actor::{Actor, ActorKind};
use crate::combat::constants::{PROTECTION_CANCEL_CHANCE, PROTECTION_DAMAGE_REDUCTION};
use crate::combat::discipline::CombatDiscipline;
use crate::combat::hit::CombatHit;
use crate::combat::narrate::CombatObserver;
use crate::combat::sets::{has_full_set, SetBonus};
use crate::core::rng::SharedRng;

/// Apply protection-prayer effects to a resolved hit batch
pub fn apply_protection(
    attacker: &Actor,
    victim: &Actor,
    discipline: CombatDiscipline,
    check_accuracy: bool,
    hits: &mut [CombatHit],
    rng: &SharedRng,
    observer: &dyn CombatObserver,
) {
    if !check_accuracy {
        return;
    }
    let ActorKind::Player(victim_state) = &victim.kind else {
        return;
    };
    if has_full_set(attacker, SetBonus::WardedBulwark) {
        observer.protection_bypassed();
        return;
    }
    if !victim_state
        .prayers
        .is_active(discipline.protecting_prayer())
    {
        return;
    }

    match &attacker.kind {
        ActorKind::Player(_) => {
            for hit in hits.iter_mut() {
                let before = hit.damage;
                hit.damage = (hit.damage as f64 * (1.0 - PROTECTION_DAMAGE_REDUCTION)) as u32;
                observer.protection_reduced(before, hit.damage);

                // Fresh draw per hit, rounded to two decimals
                let roll = (rng.next_f64() * 100.0).round() / 100.0;
                observer.protection_cancel_roll(roll, PROTECTION_CANCEL_CHANCE);
                if roll <= PROTECTION_CANCEL_CHANCE {
                    hit.accurate = false;
                }
            }
        }
        ActorKind::Autonomous(_) => {
            for hit in hits.iter_mut() {
                hit.accurate = false;
            }
        }
    }
}
