//! Area damage dispatch
//!
//! Resolves one attack against every eligible actor inside a radius around an
//! impact point. Eligibility rules keep the blast from double-hitting the
//! declared target of the ongoing engagement or striking the attacker.

use crate::actor::Actor;
use crate::combat::discipline::CombatDiscipline;
use crate::combat::narrate::CombatObserver;
use crate::combat::session::resolve_attack;
use crate::core::error::Result;
use crate::core::rng::SharedRng;
use crate::core::types::{ActorId, Position, Tick};
use crate::world::ActorRegistry;

/// Callback invoked once per struck target with the damage dealt
pub type HitCallback<'a> = &'a mut dyn FnMut(ActorId, u32);

/// Strike every eligible candidate within `radius` of `center`.
///
/// Skipped outright: the attacker itself, the attacker's declared engagement
/// victim (already hit by the primary attack), anyone outside the radius,
/// anyone already defeated, and ids no longer in the registry. Damage and
/// ledger recording happen per target; no experience is granted here, the
/// primary attack already paid it out. Returns the ids actually struck.
pub fn apply_area_damage(
    registry: &mut ActorRegistry,
    attacker_id: ActorId,
    candidates: &[ActorId],
    center: Position,
    radius: u32,
    hit_count: u32,
    discipline: CombatDiscipline,
    check_accuracy: bool,
    now: Tick,
    rng: &SharedRng,
    observer: &dyn CombatObserver,
    mut on_hit: Option<HitCallback<'_>>,
) -> Result<Vec<ActorId>> {
    let declared_victim = registry.get(attacker_id)?.builder.victim();
    let mut struck = Vec::new();

    for &candidate in candidates {
        if candidate == attacker_id || Some(candidate) == declared_victim {
            continue;
        }
        let Some((attacker, victim)) = registry.pair_mut(attacker_id, candidate) else {
            continue;
        };
        if !eligible(victim, center, radius) {
            continue;
        }
        let session = resolve_attack(
            attacker,
            victim,
            discipline,
            hit_count,
            check_accuracy,
            now,
            rng,
            observer,
        )?;
        if let Some(callback) = on_hit.as_mut() {
            callback(candidate, session.total_damage());
        }
        struck.push(candidate);
    }
    Ok(struck)
}

fn eligible(victim: &Actor, center: Position, radius: u32) -> bool {
    victim.position.within_distance(&center, radius) && !victim.is_defeated()
}
