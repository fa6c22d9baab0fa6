//! Combat session - one attack attempt through the full pipeline
//!
//! Raw hits come from the resolver, pass through the modifier layer, then are
//! delivered to the victim and recorded in its damage ledger, all in one
//! call. A session is created fresh per attack and consumed exactly once;
//! nothing here persists between attacks.

use crate::actor::Actor;
use crate::combat::discipline::CombatDiscipline;
use crate::combat::hit::CombatHit;
use crate::combat::modifiers;
use crate::combat::narrate::CombatObserver;
use crate::combat::resolver;
use crate::core::error::Result;
use crate::core::rng::SharedRng;
use crate::core::types::{ActorId, Tick};

/// A resolved, delivered attack
#[derive(Debug)]
pub struct CombatSession {
    pub attacker: ActorId,
    pub victim: ActorId,
    pub discipline: CombatDiscipline,
    pub check_accuracy: bool,
    pub hits: Vec<CombatHit>,
}

impl CombatSession {
    /// Damage actually delivered across the batch
    pub fn total_damage(&self) -> u32 {
        self.hits.iter().map(|h| h.effective_damage()).sum()
    }

    pub fn into_hits(self) -> Vec<CombatHit> {
        self.hits
    }
}

/// Resolve one attack of `hit_count` swings and deliver it to the victim.
///
/// Accuracy is only rolled when `check_accuracy` is set; otherwise every hit
/// lands (scripted or typeless damage). The victim's ledger records the
/// delivered total for kill credit. Experience is the caller's concern.
pub fn resolve_attack(
    attacker: &Actor,
    victim: &mut Actor,
    discipline: CombatDiscipline,
    hit_count: u32,
    check_accuracy: bool,
    now: Tick,
    rng: &SharedRng,
    observer: &dyn CombatObserver,
) -> Result<CombatSession> {
    // Set effects are evaluated once per attack, not per hit
    let guard_break = resolver::roll_guard_break(attacker, discipline, rng);

    let mut hits = Vec::with_capacity(hit_count as usize);
    for _ in 0..hit_count {
        let mut hit = resolver::random_hit(attacker, victim, discipline, rng, observer)?;
        if check_accuracy {
            hit.accurate =
                resolver::is_accurate(attacker, victim, discipline, guard_break, rng, observer);
        }
        hits.push(hit);
    }

    modifiers::apply_protection(
        attacker,
        victim,
        discipline,
        check_accuracy,
        &mut hits,
        rng,
        observer,
    );
    debug_assert_eq!(hits.len(), hit_count as usize, "hit count mismatch");

    let total: u32 = hits.iter().map(|h| h.effective_damage()).sum();
    victim.skills.apply_damage(total);
    victim.ledger.add(attacker.id, total, now);

    // A landed weaken spell drains the victim's template stat
    if discipline == CombatDiscipline::Magic && hits.iter().any(|h| h.accurate) {
        if let Some(weaken) = attacker.casting().and_then(|s| s.weaken) {
            if let Some(state) = victim.as_autonomous_mut() {
                if state.weakened_by.is_none() {
                    state.weakened_by = Some(weaken);
                }
            }
        }
    }

    Ok(CombatSession {
        attacker: attacker.id,
        victim: victim.id,
        discipline,
        check_accuracy,
        hits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::{AutonomousState, PlayerState, Skill};
    use crate::combat::narrate::NoopObserver;
    use crate::combat::spells;
    use crate::core::types::TemplateId;

    #[test]
    fn test_unchecked_attack_always_lands() {
        let mut attacker = Actor::player(PlayerState::default());
        attacker.skills.set_level(Skill::Strength, 40);
        let mut victim = Actor::player(PlayerState::default());
        victim.skills.set_level(Skill::Vitality, 99);
        let rng = SharedRng::seeded(8);

        let session = resolve_attack(
            &attacker,
            &mut victim,
            CombatDiscipline::Melee,
            2,
            false,
            0,
            &rng,
            &NoopObserver,
        )
        .unwrap();

        assert_eq!(session.hits.len(), 2);
        assert!(session.hits.iter().all(|h| h.accurate));
        assert_eq!(
            victim.skills.current_vitality(),
            99 - session.total_damage() as i32
        );
    }

    #[test]
    fn test_delivered_damage_is_recorded_in_ledger() {
        let attacker = Actor::player(PlayerState::default());
        let mut victim = Actor::player(PlayerState::default());
        victim.skills.set_level(Skill::Vitality, 99);
        let rng = SharedRng::seeded(9);

        let session = resolve_attack(
            &attacker,
            &mut victim,
            CombatDiscipline::Melee,
            1,
            false,
            5,
            &rng,
            &NoopObserver,
        )
        .unwrap();

        let snapshot = victim.ledger.snapshot(5);
        assert_eq!(snapshot.get(&attacker.id), Some(&session.total_damage()));
    }

    #[test]
    fn test_landed_weaken_spell_drains_template() {
        let mut attacker = Actor::player(PlayerState::default());
        attacker.as_player_mut().unwrap().casting = Some(spells::SAP_MIGHT);
        let mut victim =
            Actor::autonomous(AutonomousState::new(TemplateId(4), "Ash Ghoul", 10));
        victim.skills.set_level(Skill::Vitality, 50);
        let rng = SharedRng::seeded(10);

        resolve_attack(
            &attacker,
            &mut victim,
            CombatDiscipline::Magic,
            1,
            false,
            0,
            &rng,
            &NoopObserver,
        )
        .unwrap();

        assert!(victim.as_autonomous().unwrap().weakened_by.is_some());
    }
}
