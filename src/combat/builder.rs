//! Combat builder - the per-actor engagement state machine
//!
//! Idle until an attack is initiated, then engaged against one victim,
//! attacking on a per-discipline cooldown whenever the range gate passes.
//! The victim is held as an id into the actor table; death, despawn, or an
//! explicit disengage all drop the engagement back to idle. The builder dies
//! with its owning actor and persists nothing.

use crate::actor::{Actor, ActorKind};
use crate::combat::experience::distribute_experience;
use crate::combat::narrate::CombatObserver;
use crate::combat::session::resolve_attack;
use crate::combat::strategy::{strategy_for_player, CombatStrategy, StrategyRegistry};
use crate::core::error::Result;
use crate::core::rng::SharedRng;
use crate::core::types::{ActorId, Tick};
use crate::world::ActorRegistry;

/// Per-actor engagement state
#[derive(Debug, Default)]
pub struct CombatBuilder {
    victim: Option<ActorId>,
    strategy: Option<CombatStrategy>,
    last_attack: Option<Tick>,
}

impl CombatBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn victim(&self) -> Option<ActorId> {
        self.victim
    }

    pub fn strategy(&self) -> Option<&CombatStrategy> {
        self.strategy.as_ref()
    }

    pub fn is_engaged(&self) -> bool {
        self.victim.is_some()
    }

    /// Idle -> Engaged
    pub fn engage(&mut self, victim: ActorId) {
        self.victim = Some(victim);
    }

    /// Engaged -> Idle; the attack timer is not reset so re-engaging does
    /// not grant a free immediate hit
    pub fn disengage(&mut self) {
        self.victim = None;
        self.strategy = None;
    }

    fn set_strategy(&mut self, strategy: CombatStrategy) {
        self.strategy = Some(strategy);
    }

    fn cooldown_ready(&self, now: Tick, cooldown: Tick) -> bool {
        self.last_attack
            .map_or(true, |last| now.saturating_sub(last) >= cooldown)
    }

    fn mark_attacked(&mut self, now: Tick) {
        self.last_attack = Some(now);
    }
}

/// Range gate with catch-up leniency: the base distance stretches by one when
/// both parties are mid-step and the attacker is free to chase, and by two
/// more when the defender is actively fleeing.
pub fn within_attack_range(attacker: &Actor, victim: &Actor, base_distance: u32) -> bool {
    let mut distance = base_distance;
    if attacker.movement.chasing() && !victim.movement.done {
        distance += 1;
        if victim.movement.running {
            distance += 2;
        }
    }
    attacker.position.within_distance(&victim.position, distance)
}

/// Point `attacker` at `victim` and select its strategy
pub fn engage(
    registry: &mut ActorRegistry,
    strategies: &StrategyRegistry,
    attacker_id: ActorId,
    victim_id: ActorId,
) -> Result<()> {
    let attacker = registry.get_mut(attacker_id)?;
    let strategy = current_strategy(attacker, strategies);
    attacker.builder.engage(victim_id);
    attacker.builder.set_strategy(strategy);
    Ok(())
}

fn current_strategy(attacker: &Actor, strategies: &StrategyRegistry) -> CombatStrategy {
    match &attacker.kind {
        ActorKind::Player(state) => strategy_for_player(state),
        ActorKind::Autonomous(state) => strategies.strategy_for(state.template),
    }
}

/// Advance one actor's engagement by one tick.
///
/// A failed range check or pending cooldown skips the tick without consuming
/// anything; the next tick retries naturally. A vanished or defeated victim
/// drops the engagement.
pub fn advance_engagement(
    registry: &mut ActorRegistry,
    strategies: &StrategyRegistry,
    attacker_id: ActorId,
    now: Tick,
    rng: &SharedRng,
    observer: &dyn CombatObserver,
) -> Result<()> {
    let Some(victim_id) = registry.get(attacker_id)?.builder.victim() else {
        return Ok(());
    };
    if !registry.contains(victim_id) {
        // Victim left the world; lookup failure stands in for a dead reference
        registry.get_mut(attacker_id)?.builder.disengage();
        return Ok(());
    }
    let Some((attacker, victim)) = registry.pair_mut(attacker_id, victim_id) else {
        // Self-targeting is never valid
        return Ok(());
    };
    if victim.is_defeated() {
        attacker.builder.disengage();
        return Ok(());
    }

    // Players can switch weapon or spell mid-fight, so re-derive each tick
    let strategy = current_strategy(attacker, strategies);
    attacker.builder.set_strategy(strategy.clone());

    let base_distance = strategy.attack_distance(attacker)?;
    if !within_attack_range(attacker, victim, base_distance) {
        return Ok(());
    }
    if !attacker
        .builder
        .cooldown_ready(now, strategy.discipline().cooldown_ticks())
    {
        return Ok(());
    }

    let plan = strategy.prepare(attacker, rng)?;
    let session = resolve_attack(
        attacker,
        victim,
        plan.discipline,
        plan.hit_count,
        plan.check_accuracy,
        now,
        rng,
        observer,
    )?;
    let total = session.total_damage();
    distribute_experience(attacker, plan.discipline, total);
    attacker.builder.mark_attacked(now);

    if victim.is_defeated() {
        attacker.builder.disengage();
    }
    Ok(())
}
