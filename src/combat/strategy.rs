//! Combat strategies - per-discipline, per-kind attack behavior
//!
//! A strategy decides how far an actor can attack from, how many hits each
//! turn throws, and which ammunition or spell feeds the attack. Dispatch is a
//! closed tagged enum rather than open subclassing; autonomous templates get
//! overrides through the immutable [`StrategyRegistry`] built at world init.

use ahash::AHashMap;

use crate::actor::{Actor, ActorKind, PlayerState};
use crate::combat::discipline::CombatDiscipline;
use crate::combat::ranged::{self, RangedAmmo};
use crate::combat::spells::CombatSpell;
use crate::core::error::{CombatError, Result};
use crate::core::rng::SharedRng;
use crate::core::types::TemplateId;

/// Attack range for autonomous ranged attackers, which have no weapon table
pub const AUTONOMOUS_RANGED_DISTANCE: u32 = 6;

/// Default magic attack range when no spell is selected yet
pub const DEFAULT_MAGIC_DISTANCE: u32 = 8;

/// What one engagement turn will throw
#[derive(Debug, Clone, Copy)]
pub struct SessionPlan {
    pub discipline: CombatDiscipline,
    pub hit_count: u32,
    pub check_accuracy: bool,
}

/// Default melee behavior: adjacent, one hit per turn
#[derive(Debug, Clone, Copy, Default)]
pub struct MeleeStrategy;

/// Default ranged behavior; `template_ammo` is what autonomous actors fire
#[derive(Debug, Clone)]
pub struct RangedStrategy {
    pub template_ammo: RangedAmmo,
}

impl Default for RangedStrategy {
    fn default() -> Self {
        Self {
            template_ammo: ranged::CRUDE_ARROW,
        }
    }
}

/// Default magic behavior; autonomous actors draw uniformly from `candidates`
#[derive(Debug, Clone)]
pub struct MagicStrategy {
    pub candidates: &'static [CombatSpell],
}

impl Default for MagicStrategy {
    fn default() -> Self {
        Self { candidates: &[] }
    }
}

/// Polymorphic strategy over discipline and actor kind
#[derive(Debug, Clone)]
pub enum CombatStrategy {
    Melee(MeleeStrategy),
    Ranged(RangedStrategy),
    Magic(MagicStrategy),
}

impl CombatStrategy {
    pub fn discipline(&self) -> CombatDiscipline {
        match self {
            CombatStrategy::Melee(_) => CombatDiscipline::Melee,
            CombatStrategy::Ranged(_) => CombatDiscipline::Ranged,
            CombatStrategy::Magic(_) => CombatDiscipline::Magic,
        }
    }

    /// How far this actor can attack from, in tiles
    pub fn attack_distance(&self, actor: &Actor) -> Result<u32> {
        match self {
            CombatStrategy::Melee(_) => Ok(1),
            CombatStrategy::Ranged(_) => match &actor.kind {
                ActorKind::Player(state) => ranged::ranged_distance(state.equipment.weapon),
                ActorKind::Autonomous(_) => Ok(AUTONOMOUS_RANGED_DISTANCE),
            },
            CombatStrategy::Magic(_) => Ok(actor
                .casting()
                .map(|s| s.range)
                .unwrap_or(DEFAULT_MAGIC_DISTANCE)),
        }
    }

    /// Pick ammunition/spell for this turn and return the hit plan.
    /// The only side effects are ammunition consumption and spell selection.
    pub fn prepare(&self, attacker: &mut Actor, rng: &SharedRng) -> Result<SessionPlan> {
        match self {
            CombatStrategy::Melee(_) => Ok(SessionPlan {
                discipline: CombatDiscipline::Melee,
                hit_count: 1,
                check_accuracy: true,
            }),
            CombatStrategy::Ranged(strategy) => {
                match &mut attacker.kind {
                    ActorKind::Player(state) => {
                        let weapon = state.equipment.weapon;
                        if let Some(conjured) = ranged::conjured_ammo(weapon) {
                            // Self-supplying weapons skip the slot entirely
                            state.ranged_ammo = Some(conjured);
                        } else {
                            let slot =
                                state.equipment.ammo.as_ref().ok_or(CombatError::NoAmmunition)?;
                            if !ranged::compatible(weapon, slot.ammo.kind) {
                                return Err(CombatError::IncompatibleAmmunition(
                                    slot.ammo.kind,
                                    weapon,
                                ));
                            }
                            let fired = state
                                .equipment
                                .consume_ammo()
                                .ok_or(CombatError::NoAmmunition)?;
                            state.ranged_ammo = Some(fired);
                        }
                    }
                    ActorKind::Autonomous(state) => {
                        state.ammo = Some(strategy.template_ammo.clone());
                    }
                }
                Ok(SessionPlan {
                    discipline: CombatDiscipline::Ranged,
                    hit_count: 1,
                    check_accuracy: true,
                })
            }
            CombatStrategy::Magic(strategy) => {
                let spell = match &mut attacker.kind {
                    ActorKind::Player(state) => {
                        state.casting.clone().ok_or(CombatError::NoSpellSelected)?
                    }
                    ActorKind::Autonomous(state) => {
                        if strategy.candidates.is_empty() {
                            return Err(CombatError::NoSpellSelected);
                        }
                        let spell = rng.pick(strategy.candidates).clone();
                        state.casting = Some(spell.clone());
                        spell
                    }
                };
                Ok(SessionPlan {
                    discipline: CombatDiscipline::Magic,
                    hit_count: spell.hit_count,
                    check_accuracy: true,
                })
            }
        }
    }
}

/// Strategy a player's current selections imply: casting beats shooting
/// beats swinging
pub fn strategy_for_player(state: &PlayerState) -> CombatStrategy {
    if state.casting.is_some() {
        CombatStrategy::Magic(MagicStrategy::default())
    } else if state.equipment.weapon.is_ranged() {
        CombatStrategy::Ranged(RangedStrategy::default())
    } else {
        CombatStrategy::Melee(MeleeStrategy)
    }
}

/// Immutable template-id to strategy mapping, built once at world init
#[derive(Debug, Default)]
pub struct StrategyRegistry {
    entries: AHashMap<TemplateId, CombatStrategy>,
    fallback: MeleeStrategy,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(mut self, template: TemplateId, strategy: CombatStrategy) -> Self {
        self.entries.insert(template, strategy);
        self
    }

    /// Strategy for `template`, falling back to default melee
    pub fn strategy_for(&self, template: TemplateId) -> CombatStrategy {
        self.entries
            .get(&template)
            .cloned()
            .unwrap_or(CombatStrategy::Melee(self.fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::{AutonomousState, Equipment};
    use crate::combat::ranged::WeaponCategory;
    use crate::combat::spells;

    fn archer() -> Actor {
        let mut state = PlayerState::default();
        state.equipment = Equipment::new(WeaponCategory::Shortbow).with_ammo(ranged::CRUDE_ARROW, 3);
        Actor::player(state)
    }

    #[test]
    fn test_registry_falls_back_to_melee() {
        let registry = StrategyRegistry::new();
        let strategy = registry.strategy_for(TemplateId(404));
        assert_eq!(strategy.discipline(), CombatDiscipline::Melee);
    }

    #[test]
    fn test_registry_override() {
        let registry = StrategyRegistry::new().with_strategy(
            TemplateId(7),
            CombatStrategy::Ranged(RangedStrategy::default()),
        );
        assert_eq!(
            registry.strategy_for(TemplateId(7)).discipline(),
            CombatDiscipline::Ranged
        );
    }

    #[test]
    fn test_ranged_prepare_consumes_ammo() {
        let mut attacker = archer();
        let rng = SharedRng::seeded(1);
        let strategy = CombatStrategy::Ranged(RangedStrategy::default());

        strategy.prepare(&mut attacker, &rng).unwrap();
        let state = attacker.as_player().unwrap();
        assert_eq!(state.equipment.ammo.as_ref().unwrap().count, 2);
        assert_eq!(state.ranged_ammo, Some(ranged::CRUDE_ARROW));
    }

    #[test]
    fn test_self_supplying_bow_needs_no_ammo_slot() {
        let mut state = PlayerState::default();
        state.equipment = Equipment::new(WeaponCategory::Thornbow);
        let mut attacker = Actor::player(state);
        let rng = SharedRng::seeded(6);
        let strategy = CombatStrategy::Ranged(RangedStrategy::default());

        strategy.prepare(&mut attacker, &rng).unwrap();
        let state = attacker.as_player().unwrap();
        assert_eq!(state.ranged_ammo, Some(ranged::THORN_SLIVER));
        assert!(state.equipment.ammo.is_none());
        assert_eq!(strategy.attack_distance(&attacker).unwrap(), 8);
    }

    #[test]
    fn test_self_supplying_bow_ignores_loaded_slot() {
        let mut state = PlayerState::default();
        state.equipment =
            Equipment::new(WeaponCategory::Thornbow).with_ammo(ranged::CRUDE_ARROW, 3);
        let mut attacker = Actor::player(state);
        let rng = SharedRng::seeded(7);
        let strategy = CombatStrategy::Ranged(RangedStrategy::default());

        strategy.prepare(&mut attacker, &rng).unwrap();
        let state = attacker.as_player().unwrap();
        assert_eq!(state.ranged_ammo, Some(ranged::THORN_SLIVER));
        assert_eq!(state.equipment.ammo.as_ref().unwrap().count, 3);
    }

    #[test]
    fn test_ranged_prepare_rejects_empty_quiver() {
        let mut state = PlayerState::default();
        state.equipment = Equipment::new(WeaponCategory::Shortbow);
        let mut attacker = Actor::player(state);
        let rng = SharedRng::seeded(2);
        let strategy = CombatStrategy::Ranged(RangedStrategy::default());

        assert!(matches!(
            strategy.prepare(&mut attacker, &rng),
            Err(CombatError::NoAmmunition)
        ));
    }

    #[test]
    fn test_ranged_prepare_rejects_wrong_ammo() {
        let mut state = PlayerState::default();
        state.equipment = Equipment::new(WeaponCategory::Shortbow).with_ammo(ranged::HEAVY_BOLT, 5);
        let mut attacker = Actor::player(state);
        let rng = SharedRng::seeded(3);
        let strategy = CombatStrategy::Ranged(RangedStrategy::default());

        assert!(matches!(
            strategy.prepare(&mut attacker, &rng),
            Err(CombatError::IncompatibleAmmunition(..))
        ));
    }

    #[test]
    fn test_autonomous_magic_picks_from_candidates() {
        static CANDIDATES: [CombatSpell; 2] = [spells::EMBER_BOLT, spells::FROST_LANCE];
        let mut attacker = Actor::autonomous(AutonomousState::new(
            TemplateId(13),
            "Cinder Seer",
            0,
        ));
        let rng = SharedRng::seeded(4);
        let strategy = CombatStrategy::Magic(MagicStrategy {
            candidates: &CANDIDATES,
        });

        strategy.prepare(&mut attacker, &rng).unwrap();
        let chosen = attacker.as_autonomous().unwrap().casting.as_ref().unwrap();
        assert!(CANDIDATES.iter().any(|c| c == chosen));
    }

    #[test]
    fn test_player_strategy_selection() {
        let mut state = PlayerState::default();
        assert_eq!(
            strategy_for_player(&state).discipline(),
            CombatDiscipline::Melee
        );

        state.equipment = Equipment::new(WeaponCategory::Crossbow);
        assert_eq!(
            strategy_for_player(&state).discipline(),
            CombatDiscipline::Ranged
        );

        state.casting = Some(spells::EMBER_BOLT);
        assert_eq!(
            strategy_for_player(&state).discipline(),
            CombatDiscipline::Magic
        );
    }

    #[test]
    fn test_attack_distance_by_weapon() {
        let attacker = archer();
        let strategy = CombatStrategy::Ranged(RangedStrategy::default());
        assert_eq!(strategy.attack_distance(&attacker).unwrap(), 7);
    }
}
