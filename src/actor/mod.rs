//! Actor model - the combat-facing view of players and autonomous creatures
//!
//! Everything here is a read-only contract over external collaborators
//! (stats, equipment, movement, positions), plus the two pieces of state
//! combat itself owns per actor: the damage ledger and the combat builder.

pub mod equipment;
pub mod movement;
pub mod skills;

pub use equipment::{AmmoSlot, Equipment, ItemId};
pub use movement::MovementState;
pub use skills::{Skill, SkillSet};

use crate::combat::bonuses::BonusProfile;
use crate::combat::builder::CombatBuilder;
use crate::combat::discipline::CombatDiscipline;
use crate::combat::ledger::DamageLedger;
use crate::combat::prayer::PrayerBook;
use crate::combat::ranged::RangedAmmo;
use crate::combat::special::SpecialAttack;
use crate::combat::spells::{CombatSpell, WeakenEffect};
use crate::combat::styles::FightType;
use crate::core::types::{ActorId, Position, TemplateId};

/// State only player-controlled actors carry
#[derive(Debug, Clone)]
pub struct PlayerState {
    pub fight_type: FightType,
    pub prayers: PrayerBook,
    /// Active special attack, if one is toggled on
    pub special: Option<SpecialAttack>,
    /// Spell the player has chosen to cast
    pub casting: Option<CombatSpell>,
    /// Ammunition nocked for the current attack, set by the ranged strategy
    pub ranged_ammo: Option<RangedAmmo>,
    pub equipment: Equipment,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            fight_type: FightType::default(),
            prayers: PrayerBook::default(),
            special: None,
            casting: None,
            ranged_ammo: None,
            equipment: Equipment::default(),
        }
    }
}

/// State only autonomous (template-driven) actors carry
#[derive(Debug, Clone)]
pub struct AutonomousState {
    pub template: TemplateId,
    pub name: String,
    /// Template-defined maximum hit
    pub max_hit: u32,
    pub attack_level: i32,
    pub defence_level: i32,
    pub weakened_by: Option<WeakenEffect>,
    /// Spell chosen for the current attack, set by the magic strategy
    pub casting: Option<CombatSpell>,
    /// Ammunition chosen for the current attack, set by the ranged strategy
    pub ammo: Option<RangedAmmo>,
}

impl AutonomousState {
    pub fn new(template: TemplateId, name: impl Into<String>, max_hit: u32) -> Self {
        Self {
            template,
            name: name.into(),
            max_hit,
            attack_level: 1,
            defence_level: 1,
            weakened_by: None,
            casting: None,
            ammo: None,
        }
    }
}

/// Player-controlled vs. autonomous discriminator
#[derive(Debug, Clone)]
pub enum ActorKind {
    Player(PlayerState),
    Autonomous(AutonomousState),
}

/// A combat participant
#[derive(Debug)]
pub struct Actor {
    pub id: ActorId,
    pub kind: ActorKind,
    pub position: Position,
    pub movement: MovementState,
    pub skills: SkillSet,
    pub bonuses: BonusProfile,
    /// Damage contributed to this actor by each attacker (kill credit)
    pub ledger: DamageLedger,
    /// Per-actor engagement state machine
    pub builder: CombatBuilder,
}

impl Actor {
    pub fn player(state: PlayerState) -> Self {
        Self {
            id: ActorId::new(),
            kind: ActorKind::Player(state),
            position: Position::default(),
            movement: MovementState::default(),
            skills: SkillSet::default(),
            bonuses: BonusProfile::default(),
            ledger: DamageLedger::default(),
            builder: CombatBuilder::default(),
        }
    }

    pub fn autonomous(state: AutonomousState) -> Self {
        Self {
            id: ActorId::new(),
            kind: ActorKind::Autonomous(state),
            position: Position::default(),
            movement: MovementState::default(),
            skills: SkillSet::default(),
            bonuses: BonusProfile::default(),
            ledger: DamageLedger::default(),
            builder: CombatBuilder::default(),
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self.kind, ActorKind::Player(_))
    }

    pub fn as_player(&self) -> Option<&PlayerState> {
        match &self.kind {
            ActorKind::Player(state) => Some(state),
            ActorKind::Autonomous(_) => None,
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut PlayerState> {
        match &mut self.kind {
            ActorKind::Player(state) => Some(state),
            ActorKind::Autonomous(_) => None,
        }
    }

    pub fn as_autonomous(&self) -> Option<&AutonomousState> {
        match &self.kind {
            ActorKind::Autonomous(state) => Some(state),
            ActorKind::Player(_) => None,
        }
    }

    pub fn as_autonomous_mut(&mut self) -> Option<&mut AutonomousState> {
        match &mut self.kind {
            ActorKind::Autonomous(state) => Some(state),
            ActorKind::Player(_) => None,
        }
    }

    /// Spell the actor would cast this attack, regardless of kind
    pub fn casting(&self) -> Option<&CombatSpell> {
        match &self.kind {
            ActorKind::Player(state) => state.casting.as_ref(),
            ActorKind::Autonomous(state) => state.casting.as_ref(),
        }
    }

    /// Base attack level for the accuracy roll
    pub fn base_attack(&self, discipline: CombatDiscipline) -> i32 {
        match &self.kind {
            ActorKind::Player(_) => match discipline {
                CombatDiscipline::Melee => self.skills.level(Skill::Attack),
                CombatDiscipline::Ranged => self.skills.level(Skill::Ranged),
                CombatDiscipline::Magic => self.skills.level(Skill::Magic),
            },
            ActorKind::Autonomous(state) => state.attack_level,
        }
    }

    /// Base defence level for the defence roll
    pub fn base_defence(&self, _discipline: CombatDiscipline) -> i32 {
        match &self.kind {
            ActorKind::Player(_) => self.skills.level(Skill::Defence),
            ActorKind::Autonomous(state) => state.defence_level,
        }
    }

    /// Zero vitality means defeated
    pub fn is_defeated(&self) -> bool {
        self.skills.current_vitality() <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_base_attack_follows_discipline() {
        let mut actor = Actor::player(PlayerState::default());
        actor.skills.set_level(Skill::Attack, 60);
        actor.skills.set_level(Skill::Ranged, 40);
        actor.skills.set_level(Skill::Magic, 20);
        assert_eq!(actor.base_attack(CombatDiscipline::Melee), 60);
        assert_eq!(actor.base_attack(CombatDiscipline::Ranged), 40);
        assert_eq!(actor.base_attack(CombatDiscipline::Magic), 20);
    }

    #[test]
    fn test_autonomous_base_levels_come_from_template() {
        let mut state = AutonomousState::new(TemplateId(7), "Cinder Wisp", 4);
        state.attack_level = 15;
        state.defence_level = 12;
        let actor = Actor::autonomous(state);
        assert_eq!(actor.base_attack(CombatDiscipline::Melee), 15);
        assert_eq!(actor.base_defence(CombatDiscipline::Melee), 12);
    }

    #[test]
    fn test_defeated_at_zero_vitality() {
        let mut actor = Actor::player(PlayerState::default());
        assert!(!actor.is_defeated());
        actor.skills.apply_damage(999);
        assert!(actor.is_defeated());
    }
}
