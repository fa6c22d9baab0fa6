use thiserror::Error;

use crate::combat::ranged::WeaponCategory;
use crate::core::types::ActorId;

#[derive(Error, Debug)]
pub enum CombatError {
    #[error("Actor not found: {0:?}")]
    ActorNotFound(ActorId),

    #[error("No ranged distance mapped for weapon category: {0:?}")]
    UnmappedWeaponCategory(WeaponCategory),

    #[error("No ammunition equipped for ranged attack")]
    NoAmmunition,

    #[error("Ammunition {0:?} cannot be fired from {1:?}")]
    IncompatibleAmmunition(crate::combat::ranged::AmmoKind, WeaponCategory),

    #[error("No spell selected for magic attack")]
    NoSpellSelected,

    #[error("Actor {0:?} has no active engagement")]
    NotEngaged(ActorId),
}

pub type Result<T> = std::result::Result<T, CombatError>;
