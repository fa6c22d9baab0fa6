//! Combat resolution
//!
//! Accuracy and damage rolls, prayer and set-effect modifiers, discipline
//! strategies, the per-actor engagement state machine, damage attribution,
//! experience payout, and area dispatch.

pub mod area;
pub mod bonuses;
pub mod builder;
pub mod constants;
pub mod discipline;
pub mod experience;
pub mod hit;
pub mod ledger;
pub mod modifiers;
pub mod narrate;
pub mod prayer;
pub mod ranged;
pub mod resolver;
pub mod session;
pub mod sets;
pub mod special;
pub mod spells;
pub mod strategy;
pub mod styles;

pub use area::apply_area_damage;
pub use builder::{advance_engagement, engage, within_attack_range, CombatBuilder};
pub use discipline::CombatDiscipline;
pub use hit::CombatHit;
pub use ledger::DamageLedger;
pub use narrate::{CombatObserver, NoopObserver, TracingObserver};
pub use session::{resolve_attack, CombatSession};
pub use strategy::{strategy_for_player, CombatStrategy, SessionPlan, StrategyRegistry};
