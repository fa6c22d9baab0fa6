//! Optional narration of computed rolls and chances
//!
//! The resolver reports intermediate values through this observer so debug
//! tooling can surface them. Observers must never alter outcomes; the no-op
//! implementation is the production default.

/// Sink for intermediate combat values
pub trait CombatObserver {
    fn accuracy_roll(&self, _attack: f64, _defence: f64, _chance: f64) {}
    fn max_hit(&self, _value: u32) {}
    fn protection_reduced(&self, _before: u32, _after: u32) {}
    fn protection_cancel_roll(&self, _roll: f64, _threshold: f64) {}
    fn protection_bypassed(&self) {}
}

/// Production default: narrates nothing
pub struct NoopObserver;

impl CombatObserver for NoopObserver {}

/// Emits every value at debug level via `tracing`
pub struct TracingObserver;

impl CombatObserver for TracingObserver {
    fn accuracy_roll(&self, attack: f64, defence: f64, chance: f64) {
        tracing::debug!(attack, defence, chance, "accuracy roll");
    }

    fn max_hit(&self, value: u32) {
        tracing::debug!(value, "maximum hit this turn");
    }

    fn protection_reduced(&self, before: u32, after: u32) {
        tracing::debug!(reduced_by = before - after, "damage reduced by protection prayer");
    }

    fn protection_cancel_roll(&self, roll: f64, threshold: f64) {
        tracing::debug!(roll, threshold, "protection cancel roll");
    }

    fn protection_bypassed(&self) {
        tracing::debug!("protection prayer bypassed by warded set");
    }
}
