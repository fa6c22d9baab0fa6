//! Damage ledger - per-victim record of who dealt what
//!
//! Every attacker targeting the same victim writes here concurrently, so the
//! map sits behind the victim's own mutex: contention stays isolated per
//! victim and additive updates are never lost. Totals are advisory, used for
//! experience split and kill credit, never for life-critical decisions.

use std::sync::Mutex;

use ahash::AHashMap;

use crate::combat::constants::LEDGER_TIMEOUT_TICKS;
use crate::core::types::{ActorId, Tick};

#[derive(Debug, Clone, Copy)]
struct DamageEntry {
    total: u32,
    last_tick: Tick,
}

impl DamageEntry {
    fn expired(&self, now: Tick) -> bool {
        now.saturating_sub(self.last_tick) > LEDGER_TIMEOUT_TICKS
    }
}

/// Per-victim damage contributions, keyed by attacker
#[derive(Debug, Default)]
pub struct DamageLedger {
    entries: Mutex<AHashMap<ActorId, DamageEntry>>,
}

impl DamageLedger {
    /// Record damage from `attacker`; zero contributions are ignored.
    /// Expired entries are pruned lazily here rather than by a sweeper.
    pub fn add(&self, attacker: ActorId, amount: u32, now: Tick) {
        if amount == 0 {
            return;
        }
        let mut entries = self.entries.lock().unwrap();
        entries.retain(|_, e| !e.expired(now));
        entries
            .entry(attacker)
            .and_modify(|e| {
                e.total += amount;
                e.last_tick = now;
            })
            .or_insert(DamageEntry {
                total: amount,
                last_tick: now,
            });
    }

    /// Totals per attacker within the credit window
    pub fn snapshot(&self, now: Tick) -> AHashMap<ActorId, u32> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, e)| !e.expired(now))
            .map(|(id, e)| (*id, e.total))
            .collect()
    }

    /// Attacker with the highest live total, for kill credit
    pub fn top_contributor(&self, now: Tick) -> Option<ActorId> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, e)| !e.expired(now))
            .max_by_key(|(_, e)| e.total)
            .map(|(id, _)| *id)
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}
