//! Movement flags combat reads from the movement system
//!
//! Combat never drives movement; it only inspects these flags for the
//! catch-up leniency in the attack range check.

use serde::{Deserialize, Serialize};

/// Read-only view of an actor's movement state
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MovementState {
    /// Has the current movement step finished?
    pub done: bool,
    /// Is the actor running (fleeing when disengaging)?
    pub running: bool,
    /// Is movement locked by a script or cutscene?
    pub locked: bool,
    /// Is the actor frozen by a status effect?
    pub frozen: bool,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            done: true,
            running: false,
            locked: false,
            frozen: false,
        }
    }
}

impl MovementState {
    /// Mid-step and free to chase
    pub fn chasing(&self) -> bool {
        !self.done && !self.locked && !self.frozen
    }
}
