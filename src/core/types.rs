//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for actors (players and autonomous creatures alike)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub Uuid);

impl ActorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifier for an autonomous actor template (creature archetype)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub u32);

/// Game tick counter (simulation time unit)
pub type Tick = u64;

/// Tile position on the world grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev tile distance (diagonal steps count as one)
    pub fn distance(&self, other: &Self) -> u32 {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dx.max(dy) as u32
    }

    /// Whether `other` lies within `radius` tiles of this position
    pub fn within_distance(&self, other: &Self, radius: u32) -> bool {
        self.distance(other) <= radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_id_uniqueness() {
        let a = ActorId::new();
        let b = ActorId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_chebyshev_distance() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.distance(&Position::new(3, 1)), 3);
        assert_eq!(origin.distance(&Position::new(-2, -2)), 2);
        assert_eq!(origin.distance(&origin), 0);
    }

    #[test]
    fn test_within_distance_is_inclusive() {
        let a = Position::new(0, 0);
        let b = Position::new(4, 4);
        assert!(a.within_distance(&b, 4));
        assert!(!a.within_distance(&b, 3));
    }
}
