//! Actor registry

use ahash::AHashMap;

use crate::actor::Actor;
use crate::core::error::{CombatError, Result};
use crate::core::types::{ActorId, Position};

/// All live actors, keyed by id
#[derive(Debug, Default)]
pub struct ActorRegistry {
    actors: AHashMap<ActorId, Actor>,
}

impl ActorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, actor: Actor) -> ActorId {
        let id = actor.id;
        self.actors.insert(id, actor);
        id
    }

    pub fn get(&self, id: ActorId) -> Result<&Actor> {
        self.actors.get(&id).ok_or(CombatError::ActorNotFound(id))
    }

    pub fn get_mut(&mut self, id: ActorId) -> Result<&mut Actor> {
        self.actors
            .get_mut(&id)
            .ok_or(CombatError::ActorNotFound(id))
    }

    pub fn remove(&mut self, id: ActorId) -> Option<Actor> {
        self.actors.remove(&id)
    }

    pub fn contains(&self, id: ActorId) -> bool {
        self.actors.contains_key(&id)
    }

    /// Disjoint mutable borrow of two distinct actors (attacker and victim).
    /// Returns `None` when either is missing or the ids coincide.
    pub fn pair_mut(&mut self, a: ActorId, b: ActorId) -> Option<(&mut Actor, &mut Actor)> {
        if a == b {
            return None;
        }
        let [first, second] = self.actors.get_disjoint_mut([&a, &b]);
        Some((first?, second?))
    }

    pub fn ids(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.actors.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Ids of all actors within `radius` tiles of `center`
    pub fn nearby(&self, center: Position, radius: u32) -> Vec<ActorId> {
        self.actors
            .values()
            .filter(|a| a.position.within_distance(&center, radius))
            .map(|a| a.id)
            .collect()
    }

    /// Player-controlled actors within `radius` tiles of `center`
    pub fn players_nearby(&self, center: Position, radius: u32) -> Vec<ActorId> {
        self.actors
            .values()
            .filter(|a| a.is_player() && a.position.within_distance(&center, radius))
            .map(|a| a.id)
            .collect()
    }

    /// Autonomous actors within `radius` tiles of `center`
    pub fn autonomous_nearby(&self, center: Position, radius: u32) -> Vec<ActorId> {
        self.actors
            .values()
            .filter(|a| !a.is_player() && a.position.within_distance(&center, radius))
            .map(|a| a.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::PlayerState;

    #[test]
    fn test_lookup_failure_is_an_error() {
        let registry = ActorRegistry::new();
        assert!(matches!(
            registry.get(ActorId::new()),
            Err(CombatError::ActorNotFound(_))
        ));
    }

    #[test]
    fn test_pair_mut_rejects_same_id() {
        let mut registry = ActorRegistry::new();
        let id = registry.spawn(Actor::player(PlayerState::default()));
        assert!(registry.pair_mut(id, id).is_none());
    }

    #[test]
    fn test_pair_mut_borrows_both() {
        let mut registry = ActorRegistry::new();
        let a = registry.spawn(Actor::player(PlayerState::default()));
        let b = registry.spawn(Actor::player(PlayerState::default()));
        let (first, second) = registry.pair_mut(a, b).unwrap();
        assert_eq!(first.id, a);
        assert_eq!(second.id, b);
    }

    #[test]
    fn test_nearby_filters_by_distance_and_kind() {
        let mut registry = ActorRegistry::new();
        let mut close = Actor::player(PlayerState::default());
        close.position = Position::new(1, 1);
        let mut far = Actor::player(PlayerState::default());
        far.position = Position::new(20, 20);
        let close_id = registry.spawn(close);
        registry.spawn(far);

        let found = registry.players_nearby(Position::new(0, 0), 5);
        assert_eq!(found, vec![close_id]);
        assert!(registry
            .autonomous_nearby(Position::new(0, 0), 5)
            .is_empty());
    }
}
