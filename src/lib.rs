//! Emberclash - combat resolution core for a persistent multiplayer world

pub mod actor;
pub mod combat;
pub mod core;
pub mod world;
