//! World registry - the actor table combat looks actors up in
//!
//! Victims are referenced by [`ActorId`] rather than borrowed directly, so a
//! dead or despawned actor shows up as a lookup failure instead of a dangling
//! reference.

pub mod registry;

pub use registry::ActorRegistry;
