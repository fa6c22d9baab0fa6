pub mod error;
pub mod rng;
pub mod types;

pub use error::{CombatError, Result};
pub use rng::SharedRng;
pub use types::{ActorId, Position, TemplateId, Tick};
