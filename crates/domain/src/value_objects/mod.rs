//! Value objects - Immutable objects defined by their attributes

mod health;
mod names;

pub use health::Health;
pub use names::{CombatantId, CombatantName};
