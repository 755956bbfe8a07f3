//! Alliance battle domain.
//!
//! Combatants (`Hero`, `Enemy`), the shared health rule, hero progression and
//! the battle outcome vocabulary. Everything here is synchronous and mutates
//! only the values it is handed.

pub mod aggregates;
pub mod error;
pub mod events;
pub mod ids;
pub mod progression;
pub mod types;
pub mod value_objects;

pub use aggregates::{Enemy, Hero, HeroStats};
pub use error::DomainError;
pub use events::{DamageOutcome, ExperienceOutcome};
pub use ids::BattleSessionId;
pub use progression::experience_to_next_level;
pub use types::{BattleReport, BattleResult};
pub use value_objects::{CombatantId, CombatantName, Health};
