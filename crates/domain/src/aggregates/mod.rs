//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Has a caller-supplied identity
//! - Keeps its fields private and mutates only through named operations
//! - Returns domain events from mutations
//!
//! Heroes and enemies share one `Health` value object, so the damage rule is
//! written once.

pub mod enemy;
pub mod hero;

pub use enemy::Enemy;
pub use hero::{Hero, HeroStats};
