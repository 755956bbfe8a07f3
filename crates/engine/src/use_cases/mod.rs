//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases orchestrate across domain aggregates and ports.

pub mod battle;

pub use battle::BattleUseCases;
