//! Battle use case errors.

use alliance_domain::DomainError;

/// Errors that can occur while starting or fighting a battle.
#[derive(Debug, thiserror::Error)]
pub enum BattleError {
    /// A required combatant was not supplied
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl BattleError {
    pub(crate) fn missing(what: &str, operation: &str) -> Self {
        Self::InvalidArgument(format!("{} reference is missing in {}", what, operation))
    }
}

/// Errors surfaced by a `BattleSession`.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Battle session has not been started")]
    NotStarted,
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("Battle error: {0}")]
    Battle(#[from] BattleError),
}
