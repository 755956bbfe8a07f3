//! Battle use cases.
//!
//! Handles one Hero vs Enemy encounter:
//! - Initializing both combatants for a fresh battle
//! - Applying the hero's ability to the enemy
//! - Resolving the result, rewarding a win and reporting the outcome
//!
//! `BattleSession` is the caller that drives these in order.

use std::sync::Arc;

mod complete;
mod error;
mod session;
mod start;
mod use_ability;

pub use complete::{BattleCompletion, CompleteBattle};
pub use error::{BattleError, SessionError};
pub use session::{AbilityOutcome, BattleListener, BattleSession};
pub use start::StartBattle;
pub use use_ability::UseAbility;

#[cfg(test)]
pub use session::MockBattleListener;

/// Container for battle use cases.
pub struct BattleUseCases {
    pub start: Arc<StartBattle>,
    pub use_ability: Arc<UseAbility>,
    pub complete: Arc<CompleteBattle>,
}

impl BattleUseCases {
    pub fn new(
        start: Arc<StartBattle>,
        use_ability: Arc<UseAbility>,
        complete: Arc<CompleteBattle>,
    ) -> Self {
        Self {
            start,
            use_ability,
            complete,
        }
    }
}
