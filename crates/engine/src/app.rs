//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    ports::{BattleReportPort, ClockPort, LogPort},
    settings::BattleSettings,
};
use crate::use_cases::battle::{BattleSession, CompleteBattle, StartBattle, UseAbility};
use crate::use_cases::BattleUseCases;

/// Main application state.
///
/// Holds the battle use cases wired to their ports, plus the settings every
/// new session is created from.
pub struct App {
    pub settings: BattleSettings,
    pub use_cases: Arc<BattleUseCases>,
    clock: Arc<dyn ClockPort>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        settings: BattleSettings,
        report_port: Arc<dyn BattleReportPort>,
        log: Arc<dyn LogPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let complete = CompleteBattle::new(report_port, log)
            .with_win_experience_reward(settings.win_experience_reward);

        let use_cases = Arc::new(BattleUseCases::new(
            Arc::new(StartBattle::new()),
            Arc::new(UseAbility::new()),
            Arc::new(complete),
        ));

        Self {
            settings,
            use_cases,
            clock,
        }
    }

    /// Create an unstarted session sharing this app's use cases.
    pub fn new_session(&self) -> BattleSession {
        BattleSession::new(
            self.settings.clone(),
            self.use_cases.clone(),
            self.clock.clone(),
        )
    }
}
