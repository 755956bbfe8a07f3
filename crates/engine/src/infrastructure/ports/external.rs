//! Collaborator ports the battle core reports through.
//!
//! Both are implemented by the embedding application and composed in `App`.
//! The core never observes success or failure of either call.

use alliance_domain::BattleReport;

/// Receives finished battle reports.
///
/// Fire-and-forget: the core does not retry. A transport that wants retries
/// owns them.
#[cfg_attr(test, mockall::automock)]
pub trait BattleReportPort: Send + Sync {
    fn send_battle_report(&self, report: &BattleReport);
}

/// Diagnostic log sink used by the use cases.
#[cfg_attr(test, mockall::automock)]
pub trait LogPort: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}
