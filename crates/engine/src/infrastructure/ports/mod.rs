//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Battle reports (could swap the JSON log client for HTTP)
//! - Logging (could swap tracing for a file or analytics sink)
//! - Clock (for testing)

mod external;
mod testing;

// =============================================================================
// Collaborator Ports
// =============================================================================
pub use external::{BattleReportPort, LogPort};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::{MockBattleReportPort, MockLogPort};

#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;
