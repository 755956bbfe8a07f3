//! `LogPort` backed by `tracing`.

use crate::infrastructure::ports::LogPort;

/// Forwards use-case log messages to the `tracing` subscriber.
///
/// Messages are emitted under the `alliance::battle` target so they can be
/// filtered independently from the engine's own structured events.
pub struct TracingLogService;

impl TracingLogService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingLogService {
    fn default() -> Self {
        Self::new()
    }
}

impl LogPort for TracingLogService {
    fn info(&self, message: &str) {
        tracing::info!(target: "alliance::battle", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "alliance::battle", "{}", message);
    }
}
