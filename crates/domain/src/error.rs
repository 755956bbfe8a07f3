//! Error types for the battle domain
//!
//! The core has a single error kind: a required value was missing or did not
//! satisfy an entity invariant. Non-positive damage and experience amounts are
//! not errors; the entities treat them as no-ops.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required argument was missing or violated a construction invariant
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    /// Creates an invalid argument error.
    ///
    /// Use this when an entity cannot be constructed from the given values:
    /// - Identity strings are empty
    /// - Stat magnitudes (max health, ability damage, level) are not positive
    ///
    /// # Example
    /// ```ignore
    /// if max_health <= 0 {
    ///     return Err(DomainError::invalid_argument("Max health must be positive"));
    /// }
    /// ```
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
