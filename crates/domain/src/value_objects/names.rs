//! Validated identity newtypes for combatants
//!
//! These newtypes ensure that identities are valid by construction:
//! - Non-empty after trimming
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

// ============================================================================
// CombatantId
// ============================================================================

/// A validated combatant identifier (non-empty, trimmed)
///
/// Ids are supplied by the embedding application (e.g. `"hero-1"`) and are
/// copied verbatim into battle reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CombatantId(String);

impl CombatantId {
    /// Create a new validated combatant id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if the id is empty after trimming.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_argument("Combatant id cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CombatantId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CombatantId> for String {
    fn from(id: CombatantId) -> String {
        id.0
    }
}

// ============================================================================
// CombatantName
// ============================================================================

/// A validated combatant display name (non-empty, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CombatantName(String);

impl CombatantName {
    /// Create a new validated combatant name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if the name is empty after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_argument(
                "Combatant name cannot be empty",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CombatantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CombatantName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CombatantName> for String {
    fn from(name: CombatantName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod combatant_id {
        use super::*;

        #[test]
        fn valid_id_is_trimmed() {
            let id = CombatantId::new("  hero-1  ").unwrap();
            assert_eq!(id.as_str(), "hero-1");
        }

        #[test]
        fn empty_id_is_rejected() {
            let result = CombatantId::new("");
            assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
        }

        #[test]
        fn whitespace_only_id_is_rejected() {
            assert!(CombatantId::new("   ").is_err());
        }

        #[test]
        fn deserialize_rejects_empty_id() {
            let result: Result<CombatantId, _> = serde_json::from_str("\"\"");
            assert!(result.is_err());
        }

        #[test]
        fn serializes_as_plain_string() {
            let id = CombatantId::new("enemy-1").unwrap();
            assert_eq!(serde_json::to_string(&id).unwrap(), "\"enemy-1\"");
        }
    }

    mod combatant_name {
        use super::*;

        #[test]
        fn valid_name() {
            let name = CombatantName::new("Dark Minion").unwrap();
            assert_eq!(name.as_str(), "Dark Minion");
            assert_eq!(name.to_string(), "Dark Minion");
        }

        #[test]
        fn empty_name_is_rejected() {
            assert!(matches!(
                CombatantName::new(""),
                Err(DomainError::InvalidArgument(_))
            ));
        }
    }
}
