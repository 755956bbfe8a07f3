//! Battle outcome classification

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// High-level summary of a battle outcome.
///
/// On the wire the result is its integer code (`None = 0`, `Win = 1`,
/// `Lose = 2`). The enum is non-exhaustive so a draw/timeout variant can be
/// added later without breaking downstream matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[non_exhaustive]
pub enum BattleResult {
    /// Battle not decided yet
    #[default]
    None,
    /// Hero defeated the enemy
    Win,
    /// Hero reached zero health while the enemy was still standing
    Lose,
}

impl BattleResult {
    /// Integer code used in battle reports.
    pub fn code(self) -> u8 {
        match self {
            BattleResult::None => 0,
            BattleResult::Win => 1,
            BattleResult::Lose => 2,
        }
    }

    /// True for `Win` and `Lose`.
    pub fn is_decided(self) -> bool {
        !matches!(self, BattleResult::None)
    }
}

impl fmt::Display for BattleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleResult::None => write!(f, "None"),
            BattleResult::Win => write!(f, "Win"),
            BattleResult::Lose => write!(f, "Lose"),
        }
    }
}

impl TryFrom<u8> for BattleResult {
    type Error = DomainError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(BattleResult::None),
            1 => Ok(BattleResult::Win),
            2 => Ok(BattleResult::Lose),
            other => Err(DomainError::invalid_argument(format!(
                "Unknown battle result code: {}",
                other
            ))),
        }
    }
}

impl From<BattleResult> for u8 {
    fn from(result: BattleResult) -> u8 {
        result.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(BattleResult::None.code(), 0);
        assert_eq!(BattleResult::Win.code(), 1);
        assert_eq!(BattleResult::Lose.code(), 2);
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert!(BattleResult::try_from(3).is_err());
        assert!(serde_json::from_str::<BattleResult>("7").is_err());
    }

    #[test]
    fn serializes_as_integer() {
        assert_eq!(serde_json::to_string(&BattleResult::Lose).unwrap(), "2");
        let parsed: BattleResult = serde_json::from_str("1").unwrap();
        assert_eq!(parsed, BattleResult::Win);
    }

    #[test]
    fn default_is_undecided() {
        assert_eq!(BattleResult::default(), BattleResult::None);
        assert!(!BattleResult::None.is_decided());
        assert!(BattleResult::Win.is_decided());
    }
}
