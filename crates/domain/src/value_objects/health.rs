//! Health pool shared by every combatant kind
//!
//! Damage is applied here and only here, so heroes and enemies cannot drift
//! apart in how they clamp.

use crate::error::DomainError;
use crate::events::DamageOutcome;

/// Current and maximum health of a combatant.
///
/// # Invariants
///
/// - `max > 0`
/// - `0 <= current <= max`
///
/// # Example
///
/// ```
/// use alliance_domain::value_objects::Health;
/// use alliance_domain::DamageOutcome;
///
/// let mut health = Health::new(100).unwrap();
/// assert_eq!(health.take_damage(40), DamageOutcome::Wounded { damage_dealt: 40, remaining_health: 60 });
/// assert_eq!(health.take_damage(-5), DamageOutcome::Ignored);
/// assert_eq!(health.current(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    current: i32,
    max: i32,
}

impl Health {
    /// Create a full health pool.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if `max` is not positive.
    pub fn new(max: i32) -> Result<Self, DomainError> {
        if max <= 0 {
            return Err(DomainError::invalid_argument(format!(
                "Max health must be positive, got {}",
                max
            )));
        }
        Ok(Self { current: max, max })
    }

    #[inline]
    pub fn current(&self) -> i32 {
        self.current
    }

    #[inline]
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Returns true while there is health left.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.current == self.max
    }

    /// Apply damage, clamping at zero.
    ///
    /// Amounts of zero or less are ignored rather than treated as healing.
    pub fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        if amount <= 0 {
            return DamageOutcome::Ignored;
        }
        if self.current == 0 {
            return DamageOutcome::AlreadyDefeated;
        }

        let damage_dealt = amount.min(self.current);
        self.current -= damage_dealt;

        if self.current == 0 {
            DamageOutcome::Defeated { damage_dealt }
        } else {
            DamageOutcome::Wounded {
                damage_dealt,
                remaining_health: self.current,
            }
        }
    }

    /// Restore health to the maximum.
    pub fn heal_full(&mut self) {
        self.current = self.max;
    }

    /// Replace the maximum, keeping `current` within the new bound.
    pub(crate) fn set_max(&mut self, max: i32) {
        self.max = max.max(1);
        self.current = self.current.min(self.max);
    }
}
