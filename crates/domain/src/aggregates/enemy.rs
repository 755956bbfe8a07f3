//! Enemy aggregate - the scripted opponent
//!
//! Same shape as `Hero` minus progression: identity plus a `Health` pool.

use crate::error::DomainError;
use crate::events::DamageOutcome;
use crate::value_objects::{CombatantId, CombatantName, Health};

/// The opposing combatant.
///
/// # Invariants
///
/// - `0 <= health <= max_health`, `max_health > 0`
///
/// # Example
///
/// ```
/// use alliance_domain::aggregates::Enemy;
/// use alliance_domain::value_objects::{CombatantId, CombatantName};
///
/// let mut enemy = Enemy::new(
///     CombatantId::new("enemy-1").unwrap(),
///     CombatantName::new("Dark Minion").unwrap(),
///     100,
/// )
/// .unwrap();
///
/// enemy.take_damage(120);
/// assert_eq!(enemy.health(), 0);
/// assert!(!enemy.is_alive());
/// ```
#[derive(Debug, Clone)]
pub struct Enemy {
    id: CombatantId,
    name: CombatantName,
    health: Health,
}

impl Enemy {
    pub const DEFAULT_MAX_HEALTH: i32 = 100;

    /// Create an enemy at full health.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if `max_health` is not positive.
    pub fn new(
        id: CombatantId,
        name: CombatantName,
        max_health: i32,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name,
            health: Health::new(max_health)?,
        })
    }

    #[inline]
    pub fn id(&self) -> &CombatantId {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &CombatantName {
        &self.name
    }

    #[inline]
    pub fn health(&self) -> i32 {
        self.health.current()
    }

    #[inline]
    pub fn max_health(&self) -> i32 {
        self.health.max()
    }

    /// True while `health > 0`.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health.is_alive()
    }

    /// Apply damage. Health never drops below zero; amounts <= 0 are ignored.
    pub fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        self.health.take_damage(amount)
    }

    pub fn heal_full(&mut self) {
        self.health.heal_full();
    }

    /// Return to a fresh, fightable state (full health).
    pub fn reset_stats(&mut self) {
        self.health.heal_full();
    }
}
