//! Hero aggregate - the player-controlled combatant
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: stats change only through named operations
//! - **Newtypes**: `CombatantId` / `CombatantName` for validated identity
//! - **Shared health rule**: damage goes through `Health`, same as `Enemy`
//! - **Domain events**: mutations return `DamageOutcome` / `ExperienceOutcome`

use crate::error::DomainError;
use crate::events::{DamageOutcome, ExperienceOutcome};
use crate::progression::{
    experience_to_next_level, scale_percent, ABILITY_DAMAGE_GROWTH_PERCENT,
    MAX_HEALTH_GROWTH_PERCENT,
};
use crate::value_objects::{CombatantId, CombatantName, Health};

/// Starting stats for a hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroStats {
    pub level: i32,
    pub max_health: i32,
    pub ability_damage: i32,
}

impl HeroStats {
    pub const DEFAULT_MAX_HEALTH: i32 = 100;
    pub const DEFAULT_ABILITY_DAMAGE: i32 = 30;

    pub fn new(max_health: i32, ability_damage: i32) -> Self {
        Self {
            level: 1,
            max_health,
            ability_damage,
        }
    }

    pub fn with_level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }
}

impl Default for HeroStats {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_HEALTH, Self::DEFAULT_ABILITY_DAMAGE)
    }
}

/// The player's combatant, with leveling and a single fixed-damage ability.
///
/// # Invariants
///
/// - `level >= 1` and never decreases
/// - `0 <= experience < experience_to_next_level(level)` between calls
/// - `0 <= health <= max_health`, `max_health > 0`
/// - `ability_damage > 0`
///
/// # Example
///
/// ```
/// use alliance_domain::aggregates::{Hero, HeroStats};
/// use alliance_domain::value_objects::{CombatantId, CombatantName};
///
/// let hero = Hero::new(
///     CombatantId::new("hero-1").unwrap(),
///     CombatantName::new("Alliance Hero").unwrap(),
///     HeroStats::new(100, 40),
/// )
/// .unwrap();
///
/// assert_eq!(hero.level(), 1);
/// assert_eq!(hero.health(), 100);
/// assert_eq!(hero.ability_damage(), 40);
/// ```
#[derive(Debug, Clone)]
pub struct Hero {
    // Identity
    id: CombatantId,
    name: CombatantName,

    // Progression
    level: i32,
    experience: i32,

    // Combat stats
    health: Health,
    ability_damage: i32,
}

impl Hero {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a hero at full health with no banked experience.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if `level`, `max_health` or
    /// `ability_damage` is not positive. No hero is produced in that case.
    pub fn new(
        id: CombatantId,
        name: CombatantName,
        stats: HeroStats,
    ) -> Result<Self, DomainError> {
        if stats.level < 1 {
            return Err(DomainError::invalid_argument(format!(
                "Hero level must be at least 1, got {}",
                stats.level
            )));
        }
        if stats.ability_damage <= 0 {
            return Err(DomainError::invalid_argument(format!(
                "Hero ability damage must be positive, got {}",
                stats.ability_damage
            )));
        }
        let health = Health::new(stats.max_health)?;

        Ok(Self {
            id,
            name,
            level: stats.level,
            experience: 0,
            health,
            ability_damage: stats.ability_damage,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> &CombatantId {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &CombatantName {
        &self.name
    }

    #[inline]
    pub fn level(&self) -> i32 {
        self.level
    }

    /// Experience banked toward the next level.
    #[inline]
    pub fn experience(&self) -> i32 {
        self.experience
    }

    #[inline]
    pub fn health(&self) -> i32 {
        self.health.current()
    }

    #[inline]
    pub fn max_health(&self) -> i32 {
        self.health.max()
    }

    #[inline]
    pub fn ability_damage(&self) -> i32 {
        self.ability_damage
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health.is_alive()
    }

    /// Experience needed to leave the current level.
    pub fn experience_to_next_level(&self) -> i32 {
        experience_to_next_level(self.level)
    }

    // =========================================================================
    // Combat Mutations
    // =========================================================================

    /// Apply damage. Health never drops below zero; amounts <= 0 are ignored.
    pub fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        self.health.take_damage(amount)
    }

    /// Fully restore health to `max_health`.
    pub fn heal_full(&mut self) {
        self.health.heal_full();
    }

    /// Clear battle-scoped state before a new fight.
    ///
    /// Heroes carry no temporary modifiers yet, so this only restores health.
    pub fn reset_stats(&mut self) {
        self.health.heal_full();
    }

    // =========================================================================
    // Progression
    // =========================================================================

    /// Bank experience and apply every level-up it pays for.
    ///
    /// A single grant may cross several thresholds; each one scales max
    /// health and ability damage and heals the hero fully.
    ///
    /// # Example
    ///
    /// ```
    /// use alliance_domain::aggregates::{Hero, HeroStats};
    /// use alliance_domain::value_objects::{CombatantId, CombatantName};
    /// use alliance_domain::ExperienceOutcome;
    ///
    /// let mut hero = Hero::new(
    ///     CombatantId::new("hero-1").unwrap(),
    ///     CombatantName::new("Alliance Hero").unwrap(),
    ///     HeroStats::new(100, 40),
    /// )
    /// .unwrap();
    ///
    /// let outcome = hero.add_experience(250);
    /// assert_eq!(
    ///     outcome,
    ///     ExperienceOutcome::LeveledUp { from_level: 1, to_level: 2, experience: 150 }
    /// );
    /// assert_eq!(hero.max_health(), 110);
    /// ```
    pub fn add_experience(&mut self, amount: i32) -> ExperienceOutcome {
        if amount <= 0 {
            return ExperienceOutcome::Ignored;
        }

        let from_level = self.level;
        // Banked + granted can exceed i32::MAX; only the remainder must fit.
        let mut experience = i64::from(self.experience) + i64::from(amount);

        while experience >= i64::from(self.experience_to_next_level()) {
            experience -= i64::from(self.experience_to_next_level());
            self.level_up();
        }
        self.experience = i32::try_from(experience).unwrap_or(i32::MAX);

        if self.level > from_level {
            ExperienceOutcome::LeveledUp {
                from_level,
                to_level: self.level,
                experience: self.experience,
            }
        } else {
            ExperienceOutcome::Gained {
                experience: self.experience,
            }
        }
    }

    fn level_up(&mut self) {
        self.level = self.level.saturating_add(1);
        self.health
            .set_max(scale_percent(self.health.max(), MAX_HEALTH_GROWTH_PERCENT));
        self.ability_damage = scale_percent(self.ability_damage, ABILITY_DAMAGE_GROWTH_PERCENT);
        self.health.heal_full();
    }
}

// ============================================================================
// Tests
// ============================================================================
