//! Use ability use case.
//!
//! Deals the hero's ability damage to the enemy. This is only the attack
//! step; rewards and reporting belong to `CompleteBattle`.

use alliance_domain::{Enemy, Hero};

use super::error::BattleError;

#[derive(Debug, Default)]
pub struct UseAbility;

impl UseAbility {
    pub fn new() -> Self {
        Self
    }

    /// Execute the use ability use case.
    ///
    /// # Returns
    /// * `Ok(true)` - The enemy died from this hit
    /// * `Ok(false)` - The enemy survived, or was already dead on entry (no-op)
    /// * `Err(BattleError::InvalidArgument)` - A combatant is missing
    pub fn execute(
        &self,
        hero: Option<&Hero>,
        enemy: Option<&mut Enemy>,
    ) -> Result<bool, BattleError> {
        let hero = hero.ok_or_else(|| BattleError::missing("Hero", "UseAbility"))?;
        let enemy = enemy.ok_or_else(|| BattleError::missing("Enemy", "UseAbility"))?;

        // Dead targets are not hit again.
        if !enemy.is_alive() {
            return Ok(false);
        }

        // Crits, buffs and resistances would modify this amount.
        let damage = hero.ability_damage();
        let outcome = enemy.take_damage(damage);

        tracing::debug!(
            hero_id = %hero.id(),
            enemy_id = %enemy.id(),
            damage_dealt = outcome.damage_dealt(),
            enemy_health = enemy.health(),
            "Ability used"
        );

        Ok(outcome.is_defeat())
    }
}
