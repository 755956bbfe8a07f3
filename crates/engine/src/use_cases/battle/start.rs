//! Start battle use case.
//!
//! Prepares a hero and an enemy for a new fight. Only state reset happens
//! here; no gameplay logic.

use alliance_domain::{Enemy, Hero};

use super::error::BattleError;

/// Start battle use case.
///
/// Orchestrates: hero full heal, hero battle-state reset, enemy reset.
#[derive(Debug, Default)]
pub struct StartBattle;

impl StartBattle {
    pub fn new() -> Self {
        Self
    }

    /// Execute the start battle use case.
    ///
    /// # Returns
    /// * `Ok(())` - Hero is at full health and the enemy is alive
    /// * `Err(BattleError::InvalidArgument)` - A combatant is missing; nothing
    ///   was mutated
    pub fn execute(
        &self,
        hero: Option<&mut Hero>,
        enemy: Option<&mut Enemy>,
    ) -> Result<(), BattleError> {
        let (hero, enemy) = match (hero, enemy) {
            (Some(hero), Some(enemy)) => (hero, enemy),
            (None, _) => return Err(BattleError::missing("Hero", "StartBattle")),
            (_, None) => return Err(BattleError::missing("Enemy", "StartBattle")),
        };

        hero.heal_full();
        hero.reset_stats();
        enemy.reset_stats();

        tracing::debug!(
            hero_id = %hero.id(),
            hero_health = hero.health(),
            enemy_id = %enemy.id(),
            enemy_health = enemy.health(),
            "Battle initialized"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alliance_domain::{CombatantId, CombatantName, HeroStats};

    fn test_hero() -> Hero {
        Hero::new(
            CombatantId::new("hero-1").unwrap(),
            CombatantName::new("Alliance Hero").unwrap(),
            HeroStats::new(100, 40),
        )
        .unwrap()
    }

    fn test_enemy() -> Enemy {
        Enemy::new(
            CombatantId::new("enemy-1").unwrap(),
            CombatantName::new("Dark Minion").unwrap(),
            100,
        )
        .unwrap()
    }

    #[test]
    fn when_combatants_damaged_restores_both() {
        let mut hero = test_hero();
        let mut enemy = test_enemy();
        hero.take_damage(70);
        enemy.take_damage(100);

        StartBattle::new()
            .execute(Some(&mut hero), Some(&mut enemy))
            .unwrap();

        assert_eq!(hero.health(), hero.max_health());
        assert!(enemy.is_alive());
        assert_eq!(enemy.health(), enemy.max_health());
    }

    #[test]
    fn when_hero_missing_returns_error_and_leaves_enemy_untouched() {
        let mut enemy = test_enemy();
        enemy.take_damage(30);

        let result = StartBattle::new().execute(None, Some(&mut enemy));

        assert!(matches!(result, Err(BattleError::InvalidArgument(_))));
        assert_eq!(enemy.health(), 70);
    }

    #[test]
    fn when_enemy_missing_returns_error() {
        let mut hero = test_hero();
        let result = StartBattle::new().execute(Some(&mut hero), None);
        assert!(matches!(result, Err(BattleError::InvalidArgument(_))));
    }
}
