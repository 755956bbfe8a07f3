//! Battle report snapshot handed to the report sink

use serde::{Deserialize, Serialize};

use crate::aggregates::{Enemy, Hero};
use crate::types::BattleResult;
use crate::value_objects::CombatantId;

/// Immutable snapshot of a finished battle.
///
/// Built once the outcome is final (after any reward was applied) and never
/// mutated afterwards. Field order matches the report payload:
/// `heroId, heroLevel, heroRemainingHealth, enemyId, enemyRemainingHealth, result`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleReport {
    hero_id: CombatantId,
    hero_level: i32,
    hero_remaining_health: i32,
    enemy_id: CombatantId,
    enemy_remaining_health: i32,
    result: BattleResult,
}

impl BattleReport {
    /// Snapshot the current state of both combatants.
    pub fn snapshot(hero: &Hero, enemy: &Enemy, result: BattleResult) -> Self {
        Self {
            hero_id: hero.id().clone(),
            hero_level: hero.level(),
            hero_remaining_health: hero.health(),
            enemy_id: enemy.id().clone(),
            enemy_remaining_health: enemy.health(),
            result,
        }
    }

    pub fn hero_id(&self) -> &CombatantId {
        &self.hero_id
    }

    pub fn hero_level(&self) -> i32 {
        self.hero_level
    }

    pub fn hero_remaining_health(&self) -> i32 {
        self.hero_remaining_health
    }

    pub fn enemy_id(&self) -> &CombatantId {
        &self.enemy_id
    }

    pub fn enemy_remaining_health(&self) -> i32 {
        self.enemy_remaining_health
    }

    pub fn result(&self) -> BattleResult {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates::HeroStats;
    use crate::value_objects::CombatantName;

    fn combatants() -> (Hero, Enemy) {
        let hero = Hero::new(
            CombatantId::new("hero-1").unwrap(),
            CombatantName::new("Alliance Hero").unwrap(),
            HeroStats::new(100, 40),
        )
        .unwrap();
        let enemy = Enemy::new(
            CombatantId::new("enemy-1").unwrap(),
            CombatantName::new("Dark Minion").unwrap(),
            100,
        )
        .unwrap();
        (hero, enemy)
    }

    #[test]
    fn snapshot_copies_current_state() {
        let (mut hero, mut enemy) = combatants();
        hero.take_damage(15);
        enemy.take_damage(100);

        let report = BattleReport::snapshot(&hero, &enemy, BattleResult::Win);

        assert_eq!(report.hero_id().as_str(), "hero-1");
        assert_eq!(report.hero_level(), 1);
        assert_eq!(report.hero_remaining_health(), 85);
        assert_eq!(report.enemy_id().as_str(), "enemy-1");
        assert_eq!(report.enemy_remaining_health(), 0);
        assert_eq!(report.result(), BattleResult::Win);
    }

    #[test]
    fn snapshot_is_unaffected_by_later_mutation() {
        let (mut hero, enemy) = combatants();
        let report = BattleReport::snapshot(&hero, &enemy, BattleResult::Lose);
        hero.take_damage(50);
        assert_eq!(report.hero_remaining_health(), 100);
    }

    #[test]
    fn payload_uses_camel_case_fields_in_order() {
        let (hero, mut enemy) = combatants();
        enemy.take_damage(100);
        let report = BattleReport::snapshot(&hero, &enemy, BattleResult::Win);

        let json = serde_json::to_string(&report).unwrap();

        assert_eq!(
            json,
            r#"{"heroId":"hero-1","heroLevel":1,"heroRemainingHealth":100,"enemyId":"enemy-1","enemyRemainingHealth":0,"result":1}"#
        );
    }
}
