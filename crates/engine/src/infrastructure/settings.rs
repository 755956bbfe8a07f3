//! Battle configuration loaded from the environment.
//!
//! Every value has a default, so an empty environment yields the standard
//! demo matchup (Alliance Hero vs Dark Minion).

use serde::{Deserialize, Serialize};

use alliance_domain::{CombatantId, CombatantName, DomainError, Enemy, Hero, HeroStats};

pub const HERO_ID_VAR: &str = "ALLIANCE_HERO_ID";
pub const HERO_NAME_VAR: &str = "ALLIANCE_HERO_NAME";
pub const HERO_MAX_HEALTH_VAR: &str = "ALLIANCE_HERO_MAX_HEALTH";
pub const HERO_ABILITY_DAMAGE_VAR: &str = "ALLIANCE_HERO_ABILITY_DAMAGE";
pub const ENEMY_ID_VAR: &str = "ALLIANCE_ENEMY_ID";
pub const ENEMY_NAME_VAR: &str = "ALLIANCE_ENEMY_NAME";
pub const ENEMY_MAX_HEALTH_VAR: &str = "ALLIANCE_ENEMY_MAX_HEALTH";
pub const WIN_EXPERIENCE_VAR: &str = "ALLIANCE_WIN_EXPERIENCE";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Invalid value for {key}: {value:?} is not an integer")]
    InvalidValue { key: &'static str, value: String },
}

/// Combatant setup and reward tuning for a battle session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleSettings {
    pub hero_id: String,
    pub hero_name: String,
    pub hero_max_health: i32,
    pub hero_ability_damage: i32,
    pub enemy_id: String,
    pub enemy_name: String,
    pub enemy_max_health: i32,
    pub win_experience_reward: i32,
}

impl Default for BattleSettings {
    fn default() -> Self {
        Self {
            hero_id: "hero-1".to_string(),
            hero_name: "Alliance Hero".to_string(),
            hero_max_health: 100,
            hero_ability_damage: 40,
            enemy_id: "enemy-1".to_string(),
            enemy_name: "Dark Minion".to_string(),
            enemy_max_health: Enemy::DEFAULT_MAX_HEALTH,
            win_experience_reward: 100,
        }
    }
}

impl BattleSettings {
    /// Load settings from process environment variables.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings from an arbitrary key lookup.
    ///
    /// Missing or blank keys fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let get_int = |key: &'static str, default: i32| match get(key) {
            Some(raw) => raw
                .parse::<i32>()
                .map_err(|_| SettingsError::InvalidValue { key, value: raw }),
            None => Ok(default),
        };

        Ok(Self {
            hero_id: get(HERO_ID_VAR).unwrap_or(defaults.hero_id),
            hero_name: get(HERO_NAME_VAR).unwrap_or(defaults.hero_name),
            hero_max_health: get_int(HERO_MAX_HEALTH_VAR, defaults.hero_max_health)?,
            hero_ability_damage: get_int(HERO_ABILITY_DAMAGE_VAR, defaults.hero_ability_damage)?,
            enemy_id: get(ENEMY_ID_VAR).unwrap_or(defaults.enemy_id),
            enemy_name: get(ENEMY_NAME_VAR).unwrap_or(defaults.enemy_name),
            enemy_max_health: get_int(ENEMY_MAX_HEALTH_VAR, defaults.enemy_max_health)?,
            win_experience_reward: get_int(WIN_EXPERIENCE_VAR, defaults.win_experience_reward)?,
        })
    }

    /// Build a fresh level-1 hero from these settings.
    pub fn create_hero(&self) -> Result<Hero, DomainError> {
        Hero::new(
            CombatantId::new(self.hero_id.as_str())?,
            CombatantName::new(self.hero_name.as_str())?,
            HeroStats::new(self.hero_max_health, self.hero_ability_damage),
        )
    }

    /// Build a fresh enemy from these settings.
    pub fn create_enemy(&self) -> Result<Enemy, DomainError> {
        Enemy::new(
            CombatantId::new(self.enemy_id.as_str())?,
            CombatantName::new(self.enemy_name.as_str())?,
            self.enemy_max_health,
        )
    }
}
