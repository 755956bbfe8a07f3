//! Complete battle use case.
//!
//! Classifies the battle state, applies the win reward and reports the
//! outcome. Called at most once per battle, after a termination condition is
//! observed.

use std::sync::Arc;

use alliance_domain::{BattleReport, BattleResult, Enemy, ExperienceOutcome, Hero};

use crate::infrastructure::ports::{BattleReportPort, LogPort};

/// Everything `CompleteBattle` did in one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleCompletion {
    pub result: BattleResult,
    /// Reward applied to the hero (`Ignored` unless the result is `Win`)
    pub experience: ExperienceOutcome,
    /// Report handed to the report port, if the battle was decided
    pub report: Option<BattleReport>,
}

impl BattleCompletion {
    fn undecided() -> Self {
        Self {
            result: BattleResult::None,
            experience: ExperienceOutcome::Ignored,
            report: None,
        }
    }
}

/// Complete battle use case.
///
/// Orchestrates: outcome resolution, experience reward on a win, log entry,
/// report delivery.
pub struct CompleteBattle {
    report_port: Arc<dyn BattleReportPort>,
    log: Arc<dyn LogPort>,
    win_experience_reward: i32,
}

impl CompleteBattle {
    pub const DEFAULT_WIN_EXPERIENCE_REWARD: i32 = 100;

    pub fn new(report_port: Arc<dyn BattleReportPort>, log: Arc<dyn LogPort>) -> Self {
        Self {
            report_port,
            log,
            win_experience_reward: Self::DEFAULT_WIN_EXPERIENCE_REWARD,
        }
    }

    /// Override the experience granted on a win.
    pub fn with_win_experience_reward(mut self, reward: i32) -> Self {
        self.win_experience_reward = reward;
        self
    }

    pub fn win_experience_reward(&self) -> i32 {
        self.win_experience_reward
    }

    /// Classify the battle without side effects.
    ///
    /// Precedence is fixed: a fallen hero facing a living enemy is `Lose`; a
    /// dead enemy is otherwise `Win`. When both are down at once, the `Lose`
    /// check runs first and wins the tie.
    pub fn resolve(hero: &Hero, enemy: &Enemy) -> BattleResult {
        if enemy.is_alive() && hero.health() <= 0 {
            BattleResult::Lose
        } else if !enemy.is_alive() {
            BattleResult::Win
        } else {
            BattleResult::None
        }
    }

    /// Execute the complete battle use case.
    ///
    /// Never fails: a missing combatant is logged as an error and yields
    /// `BattleResult::None`.
    pub fn execute(&self, hero: Option<&mut Hero>, enemy: Option<&Enemy>) -> BattleResult {
        self.execute_detailed(hero, enemy).result
    }

    /// Same as `execute`, also returning the reward and the report sent.
    pub fn execute_detailed(
        &self,
        hero: Option<&mut Hero>,
        enemy: Option<&Enemy>,
    ) -> BattleCompletion {
        let (Some(hero), Some(enemy)) = (hero, enemy) else {
            self.log
                .error("CompleteBattle.execute called with missing hero or enemy.");
            return BattleCompletion::undecided();
        };

        let result = Self::resolve(hero, enemy);
        if !result.is_decided() {
            return BattleCompletion::undecided();
        }

        // Reward first so the report reflects any level-ups.
        let experience = if result == BattleResult::Win {
            hero.add_experience(self.win_experience_reward)
        } else {
            ExperienceOutcome::Ignored
        };

        self.log.info(&format!(
            "Battle completed. Result={}, Hero={}, Enemy={}",
            result,
            hero.id(),
            enemy.id()
        ));

        let report = BattleReport::snapshot(hero, enemy, result);
        self.report_port.send_battle_report(&report);

        BattleCompletion {
            result,
            experience,
            report: Some(report),
        }
    }
}
