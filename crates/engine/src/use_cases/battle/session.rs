//! Battle session - owns one Hero/Enemy pair and drives the use cases.
//!
//! The session is the caller the battle core expects: it initializes once,
//! runs one `UseAbility` per player action and completes the battle exactly
//! once when a side goes down. Presentation layers subscribe through
//! `BattleListener` instead of the core calling them.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use alliance_domain::{BattleResult, BattleSessionId, Enemy, ExperienceOutcome, Hero};

use super::error::SessionError;
use super::BattleUseCases;
use crate::infrastructure::ports::ClockPort;
use crate::infrastructure::settings::BattleSettings;

/// Notifications raised by a `BattleSession` after it calls into the core.
///
/// Every method has a no-op default so listeners implement only what they
/// care about.
#[cfg_attr(test, mockall::automock)]
pub trait BattleListener: Send + Sync {
    /// The player used the ability (raised once per accepted action).
    fn on_ability_used(&self, _enemy_died: bool) {}

    /// The battle reached a final result.
    fn on_battle_completed(&self, _result: BattleResult) {}

    /// The win reward raised the hero's level.
    fn on_level_up(&self, _from_level: i32, _to_level: i32) {}
}

/// Result of a player action in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbilityOutcome {
    /// Battle already finished or enemy already down; nothing happened
    Ignored,
    /// The ability landed; `result` is `None` unless this hit ended the battle
    Hit {
        enemy_died: bool,
        result: BattleResult,
    },
}

pub struct BattleSession {
    id: BattleSessionId,
    settings: BattleSettings,
    use_cases: Arc<BattleUseCases>,
    clock: Arc<dyn ClockPort>,
    listeners: Vec<Arc<dyn BattleListener>>,

    // Created by `start`; absent until then.
    hero: Option<Hero>,
    enemy: Option<Enemy>,

    finished: bool,
    last_result: BattleResult,
    started_at: Option<DateTime<Utc>>,
}

impl BattleSession {
    pub fn new(
        settings: BattleSettings,
        use_cases: Arc<BattleUseCases>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            id: BattleSessionId::new(),
            settings,
            use_cases,
            clock,
            listeners: Vec::new(),
            hero: None,
            enemy: None,
            finished: false,
            last_result: BattleResult::None,
            started_at: None,
        }
    }

    pub fn add_listener(&mut self, listener: Arc<dyn BattleListener>) {
        self.listeners.push(listener);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> BattleSessionId {
        self.id
    }

    pub fn settings(&self) -> &BattleSettings {
        &self.settings
    }

    pub fn hero(&self) -> Option<&Hero> {
        self.hero.as_ref()
    }

    pub fn enemy(&self) -> Option<&Enemy> {
        self.enemy.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Result of the last completed battle (`None` while one is in progress).
    pub fn last_result(&self) -> BattleResult {
        self.last_result
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Create fresh combatants from the settings and initialize the battle.
    ///
    /// # Errors
    ///
    /// `SessionError::Domain` if the settings describe an invalid combatant.
    /// The previous combatants are kept in that case.
    pub fn start(&mut self) -> Result<(), SessionError> {
        let hero = self.settings.create_hero()?;
        let enemy = self.settings.create_enemy()?;
        self.hero = Some(hero);
        self.enemy = Some(enemy);

        self.finished = false;
        self.last_result = BattleResult::None;
        self.use_cases
            .start
            .execute(self.hero.as_mut(), self.enemy.as_mut())?;
        self.started_at = Some(self.clock.now());

        tracing::info!(
            session_id = %self.id,
            hero_id = %self.settings.hero_id,
            enemy_id = %self.settings.enemy_id,
            "Battle session started"
        );
        Ok(())
    }

    /// Throw the current combatants away and start over.
    ///
    /// Progression is not carried across: the new hero starts at level 1.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.start()?;
        tracing::info!(session_id = %self.id, "Battle reset complete, ready for new session");
        Ok(())
    }

    // =========================================================================
    // Player Actions
    // =========================================================================

    /// Handle one press of the ability button.
    ///
    /// When the hit ends the battle, `CompleteBattle` runs right away and the
    /// session stops accepting actions until `reset`.
    pub fn use_ability(&mut self) -> Result<AbilityOutcome, SessionError> {
        if self.finished {
            return Ok(AbilityOutcome::Ignored);
        }

        let (Some(hero), Some(enemy)) = (self.hero.as_mut(), self.enemy.as_mut()) else {
            return Err(SessionError::NotStarted);
        };
        if !enemy.is_alive() {
            return Ok(AbilityOutcome::Ignored);
        }

        let enemy_died = self
            .use_cases
            .use_ability
            .execute(Some(&*hero), Some(&mut *enemy))?;

        for listener in &self.listeners {
            listener.on_ability_used(enemy_died);
        }

        if !enemy_died && hero.is_alive() {
            return Ok(AbilityOutcome::Hit {
                enemy_died,
                result: BattleResult::None,
            });
        }

        let completion = self
            .use_cases
            .complete
            .execute_detailed(Some(hero), Some(&*enemy));
        self.finished = true;
        self.last_result = completion.result;

        tracing::info!(
            session_id = %self.id,
            result = %completion.result,
            "Battle finished"
        );

        for listener in &self.listeners {
            listener.on_battle_completed(completion.result);
        }
        if let ExperienceOutcome::LeveledUp {
            from_level,
            to_level,
            ..
        } = completion.experience
        {
            for listener in &self.listeners {
                listener.on_level_up(from_level, to_level);
            }
        }

        Ok(AbilityOutcome::Hit {
            enemy_died,
            result: completion.result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::MockLogPort;
    use crate::infrastructure::report_client::RecordingReportClient;
    use crate::use_cases::battle::{CompleteBattle, StartBattle, UseAbility};

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn create_session(
        settings: BattleSettings,
        reports: Arc<RecordingReportClient>,
    ) -> BattleSession {
        let mut log = MockLogPort::new();
        log.expect_info().returning(|_| ());
        log.expect_error().never();

        let complete = CompleteBattle::new(reports, Arc::new(log))
            .with_win_experience_reward(settings.win_experience_reward);
        let use_cases = Arc::new(BattleUseCases::new(
            Arc::new(StartBattle::new()),
            Arc::new(UseAbility::new()),
            Arc::new(complete),
        ));
        BattleSession::new(settings, use_cases, Arc::new(FixedClock(fixed_now())))
    }

    #[test]
    fn use_ability_before_start_is_an_error() {
        let mut session = create_session(
            BattleSettings::default(),
            Arc::new(RecordingReportClient::new()),
        );
        assert!(matches!(
            session.use_ability(),
            Err(SessionError::NotStarted)
        ));
    }

    #[test]
    fn start_creates_fresh_combatants() {
        let mut session = create_session(
            BattleSettings::default(),
            Arc::new(RecordingReportClient::new()),
        );
        session.start().unwrap();

        let hero = session.hero().unwrap();
        let enemy = session.enemy().unwrap();
        assert_eq!(hero.health(), hero.max_health());
        assert!(enemy.is_alive());
        assert!(!session.is_finished());
        assert_eq!(session.started_at(), Some(fixed_now()));
    }

    #[test]
    fn invalid_settings_fail_to_start() {
        let settings = BattleSettings {
            enemy_max_health: 0,
            ..BattleSettings::default()
        };
        let mut session = create_session(settings, Arc::new(RecordingReportClient::new()));

        assert!(matches!(session.start(), Err(SessionError::Domain(_))));
        assert!(session.hero().is_none());
    }

    #[test]
    fn full_battle_wins_on_third_hit_and_notifies_listeners() {
        let reports = Arc::new(RecordingReportClient::new());
        let mut session = create_session(BattleSettings::default(), reports.clone());

        let mut listener = MockBattleListener::new();
        listener.expect_on_ability_used().times(3).returning(|_| ());
        listener
            .expect_on_battle_completed()
            .withf(|result| *result == BattleResult::Win)
            .times(1)
            .returning(|_| ());
        listener
            .expect_on_level_up()
            .withf(|from, to| *from == 1 && *to == 2)
            .times(1)
            .returning(|_, _| ());
        session.add_listener(Arc::new(listener));

        session.start().unwrap();

        assert_eq!(
            session.use_ability().unwrap(),
            AbilityOutcome::Hit {
                enemy_died: false,
                result: BattleResult::None
            }
        );
        assert_eq!(session.enemy().unwrap().health(), 60);
        session.use_ability().unwrap();
        assert_eq!(session.enemy().unwrap().health(), 20);
        assert_eq!(
            session.use_ability().unwrap(),
            AbilityOutcome::Hit {
                enemy_died: true,
                result: BattleResult::Win
            }
        );

        assert!(session.is_finished());
        assert_eq!(session.last_result(), BattleResult::Win);

        let hero = session.hero().unwrap();
        assert_eq!(hero.level(), 2);
        assert_eq!(hero.max_health(), 110);
        assert_eq!(hero.ability_damage(), 42);
        assert_eq!(hero.health(), 110);

        let report = reports.last().unwrap();
        assert_eq!(report.hero_level(), 2);
        assert_eq!(report.result(), BattleResult::Win);
    }

    #[test]
    fn actions_after_battle_end_are_ignored() {
        let reports = Arc::new(RecordingReportClient::new());
        let mut session = create_session(BattleSettings::default(), reports.clone());
        session.start().unwrap();

        while !session.is_finished() {
            session.use_ability().unwrap();
        }

        assert_eq!(session.use_ability().unwrap(), AbilityOutcome::Ignored);
        assert_eq!(reports.reports().len(), 1);
    }

    #[test]
    fn reset_starts_a_new_battle_from_settings() {
        let reports = Arc::new(RecordingReportClient::new());
        let mut session = create_session(BattleSettings::default(), reports.clone());
        session.start().unwrap();
        while !session.is_finished() {
            session.use_ability().unwrap();
        }

        session.reset().unwrap();

        assert!(!session.is_finished());
        assert_eq!(session.last_result(), BattleResult::None);
        assert_eq!(session.hero().unwrap().level(), 1);
        assert_eq!(session.enemy().unwrap().health(), 100);
        assert!(matches!(
            session.use_ability().unwrap(),
            AbilityOutcome::Hit { .. }
        ));
    }

    #[test]
    fn single_hit_kill_completes_immediately() {
        let settings = BattleSettings {
            enemy_max_health: 10,
            ..BattleSettings::default()
        };
        let reports = Arc::new(RecordingReportClient::new());
        let mut session = create_session(settings, reports.clone());
        session.start().unwrap();

        let outcome = session.use_ability().unwrap();

        assert_eq!(
            outcome,
            AbilityOutcome::Hit {
                enemy_died: true,
                result: BattleResult::Win
            }
        );
        assert_eq!(reports.reports().len(), 1);
    }
}
