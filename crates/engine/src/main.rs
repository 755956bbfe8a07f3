//! Alliance battle demo - Main entry point.
//!
//! Runs one battle with the configured combatants, then the "continue" flow:
//! reset and fight again.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use alliance_domain::BattleResult;
use alliance_engine::infrastructure::{
    clock::SystemClock, log_service::TracingLogService, report_client::JsonReportClient,
    settings::BattleSettings,
};
use alliance_engine::use_cases::battle::{BattleListener, BattleSession};
use alliance_engine::App;

/// Presentation stand-in: narrates session notifications to the log.
struct ConsoleListener;

impl BattleListener for ConsoleListener {
    fn on_ability_used(&self, enemy_died: bool) {
        tracing::info!(enemy_died, "Ability used");
    }

    fn on_battle_completed(&self, result: BattleResult) {
        match result {
            BattleResult::Win => tracing::info!("VICTORY"),
            BattleResult::Lose => tracing::info!("DEFEAT"),
            _ => {}
        }
    }

    fn on_level_up(&self, from_level: i32, to_level: i32) {
        tracing::info!(from_level, to_level, "Hero leveled up");
    }
}

fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may be run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alliance_engine=debug,alliance=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Alliance battle demo");

    // Load configuration
    let settings = BattleSettings::from_env()?;
    tracing::debug!(settings = %serde_json::to_string(&settings)?, "Loaded battle settings");

    // Create application
    let app = App::new(
        settings,
        Arc::new(JsonReportClient::new()),
        Arc::new(TracingLogService::new()),
        Arc::new(SystemClock::new()),
    );

    let mut session = app.new_session();
    session.add_listener(Arc::new(ConsoleListener));

    session.start()?;
    run_to_completion(&mut session)?;

    // Victory screen "continue": fresh combatants from the same settings.
    session.reset()?;
    run_to_completion(&mut session)?;

    tracing::info!(session_id = %session.id(), "Demo finished");
    Ok(())
}

/// Press the ability button until the battle is decided.
fn run_to_completion(session: &mut BattleSession) -> anyhow::Result<()> {
    while !session.is_finished() {
        session.use_ability()?;
        if let Some(enemy) = session.enemy() {
            tracing::debug!(
                enemy = %enemy.name(),
                health = enemy.health(),
                max_health = enemy.max_health(),
                "Enemy health"
            );
        }
    }

    if let Some(hero) = session.hero() {
        tracing::info!(
            result = %session.last_result(),
            hero_level = hero.level(),
            hero_health = hero.health(),
            hero_experience = hero.experience(),
            next_level_at = hero.experience_to_next_level(),
            "Battle over"
        );
    }
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
