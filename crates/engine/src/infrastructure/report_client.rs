//! Battle report transports.
//!
//! There is no backend yet: `JsonReportClient` serializes the report and logs
//! the request it would send. `RecordingReportClient` keeps reports in memory.

use std::sync::Mutex;

use alliance_domain::BattleReport;

use crate::infrastructure::ports::BattleReportPort;

/// Endpoint the report would be posted to.
pub const BATTLE_REPORT_ENDPOINT: &str = "/battle/report";

/// Logs each report as the JSON body of a `POST /battle/report`.
pub struct JsonReportClient {
    endpoint: String,
}

impl JsonReportClient {
    pub fn new() -> Self {
        Self {
            endpoint: BATTLE_REPORT_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The request body that would be sent for `report`.
    pub fn payload(report: &BattleReport) -> Result<String, serde_json::Error> {
        serde_json::to_string(report)
    }
}

impl Default for JsonReportClient {
    fn default() -> Self {
        Self::new()
    }
}

impl BattleReportPort for JsonReportClient {
    fn send_battle_report(&self, report: &BattleReport) {
        match Self::payload(report) {
            Ok(json) => {
                tracing::info!(
                    endpoint = %self.endpoint,
                    hero_id = %report.hero_id(),
                    result = %report.result(),
                    "[NETWORK MOCK] POST {} payload={}",
                    self.endpoint,
                    json
                );
            }
            Err(e) => {
                // Fire-and-forget: a report that cannot be encoded is dropped.
                tracing::warn!(error = %e, "Failed to serialize battle report");
            }
        }
    }
}

/// Keeps every report it receives, in order.
#[derive(Default)]
pub struct RecordingReportClient {
    reports: Mutex<Vec<BattleReport>>,
}

impl RecordingReportClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports received so far.
    pub fn reports(&self) -> Vec<BattleReport> {
        self.reports
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn last(&self) -> Option<BattleReport> {
        self.reports
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .last()
            .cloned()
    }
}

impl BattleReportPort for RecordingReportClient {
    fn send_battle_report(&self, report: &BattleReport) {
        self.reports
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(report.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alliance_domain::{
        BattleResult, CombatantId, CombatantName, Enemy, Hero, HeroStats,
    };

    fn report(result: BattleResult) -> BattleReport {
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
        BattleReport::snapshot(&hero, &enemy, result)
    }

    #[test]
    fn payload_is_the_report_json() {
        let json = JsonReportClient::payload(&report(BattleResult::Lose)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["heroId"], "hero-1");
        assert_eq!(value["enemyRemainingHealth"], 100);
        assert_eq!(value["result"], 2);
    }

    #[test]
    fn json_client_accepts_reports_without_subscriber() {
        let client = JsonReportClient::new().with_endpoint("/test/report");
        client.send_battle_report(&report(BattleResult::Win));
    }

    #[test]
    fn recording_client_keeps_reports_in_order() {
        let client = RecordingReportClient::new();
        assert!(client.last().is_none());

        client.send_battle_report(&report(BattleResult::Win));
        client.send_battle_report(&report(BattleResult::Lose));

        let reports = client.reports();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].result(), BattleResult::Win);
        assert_eq!(client.last().unwrap().result(), BattleResult::Lose);
    }
}
