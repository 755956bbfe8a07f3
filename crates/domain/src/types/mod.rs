//! Battle vocabulary shared by the domain and the engine
//!
//! Pure data types: no I/O, no side effects. Both are serializable because
//! the report travels to whatever transport the report sink uses.

mod battle_report;
mod battle_result;

pub use battle_report::BattleReport;
pub use battle_result::BattleResult;
