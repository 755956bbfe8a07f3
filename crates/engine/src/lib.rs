//! Alliance battle engine library.
//!
//! ## Structure
//!
//! - `use_cases/` - Battle orchestration (start, ability, completion, session)
//! - `infrastructure/` - Ports and their adapters (report sink, log sink, clock, settings)
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
