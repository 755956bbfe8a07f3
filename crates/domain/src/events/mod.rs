//! Domain Events
//!
//! Return types from aggregate mutations, communicating what happened when
//! state was modified. The engine maps them to listener notifications.

pub mod combat_events;

pub use combat_events::*;
