//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod clock;
pub mod log_service;
pub mod ports;
pub mod report_client;
pub mod settings;
