//! Surgical-readiness scoring, general health risk and assessment reporting.

pub mod assessment;
pub mod config;
pub mod error;
pub mod profile;
pub mod surgical;
pub mod telemetry;
