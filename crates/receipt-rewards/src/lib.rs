//! Receipt rewards service: validates submitted purchase receipts, scores
//! them against a fixed loyalty rule set, and serves the resulting points
//! over HTTP.

pub mod config;
pub mod error;
pub mod processing;
pub mod telemetry;
