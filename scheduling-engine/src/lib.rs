//! Weekly staff scheduling engine
//!
//! Ingests a shift-period catalog, per-day staffing demand, a talent roster
//! with availability whitelists, and up to a week of prior history, then
//! emits a draft assignment plan plus an understaffed-shift report. The
//! builder is a deterministic greedy pass, not an optimal solver: structural
//! input errors fail fast, while unfillable slots are reported rather than
//! raised.

pub mod config;
pub mod domain;
pub mod engine;

pub use config::{EngineSettings, SchedulingSettings};
pub use engine::{ScheduleEngine, ScheduleOutcome};
