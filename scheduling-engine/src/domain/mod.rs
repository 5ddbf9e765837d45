pub mod availability;
pub mod eligibility;
pub mod entities;
pub mod round_robin;
pub mod rules;
pub mod schedule_builder;
pub mod scoring;
pub mod slots;
pub mod staffing;
pub mod understaffed;
