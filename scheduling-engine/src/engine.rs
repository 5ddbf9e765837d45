use chrono::{Duration, NaiveDate};
use shared::{DomainError, DomainResult};
use std::collections::HashMap;
use uuid::Uuid;

use crate::config::EngineSettings;
use crate::domain::availability::AvailabilityMaterializer;
use crate::domain::entities::{
    Assignment, ConstraintRule, Period, ShiftTemplate, Talent, WeekFrame,
};
use crate::domain::rules::{
    AssignmentRule, ConsecutiveDaysRule, OneShiftPerDayRule, RestRule, WeeklyHoursRule,
};
use crate::domain::schedule_builder::ScheduleBuilder;
use crate::domain::slots::expand_week_slots;
use crate::domain::staffing::StaffingResolver;
use crate::domain::understaffed::{UnderstaffedEntry, UnderstaffedReport};

/// Result of one build: the new assignments plus the staffing shortfall.
/// A non-empty shortfall is still a successful build.
#[derive(Debug, Clone)]
pub struct ScheduleOutcome {
    pub plan: Vec<Assignment>,
    pub understaffed: Vec<UnderstaffedEntry>,
}

/// Facade over the scheduling pipeline: frame, slot expansion, availability
/// materialization, the greedy builder, and the shortfall report.
pub struct ScheduleEngine {
    settings: EngineSettings,
}

impl ScheduleEngine {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    /// Build the draft plan for the week containing `week_anchor`.
    ///
    /// Structural input errors abort before any assignment work; once the
    /// builder runs, shortfalls are reported, never raised.
    #[tracing::instrument(skip_all, fields(week_anchor = %week_anchor))]
    pub fn build(
        &self,
        week_anchor: NaiveDate,
        periods: &[Period],
        templates: &[ShiftTemplate],
        talents: &[Talent],
        constraint_rules: &[ConstraintRule],
        history: &[Assignment],
    ) -> DomainResult<ScheduleOutcome> {
        validate_inputs(periods, templates, talents)?;

        let frame = WeekFrame::from_anchor(week_anchor);
        let resolver =
            StaffingResolver::new(&self.settings.staffing_table, &self.settings.tier_by_day);
        let slots = expand_week_slots(&frame, periods, templates, &resolver)?;

        let availability =
            AvailabilityMaterializer::new(&frame).materialize(talents, constraint_rules);
        let history = trim_history(history, &frame, self.settings.scheduling.history_days);

        tracing::debug!(
            slots = slots.len(),
            talents = talents.len(),
            history = history.len(),
            "inputs assembled"
        );

        let mut builder = ScheduleBuilder::new(
            self.rules(),
            self.settings.scoring,
            self.settings.scheduling.min_rest_hours,
        );
        let plan = builder.generate(&frame, &slots, talents, &availability, &history);

        let understaffed = UnderstaffedReport::new(&slots, &plan).entries();
        if !understaffed.is_empty() {
            tracing::warn!(short_slots = understaffed.len(), "week left understaffed");
        }

        Ok(ScheduleOutcome { plan, understaffed })
    }

    fn rules(&self) -> Vec<Box<dyn AssignmentRule>> {
        let scheduling = &self.settings.scheduling;
        vec![
            Box::new(WeeklyHoursRule::new(scheduling.count_history_in_weekly_hours)),
            Box::new(ConsecutiveDaysRule::new(scheduling.max_consecutive_days)),
            Box::new(RestRule::new(scheduling.min_rest_hours)),
            Box::new(OneShiftPerDayRule::new()),
        ]
    }
}

impl Default for ScheduleEngine {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}

fn validate_inputs(
    periods: &[Period],
    templates: &[ShiftTemplate],
    talents: &[Talent],
) -> DomainResult<()> {
    let periods_by_id: HashMap<Uuid, &Period> =
        periods.iter().map(|period| (period.id, period)).collect();

    for period in periods {
        period.validate()?;
    }
    for template in templates {
        let period = periods_by_id.get(&template.period_id).ok_or_else(|| {
            DomainError::InvalidInput(format!(
                "template {} references unknown period {}",
                template.id, template.period_id
            ))
        })?;
        template.validate_against(period)?;
    }
    for talent in talents {
        talent.validate()?;
    }
    Ok(())
}

/// Keep only assignments inside the consulted history window, strictly before
/// the week being built.
fn trim_history(history: &[Assignment], frame: &WeekFrame, history_days: i64) -> Vec<Assignment> {
    let cutoff = frame.start() - Duration::days(history_days);
    history
        .iter()
        .filter(|a| a.shift.date() >= cutoff && a.shift.date() < frame.start())
        .cloned()
        .collect()
}
