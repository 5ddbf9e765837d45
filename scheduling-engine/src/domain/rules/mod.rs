pub mod consecutive_days_rule;
pub mod one_shift_per_day_rule;
pub mod rest_rule;
pub mod weekly_hours_rule;

use crate::domain::entities::{Assignment, ShiftSpec, TalentAvailability, WeekFrame};
use std::collections::HashMap;
use uuid::Uuid;

pub use consecutive_days_rule::ConsecutiveDaysRule;
pub use one_shift_per_day_rule::OneShiftPerDayRule;
pub use rest_rule::RestRule;
pub use weekly_hours_rule::WeeklyHoursRule;

/// Shared view handed to every rule when judging one candidate assignment.
pub struct AssignmentContext<'a> {
    pub talent_id: Uuid,
    pub shift: &'a ShiftSpec,
    pub availability: &'a HashMap<Uuid, TalentAvailability>,
    pub assignments: &'a [Assignment],
    pub frame: &'a WeekFrame,
}

pub trait AssignmentRule {
    /// Whether the candidate assignment passes this rule.
    fn can_assign(&self, context: &AssignmentContext<'_>) -> bool;

    /// Commit hook. Rules that carry state across commits override this; the
    /// builder calls it once per committed assignment.
    fn mark(&mut self, _context: &AssignmentContext<'_>) {}
}

pub(crate) fn worked_on(
    context: &AssignmentContext<'_>,
    date: chrono::NaiveDate,
) -> bool {
    context
        .assignments
        .iter()
        .any(|a| a.talent_id == context.talent_id && a.shift.date() == date)
}
