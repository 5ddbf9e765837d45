use super::{AssignmentContext, AssignmentRule};
use chrono::{Duration, NaiveDateTime};

/// Rule: a minimum rest gap must separate shifts on adjacent dates.
///
/// Checked in both directions: slots are filled in scarcity order, not date
/// order, so the neighbouring day's shift may already sit on either side of
/// the candidate.
pub struct RestRule {
    min_rest_hours: i64,
}

impl RestRule {
    pub fn new(min_rest_hours: i64) -> Self {
        Self { min_rest_hours }
    }

    /// End time of the talent's shift on the day before the candidate shift.
    fn yesterday_end_time(context: &AssignmentContext<'_>) -> Option<NaiveDateTime> {
        let yesterday = context.shift.date() - Duration::days(1);
        context
            .assignments
            .iter()
            .find(|a| a.talent_id == context.talent_id && a.shift.date() == yesterday)
            .map(|a| a.shift.end_time)
    }

    /// Start time of the talent's shift on the day after the candidate shift.
    fn tomorrow_start_time(context: &AssignmentContext<'_>) -> Option<NaiveDateTime> {
        let tomorrow = context.shift.date() + Duration::days(1);
        context
            .assignments
            .iter()
            .find(|a| a.talent_id == context.talent_id && a.shift.date() == tomorrow)
            .map(|a| a.shift.start_time)
    }
}

impl AssignmentRule for RestRule {
    fn can_assign(&self, context: &AssignmentContext<'_>) -> bool {
        let min_rest = Duration::hours(self.min_rest_hours);

        if let Some(end) = Self::yesterday_end_time(context) {
            if context.shift.start_time - end < min_rest {
                return false;
            }
        }
        if let Some(start) = Self::tomorrow_start_time(context) {
            if start - context.shift.end_time < min_rest {
                return false;
            }
        }
        true
    }
}
