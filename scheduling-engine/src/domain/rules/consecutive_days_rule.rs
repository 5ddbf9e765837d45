use super::{worked_on, AssignmentContext, AssignmentRule};
use chrono::Duration;

/// Rule: a talent must not be scheduled past the consecutive-day ceiling.
///
/// The whole run of worked days through the candidate date is counted, in
/// both directions: slots are filled in scarcity order, so the candidate day
/// may bridge two already-committed runs.
pub struct ConsecutiveDaysRule {
    max_consecutive_days: u32,
}

impl ConsecutiveDaysRule {
    pub fn new(max_consecutive_days: u32) -> Self {
        Self {
            max_consecutive_days,
        }
    }
}

impl AssignmentRule for ConsecutiveDaysRule {
    fn can_assign(&self, context: &AssignmentContext<'_>) -> bool {
        // The candidate day itself.
        let mut chain = 1;

        let mut day = context.shift.date();
        while worked_on(context, day - Duration::days(1)) {
            chain += 1;
            if chain > self.max_consecutive_days {
                return false;
            }
            day -= Duration::days(1);
        }

        let mut day = context.shift.date();
        while worked_on(context, day + Duration::days(1)) {
            chain += 1;
            if chain > self.max_consecutive_days {
                return false;
            }
            day += Duration::days(1);
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Assignment, ShiftSpec, WeekFrame};
    use chrono::NaiveDate;
    use shared::{Role, ShiftName};
    use std::collections::HashMap;
    use uuid::Uuid;

    fn am_spec_on(date: NaiveDate) -> ShiftSpec {
        let (start, end) = ShiftName::Am.window();
        ShiftSpec {
            template_id: Uuid::nil(),
            start_time: date.and_time(start),
            end_time: date.and_time(end),
            shift_name: ShiftName::Am,
            role: Role::Server,
            required_count: 1,
        }
    }

    fn worked_days(talent_id: Uuid, current: NaiveDate, offsets: &[i64]) -> Vec<Assignment> {
        offsets
            .iter()
            .map(|offset| {
                let spec = am_spec_on(current + Duration::days(*offset));
                Assignment::new(talent_id, format!("slot-{}", spec.date()), spec)
            })
            .collect()
    }

    fn check(offsets: &[i64]) -> bool {
        let frame = WeekFrame::from_anchor(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        let talent_id = Uuid::new_v4();
        let current = frame.date_of(chrono::Weekday::Wed);
        let assignments = worked_days(talent_id, current, offsets);
        let availability = HashMap::new();
        let shift = am_spec_on(current);

        let rule = ConsecutiveDaysRule::new(6);
        rule.can_assign(&AssignmentContext {
            talent_id,
            shift: &shift,
            availability: &availability,
            assignments: &assignments,
            frame: &frame,
        })
    }

    #[test]
    fn test_seventh_consecutive_day_is_rejected() {
        assert!(!check(&[-6, -5, -4, -3, -2, -1]));
    }

    #[test]
    fn test_sixth_consecutive_day_is_allowed() {
        assert!(check(&[-5, -4, -3, -2, -1]));
    }

    #[test]
    fn test_gap_resets_the_streak() {
        // Six of the prior seven days worked, but with a rest day between.
        assert!(check(&[-7, -6, -5, -3, -2, -1]));
    }

    #[test]
    fn test_bridging_two_runs_counts_the_whole_chain() {
        // Three worked days on each side; the candidate would be day seven.
        assert!(!check(&[-3, -2, -1, 1, 2, 3]));
        // One fewer behind leaves a legal six-day run.
        assert!(check(&[-2, -1, 1, 2, 3]));
    }
}
