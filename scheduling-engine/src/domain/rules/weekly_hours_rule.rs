use super::{AssignmentContext, AssignmentRule};

/// Rule: a talent's scheduled hours must stay within their weekly ceiling.
pub struct WeeklyHoursRule {
    count_history: bool,
}

impl WeeklyHoursRule {
    /// `count_history` controls whether assignments outside the current week
    /// frame (i.e. carried-in history) eat into the ceiling. Off by default
    /// so returning talents are not locked out by last week's hours.
    pub fn new(count_history: bool) -> Self {
        Self { count_history }
    }

    fn hours_in_scope(&self, context: &AssignmentContext<'_>) -> f64 {
        context
            .assignments
            .iter()
            .filter(|a| a.talent_id == context.talent_id)
            .filter(|a| self.count_history || context.frame.contains(a.shift.date()))
            .map(|a| a.shift.duration_hours())
            .sum()
    }
}

impl AssignmentRule for WeeklyHoursRule {
    fn can_assign(&self, context: &AssignmentContext<'_>) -> bool {
        let Some(avail) = context.availability.get(&context.talent_id) else {
            return false;
        };
        self.hours_in_scope(context) + context.shift.duration_hours() <= avail.weekly_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Assignment, ShiftSpec, Talent, TalentAvailability, WeekFrame};
    use crate::domain::availability::AvailabilityMaterializer;
    use chrono::{Duration, NaiveDate, Weekday};
    use shared::{Role, ShiftName};
    use std::collections::HashMap;
    use uuid::Uuid;

    fn frame() -> WeekFrame {
        WeekFrame::from_anchor(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
    }

    fn spec_on(date: NaiveDate, hours: i64) -> ShiftSpec {
        let (start, _) = ShiftName::Am.window();
        ShiftSpec {
            template_id: Uuid::nil(),
            start_time: date.and_time(start),
            end_time: date.and_time(start) + Duration::hours(hours),
            shift_name: ShiftName::Am,
            role: Role::Server,
            required_count: 1,
        }
    }

    fn assignment(talent_id: Uuid, spec: ShiftSpec) -> Assignment {
        Assignment::new(talent_id, format!("slot-{}", spec.date()), spec)
    }

    fn availability_for(talent_id: Uuid, weekly_hours: f64) -> HashMap<Uuid, TalentAvailability> {
        let frame = frame();
        let talent = Talent::new(talent_id, Role::Server, weekly_hours, false);
        AvailabilityMaterializer::new(&frame).materialize(&[talent], &[])
    }

    #[test]
    fn test_exceeding_ceiling_is_rejected() {
        let frame = frame();
        let talent_id = Uuid::new_v4();
        let availability = availability_for(talent_id, 40.0);

        // 36 hours already scheduled this week.
        let existing: Vec<Assignment> = (0..4)
            .map(|i| assignment(talent_id, spec_on(frame.start() + Duration::days(i), 9)))
            .collect();
        let shift = spec_on(frame.start() + Duration::days(5), 8);

        let rule = WeeklyHoursRule::new(false);
        let context = AssignmentContext {
            talent_id,
            shift: &shift,
            availability: &availability,
            assignments: &existing,
            frame: &frame,
        };
        assert!(!rule.can_assign(&context));
    }

    #[test]
    fn test_exact_fit_is_allowed() {
        let frame = frame();
        let talent_id = Uuid::new_v4();
        let availability = availability_for(talent_id, 40.0);

        let existing = vec![assignment(
            talent_id,
            spec_on(frame.date_of(Weekday::Mon), 20),
        )];
        let shift = spec_on(frame.date_of(Weekday::Wed), 20);

        let rule = WeeklyHoursRule::new(false);
        let context = AssignmentContext {
            talent_id,
            shift: &shift,
            availability: &availability,
            assignments: &existing,
            frame: &frame,
        };
        assert!(rule.can_assign(&context));
    }

    #[test]
    fn test_history_outside_frame_is_excluded() {
        let frame = frame();
        let talent_id = Uuid::new_v4();
        let availability = availability_for(talent_id, 40.0);

        // 36 hours last week must not count against this week's ceiling.
        let history: Vec<Assignment> = (1..5)
            .map(|i| assignment(talent_id, spec_on(frame.start() - Duration::days(i), 9)))
            .collect();
        let shift = spec_on(frame.date_of(Weekday::Tue), 8);

        let rule = WeeklyHoursRule::new(false);
        let context = AssignmentContext {
            talent_id,
            shift: &shift,
            availability: &availability,
            assignments: &history,
            frame: &frame,
        };
        assert!(rule.can_assign(&context));

        // Legacy mode counts it and rejects.
        let legacy = WeeklyHoursRule::new(true);
        assert!(!legacy.can_assign(&context));
    }
}
