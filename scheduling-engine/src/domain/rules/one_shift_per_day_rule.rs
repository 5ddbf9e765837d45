use super::{AssignmentContext, AssignmentRule};
use chrono::NaiveDate;
use std::collections::HashSet;
use uuid::Uuid;

/// Rule: at most one shift per talent per calendar date.
///
/// Stateful: the builder marks every committed assignment so later slots on
/// the same date see the talent as taken.
#[derive(Default)]
pub struct OneShiftPerDayRule {
    assigned: HashSet<(Uuid, NaiveDate)>,
}

impl OneShiftPerDayRule {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AssignmentRule for OneShiftPerDayRule {
    fn can_assign(&self, context: &AssignmentContext<'_>) -> bool {
        !self
            .assigned
            .contains(&(context.talent_id, context.shift.date()))
    }

    fn mark(&mut self, context: &AssignmentContext<'_>) {
        self.assigned
            .insert((context.talent_id, context.shift.date()));
    }
}
