use chrono::{NaiveDate, Weekday};
use scheduling_engine::domain::entities::{
    Assignment, ConstraintKind, ConstraintRule, Period, ShiftSpec, ShiftTemplate, Talent,
};
use shared::{Role, ShiftName};
use uuid::Uuid;

/// 2025-06-15, a Sunday. Every scenario builds the week starting here.
pub fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

/// A period carrying one full-window template per role. Ids are derived from
/// the shift name so repeated fixture builds are identical.
pub fn period_with_templates(shift_name: ShiftName, roles: &[Role]) -> (Period, Vec<ShiftTemplate>) {
    let period = Period::canonical(stable_id(shift_name as u128 + 1), shift_name);
    let templates = roles
        .iter()
        .enumerate()
        .map(|(i, role)| {
            ShiftTemplate::new(
                stable_id((shift_name as u128 + 1) * 100 + i as u128),
                period.id,
                *role,
                period.start,
                period.end,
            )
        })
        .collect();
    (period, templates)
}

pub fn talent(seed: u128, role: Role, weekly_hours: f64, has_constraint: bool) -> Talent {
    // Offset keeps talent ids clear of the catalog id range.
    Talent::new(stable_id(0x1000 + seed), role, weekly_hours, has_constraint)
}

pub fn only_on(day: Weekday, talent_id: Uuid) -> ConstraintRule {
    ConstraintRule {
        talent_id,
        kind: ConstraintKind::Availability { day },
    }
}

/// History row: the talent worked `shift_name` on `date`.
pub fn history_on(talent_id: Uuid, date: NaiveDate, shift_name: ShiftName) -> Assignment {
    let (start, end) = shift_name.window();
    let spec = ShiftSpec {
        template_id: Uuid::nil(),
        start_time: date.and_time(start),
        end_time: date.and_time(end),
        shift_name,
        role: Role::Server,
        required_count: 1,
    };
    Assignment::new(talent_id, format!("history__{}__{}", date, shift_name), spec)
}

pub fn slot_id(template: &ShiftTemplate, date: NaiveDate, period: &Period) -> String {
    format!("{}__{}__{}__{}", template.id, date, period.id, template.role)
}

fn stable_id(seed: u128) -> Uuid {
    Uuid::from_u128(seed)
}
