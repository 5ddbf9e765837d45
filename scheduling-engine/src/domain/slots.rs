use crate::domain::entities::{Period, ShiftSpec, ShiftTemplate, WeekFrame};
use crate::domain::staffing::StaffingResolver;
use chrono::Datelike;
use shared::{DomainError, DomainResult};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Expand the week frame against the period catalog into the flat slot map
/// keyed by shift instance id.
///
/// The BTreeMap keeps slot iteration lexicographic, which the builder relies
/// on for deterministic tie-breaking.
pub fn expand_week_slots(
    frame: &WeekFrame,
    periods: &[Period],
    templates: &[ShiftTemplate],
    resolver: &StaffingResolver<'_>,
) -> DomainResult<BTreeMap<String, ShiftSpec>> {
    if periods.is_empty() {
        return Err(DomainError::NoPeriods);
    }

    let mut templates_by_period: BTreeMap<Uuid, Vec<&ShiftTemplate>> = BTreeMap::new();
    for template in templates {
        templates_by_period
            .entry(template.period_id)
            .or_default()
            .push(template);
    }

    let mut slots = BTreeMap::new();
    for date in frame.days() {
        for period in periods {
            let Some(period_templates) = templates_by_period.get(&period.id) else {
                continue;
            };
            let demand = resolver.resolve(date.weekday(), period, period_templates)?;

            for (role, role_demand) in demand {
                let spec = ShiftSpec {
                    template_id: role_demand.template_id,
                    start_time: date.and_time(role_demand.shift_start),
                    end_time: date.and_time(role_demand.shift_end),
                    shift_name: role_demand.shift_name,
                    role,
                    required_count: role_demand.required_count,
                };
                slots.insert(spec.instance_id(period.id), spec);
            }
        }
    }

    Ok(slots)
}
