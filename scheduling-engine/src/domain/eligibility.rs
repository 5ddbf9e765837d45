use crate::domain::entities::{ShiftSpec, Talent, TalentAvailability};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::{BTreeMap, HashMap, HashSet};
use uuid::Uuid;

/// (talent, date) -> availability spans, for O(1) checks per shift.
pub type SpanLookup = HashMap<(Uuid, NaiveDate), Vec<(NaiveDateTime, NaiveDateTime)>>;

pub fn build_span_lookup(availability: &HashMap<Uuid, TalentAvailability>) -> SpanLookup {
    availability
        .iter()
        .flat_map(|(talent_id, avail)| {
            avail
                .window
                .iter()
                .map(|(date, spans)| ((*talent_id, *date), spans.clone()))
        })
        .collect()
}

/// For every slot, the ordered list of talents whose role, shift-name
/// whitelist, and availability spans cover it.
///
/// Constrained talents come first so restricted availability is consumed
/// before the fully-open pool; roster order is preserved inside each group
/// and duplicates are dropped.
pub fn index_eligibility(
    slots: &BTreeMap<String, ShiftSpec>,
    roster: &[Talent],
    availability: &HashMap<Uuid, TalentAvailability>,
) -> BTreeMap<String, Vec<Uuid>> {
    let lookup = build_span_lookup(availability);

    slots
        .iter()
        .map(|(instance_id, shift)| {
            let candidates = eligible_for(shift, roster, availability, &lookup);
            (instance_id.clone(), candidates)
        })
        .collect()
}

fn eligible_for(
    shift: &ShiftSpec,
    roster: &[Talent],
    availability: &HashMap<Uuid, TalentAvailability>,
    lookup: &SpanLookup,
) -> Vec<Uuid> {
    let mut constrained = Vec::new();
    let mut unconstrained = Vec::new();
    let mut seen = HashSet::new();

    for talent in roster {
        if talent.role != shift.role {
            continue;
        }
        let Some(avail) = availability.get(&talent.id) else {
            continue;
        };
        if !avail.allowed_shifts.contains(&shift.shift_name) {
            continue;
        }
        let covered = lookup
            .get(&(talent.id, shift.date()))
            .is_some_and(|spans| {
                spans
                    .iter()
                    .any(|(start, end)| *start <= shift.start_time && *end >= shift.end_time)
            });
        if !covered {
            continue;
        }
        if !seen.insert(talent.id) {
            continue;
        }
        if avail.constrained {
            constrained.push(talent.id);
        } else {
            unconstrained.push(talent.id);
        }
    }

    constrained.extend(unconstrained);
    constrained
}
