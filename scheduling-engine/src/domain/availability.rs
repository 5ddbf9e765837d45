use crate::domain::entities::{ConstraintKind, ConstraintRule, Talent, TalentAvailability, WeekFrame};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use shared::ShiftName;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use uuid::Uuid;

const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Collapses heterogeneous whitelist rows into per-talent availability
/// windows over the given week.
pub struct AvailabilityMaterializer<'a> {
    frame: &'a WeekFrame,
}

impl<'a> AvailabilityMaterializer<'a> {
    pub fn new(frame: &'a WeekFrame) -> Self {
        Self { frame }
    }

    /// Materialize every talent's `(window, allowed_shifts)` pair.
    pub fn materialize(
        &self,
        talents: &[Talent],
        rules: &[ConstraintRule],
    ) -> HashMap<Uuid, TalentAvailability> {
        let mut rules_by_talent: HashMap<Uuid, Vec<&ConstraintRule>> = HashMap::new();
        for rule in rules {
            rules_by_talent.entry(rule.talent_id).or_default().push(rule);
        }

        talents
            .iter()
            .map(|talent| {
                let talent_rules = rules_by_talent
                    .get(&talent.id)
                    .map(Vec::as_slice)
                    .unwrap_or(&[]);
                (talent.id, self.materialize_one(talent, talent_rules))
            })
            .collect()
    }

    fn materialize_one(&self, talent: &Talent, rules: &[&ConstraintRule]) -> TalentAvailability {
        let (days, shifts) = collapse_rules(talent, rules);
        let window = self.build_window(&days, &shifts);

        TalentAvailability {
            talent_id: talent.id,
            constrained: talent.has_constraint,
            role: talent.role,
            weekly_hours: talent.weekly_hours,
            allowed_shifts: shifts,
            window,
        }
    }

    /// One span per (allowed day, allowed shift name), bound to the frame's
    /// date for that day.
    fn build_window(
        &self,
        days: &HashSet<Weekday>,
        shifts: &BTreeSet<ShiftName>,
    ) -> BTreeMap<NaiveDate, Vec<(NaiveDateTime, NaiveDateTime)>> {
        let mut window = BTreeMap::new();
        for date in self.frame.days() {
            if !days.contains(&date.weekday()) {
                continue;
            }
            let spans = shifts
                .iter()
                .map(|shift| {
                    let (start, end) = shift.window();
                    (date.and_time(start), date.and_time(end))
                })
                .collect();
            window.insert(*date, spans);
        }
        window
    }
}

/// Fold a talent's rules into `(allowed_days, allowed_shifts)`.
///
/// Rules are whitelists: AVAILABILITY contributes days (shift names stay wide
/// open), SHIFT_RESTRICTION contributes shift names on every day, COMBINATION
/// contributes exact pairs. No rows at all means fully open.
fn collapse_rules(
    talent: &Talent,
    rules: &[&ConstraintRule],
) -> (HashSet<Weekday>, BTreeSet<ShiftName>) {
    if !talent.has_constraint || rules.is_empty() {
        return (ALL_WEEKDAYS.into_iter().collect(), ShiftName::ALL.into_iter().collect());
    }

    let mut days: HashSet<Weekday> = HashSet::new();
    let mut shifts: BTreeSet<ShiftName> = BTreeSet::new();
    let mut seed_all_shifts = false;

    for rule in rules {
        match rule.kind {
            ConstraintKind::Availability { day } => {
                days.insert(day);
                seed_all_shifts = true;
            }
            ConstraintKind::ShiftRestriction { shift } => {
                days.extend(ALL_WEEKDAYS);
                shifts.insert(shift);
            }
            ConstraintKind::Combination { day, shift } => {
                days.insert(day);
                shifts.insert(shift);
            }
        }
    }

    if seed_all_shifts && shifts.is_empty() {
        shifts.extend(ShiftName::ALL);
    }

    (days, shifts)
}
