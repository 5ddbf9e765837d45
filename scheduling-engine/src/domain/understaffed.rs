use crate::domain::entities::{Assignment, ShiftSpec};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use shared::{Role, ShiftName};
use std::collections::{BTreeMap, HashMap};

/// One shift instance whose assigned head count fell short.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnderstaffedEntry {
    pub shift_instance_id: String,
    pub shift_name: ShiftName,
    pub shift_start: NaiveDateTime,
    pub shift_end: NaiveDateTime,
    pub role: Role,
    pub required: u32,
    pub assigned: u32,
    pub missing: u32,
}

/// Diff of required versus assigned heads over the expanded slot map.
pub struct UnderstaffedReport<'a> {
    slots: &'a BTreeMap<String, ShiftSpec>,
    assignments: &'a [Assignment],
}

impl<'a> UnderstaffedReport<'a> {
    pub fn new(slots: &'a BTreeMap<String, ShiftSpec>, assignments: &'a [Assignment]) -> Self {
        Self { slots, assignments }
    }

    /// Every slot whose assigned count is below its required count.
    pub fn entries(&self) -> Vec<UnderstaffedEntry> {
        let assigned_count = self.count_by_slot();

        self.slots
            .iter()
            .filter_map(|(slot_id, shift)| {
                let assigned = assigned_count.get(slot_id.as_str()).copied().unwrap_or(0);
                if assigned >= shift.required_count {
                    return None;
                }
                Some(UnderstaffedEntry {
                    shift_instance_id: slot_id.clone(),
                    shift_name: shift.shift_name,
                    shift_start: shift.start_time,
                    shift_end: shift.end_time,
                    role: shift.role,
                    required: shift.required_count,
                    assigned,
                    missing: shift.required_count - assigned,
                })
            })
            .collect()
    }

    /// Slots that received no assignment at all.
    pub fn fully_unassigned(&self) -> Vec<(&'a String, &'a ShiftSpec)> {
        let assigned_count = self.count_by_slot();
        self.slots
            .iter()
            .filter(|(slot_id, _)| !assigned_count.contains_key(slot_id.as_str()))
            .collect()
    }

    fn count_by_slot(&self) -> HashMap<&str, u32> {
        let mut counts: HashMap<&str, u32> = HashMap::new();
        for assignment in self.assignments {
            *counts
                .entry(assignment.shift_instance_id.as_str())
                .or_insert(0) += 1;
        }
        counts
    }
}
