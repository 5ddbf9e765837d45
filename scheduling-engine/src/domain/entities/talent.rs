use chrono::{NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use shared::{DomainError, DomainResult, Role, ShiftName};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

/// A schedulable employee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Talent {
    pub id: Uuid,
    pub role: Role,
    /// Contractual ceiling of scheduled hours per week.
    pub weekly_hours: f64,
    /// Whether any constraint rows exist for this talent. False means fully
    /// open availability.
    pub has_constraint: bool,
}

impl Talent {
    pub fn new(id: Uuid, role: Role, weekly_hours: f64, has_constraint: bool) -> Self {
        Self {
            id,
            role,
            weekly_hours,
            has_constraint,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.weekly_hours <= 0.0 {
            return Err(DomainError::InvalidInput(format!(
                "talent {} has non-positive weekly hours {}",
                self.id, self.weekly_hours
            )));
        }
        Ok(())
    }
}

/// One whitelist row expressing when a talent is willing to work. Rules are
/// affirmative: they add legal (day, shift) ground, never remove it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConstraintRule {
    pub talent_id: Uuid,
    pub kind: ConstraintKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConstraintKind {
    /// Works on this day; shift names stay wide open unless another rule
    /// narrows them.
    Availability { day: Weekday },
    /// May take this shift name on any day of the week.
    ShiftRestriction { shift: ShiftName },
    /// Works exactly this (day, shift) pairing.
    Combination { day: Weekday, shift: ShiftName },
}

/// Materialized availability for one talent: legal spans per date plus the
/// shift-name whitelist.
#[derive(Debug, Clone, PartialEq)]
pub struct TalentAvailability {
    pub talent_id: Uuid,
    pub constrained: bool,
    pub role: Role,
    pub weekly_hours: f64,
    pub allowed_shifts: BTreeSet<ShiftName>,
    pub window: BTreeMap<NaiveDate, Vec<(NaiveDateTime, NaiveDateTime)>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_weekly_hours_is_invalid() {
        let talent = Talent::new(Uuid::new_v4(), Role::Runner, 0.0, false);
        assert!(matches!(
            talent.validate(),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_positive_weekly_hours_is_valid() {
        let talent = Talent::new(Uuid::new_v4(), Role::Runner, 40.0, false);
        assert!(talent.validate().is_ok());
    }
}
