use crate::domain::entities::{Period, ShiftTemplate};
use chrono::{NaiveTime, Weekday};
use serde::Deserialize;
use shared::{DomainError, DomainResult, Role, ShiftName, StaffingTier};
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

/// Required head count per demand tier for one role.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct TierCounts {
    pub low: u32,
    pub med: u32,
    pub high: u32,
}

impl TierCounts {
    fn for_tier(&self, tier: StaffingTier) -> u32 {
        match tier {
            StaffingTier::Low => self.low,
            StaffingTier::Med => self.med,
            StaffingTier::High => self.high,
        }
    }
}

/// role x tier -> required head count. Overridable through settings; the
/// default is the house table.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct StaffingTable {
    counts: HashMap<Role, TierCounts>,
}

impl StaffingTable {
    pub fn required(&self, role: Role, tier: StaffingTier) -> DomainResult<u32> {
        self.counts
            .get(&role)
            .map(|counts| counts.for_tier(tier))
            .ok_or_else(|| DomainError::UnknownRole(role.to_string()))
    }
}

impl Default for StaffingTable {
    fn default() -> Self {
        let table = [
            (Role::Manager, (1, 1, 1)),
            (Role::Leader, (1, 2, 3)),
            (Role::Bartender, (1, 2, 3)),
            (Role::Server, (2, 3, 4)),
            (Role::Runner, (1, 2, 3)),
            (Role::Hostess, (1, 1, 2)),
        ];
        Self {
            counts: table
                .into_iter()
                .map(|(role, (low, med, high))| (role, TierCounts { low, med, high }))
                .collect(),
        }
    }
}

/// Weekday -> demand tier. Days missing from an override fall back to med.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct TierByDay {
    tiers: HashMap<Weekday, StaffingTier>,
}

impl TierByDay {
    pub fn tier_for(&self, day: Weekday) -> StaffingTier {
        self.tiers.get(&day).copied().unwrap_or(StaffingTier::Med)
    }
}

impl Default for TierByDay {
    fn default() -> Self {
        let tiers = [
            (Weekday::Mon, StaffingTier::Low),
            (Weekday::Tue, StaffingTier::Low),
            (Weekday::Wed, StaffingTier::Med),
            (Weekday::Thu, StaffingTier::Med),
            (Weekday::Fri, StaffingTier::High),
            (Weekday::Sat, StaffingTier::High),
            (Weekday::Sun, StaffingTier::High),
        ];
        Self {
            tiers: tiers.into_iter().collect(),
        }
    }
}

/// Head-counted demand for one role of one period on one day.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleDemand {
    pub template_id: Uuid,
    pub shift_name: ShiftName,
    pub shift_start: NaiveTime,
    pub shift_end: NaiveTime,
    pub required_count: u32,
}

/// Applies the staffing table to a period's templates for a given day.
pub struct StaffingResolver<'a> {
    table: &'a StaffingTable,
    tiers: &'a TierByDay,
}

impl<'a> StaffingResolver<'a> {
    pub fn new(table: &'a StaffingTable, tiers: &'a TierByDay) -> Self {
        Self { table, tiers }
    }

    /// Per-role demand for the period's templates on `day`. Fails with
    /// `UnknownRole` when a template's role is absent from the table.
    pub fn resolve(
        &self,
        day: Weekday,
        period: &Period,
        templates: &[&ShiftTemplate],
    ) -> DomainResult<BTreeMap<Role, RoleDemand>> {
        let tier = self.tiers.tier_for(day);

        let mut demand = BTreeMap::new();
        for template in templates {
            let required_count = self.table.required(template.role, tier)?;
            demand.insert(
                template.role,
                RoleDemand {
                    template_id: template.id,
                    shift_name: period.shift_name,
                    shift_start: template.shift_start,
                    shift_end: template.shift_end,
                    required_count,
                },
            );
        }
        Ok(demand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_values() {
        let table = StaffingTable::default();
        assert_eq!(table.required(Role::Server, StaffingTier::Low).unwrap(), 2);
        assert_eq!(table.required(Role::Server, StaffingTier::High).unwrap(), 4);
        assert_eq!(
            table.required(Role::Manager, StaffingTier::High).unwrap(),
            1
        );
        assert_eq!(
            table.required(Role::Hostess, StaffingTier::Med).unwrap(),
            1
        );
    }

    #[test]
    fn test_missing_role_is_unknown() {
        let table: StaffingTable = serde_json::from_str(r#"{}"#).unwrap();
        let err = table.required(Role::Server, StaffingTier::Low).unwrap_err();
        assert!(matches!(err, DomainError::UnknownRole(_)));
    }

    #[test]
    fn test_day_tiers() {
        let tiers = TierByDay::default();
        assert_eq!(tiers.tier_for(Weekday::Mon), StaffingTier::Low);
        assert_eq!(tiers.tier_for(Weekday::Wed), StaffingTier::Med);
        assert_eq!(tiers.tier_for(Weekday::Sun), StaffingTier::High);
    }

    #[test]
    fn test_resolver_applies_tier_counts() {
        let table = StaffingTable::default();
        let tiers = TierByDay::default();
        let resolver = StaffingResolver::new(&table, &tiers);

        let period = Period::canonical(Uuid::new_v4(), ShiftName::Am);
        let template = ShiftTemplate::new(
            Uuid::new_v4(),
            period.id,
            Role::Server,
            NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
        );

        let demand = resolver
            .resolve(Weekday::Fri, &period, &[&template])
            .unwrap();
        let server = &demand[&Role::Server];
        assert_eq!(server.required_count, 4);
        assert_eq!(server.shift_name, ShiftName::Am);
        assert_eq!(server.template_id, template.id);
    }
}
