use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};
use shared::{DomainError, DomainResult, Role, ShiftName};
use uuid::Uuid;

/// A named portion of the day (am, pm, lounge) that hosts shift templates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Period {
    pub id: Uuid,
    pub shift_name: ShiftName,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Period {
    /// A period must carry exactly the canonical window of its shift name.
    pub fn new(
        id: Uuid,
        shift_name: ShiftName,
        start: NaiveTime,
        end: NaiveTime,
    ) -> DomainResult<Self> {
        let period = Self {
            id,
            shift_name,
            start,
            end,
        };
        period.validate()?;
        Ok(period)
    }

    pub fn validate(&self) -> DomainResult<()> {
        let (canonical_start, canonical_end) = self.shift_name.window();
        if self.start != canonical_start || self.end != canonical_end {
            return Err(DomainError::InvalidInput(format!(
                "period {} must cover the {} window {}-{}",
                self.id, self.shift_name, canonical_start, canonical_end
            )));
        }
        Ok(())
    }

    /// Period with the canonical window of its shift name filled in.
    pub fn canonical(id: Uuid, shift_name: ShiftName) -> Self {
        let (start, end) = shift_name.window();
        Self {
            id,
            shift_name,
            start,
            end,
        }
    }
}

/// A stored (role, start, end) recipe attached to a period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShiftTemplate {
    pub id: Uuid,
    pub period_id: Uuid,
    pub role: Role,
    pub shift_start: NaiveTime,
    pub shift_end: NaiveTime,
}

impl ShiftTemplate {
    /// Shortest shift a template may describe.
    pub const MIN_SHIFT_HOURS: i64 = 4;

    pub fn new(
        id: Uuid,
        period_id: Uuid,
        role: Role,
        shift_start: NaiveTime,
        shift_end: NaiveTime,
    ) -> Self {
        Self {
            id,
            period_id,
            role,
            shift_start,
            shift_end,
        }
    }

    /// The template's times must sit inside the owning period and span at
    /// least [`Self::MIN_SHIFT_HOURS`].
    pub fn validate_against(&self, period: &Period) -> DomainResult<()> {
        if self.period_id != period.id {
            return Err(DomainError::InvalidInput(format!(
                "template {} does not belong to period {}",
                self.id, period.id
            )));
        }
        let contained = period.start <= self.shift_start
            && self.shift_start < self.shift_end
            && self.shift_end <= period.end;
        if !contained {
            return Err(DomainError::InvalidInput(format!(
                "template {} times {}-{} fall outside period window {}-{}",
                self.id, self.shift_start, self.shift_end, period.start, period.end
            )));
        }
        if self.shift_end - self.shift_start < Duration::hours(Self::MIN_SHIFT_HOURS) {
            return Err(DomainError::InvalidInput(format!(
                "template {} is shorter than {} hours",
                self.id,
                Self::MIN_SHIFT_HOURS
            )));
        }
        Ok(())
    }
}
