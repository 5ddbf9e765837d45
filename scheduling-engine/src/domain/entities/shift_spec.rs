use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use shared::{Role, ShiftName};
use uuid::Uuid;

/// A concrete slot to be filled: a template's times bound to one date, with
/// the head count the staffing table demands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShiftSpec {
    pub template_id: Uuid,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub shift_name: ShiftName,
    pub role: Role,
    pub required_count: u32,
}

impl ShiftSpec {
    pub fn date(&self) -> NaiveDate {
        self.start_time.date()
    }

    /// Scheduled length in hours.
    pub fn duration_hours(&self) -> f64 {
        (self.end_time - self.start_time).num_minutes() as f64 / 60.0
    }

    /// Identity of the slot this spec was expanded into.
    pub fn instance_id(&self, period_id: Uuid) -> String {
        format!(
            "{}__{}__{}__{}",
            self.template_id,
            self.date(),
            period_id,
            self.role
        )
    }
}

/// One talent committed to one required-count unit of a shift instance.
/// Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assignment {
    pub talent_id: Uuid,
    pub shift_instance_id: String,
    pub shift: ShiftSpec,
}

impl Assignment {
    pub fn new(talent_id: Uuid, shift_instance_id: String, shift: ShiftSpec) -> Self {
        Self {
            talent_id,
            shift_instance_id,
            shift,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_spec() -> ShiftSpec {
        let date = NaiveDate::from_ymd_opt(2025, 6, 16).unwrap();
        let (start, end) = ShiftName::Am.window();
        ShiftSpec {
            template_id: Uuid::nil(),
            start_time: date.and_time(start),
            end_time: date.and_time(end),
            shift_name: ShiftName::Am,
            role: Role::Server,
            required_count: 2,
        }
    }

    #[test]
    fn test_duration_in_hours() {
        assert_eq!(sample_spec().duration_hours(), 9.0);
    }

    #[test]
    fn test_instance_id_pattern() {
        let period_id = Uuid::new_v4();
        let id = sample_spec().instance_id(period_id);
        assert_eq!(
            id,
            format!("{}__2025-06-16__{}__server", Uuid::nil(), period_id)
        );
    }
}
