use chrono::{Datelike, Duration, NaiveDate, Weekday};
use shared::{DomainError, DomainResult};
use std::collections::HashMap;

/// Seven consecutive dates, Sunday through Saturday, derived from a
/// caller-supplied anchor date. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct WeekFrame {
    week: [NaiveDate; 7],
    date_map: HashMap<Weekday, NaiveDate>,
}

impl WeekFrame {
    /// Build the frame for the week containing `anchor`. The first day is the
    /// largest Sunday on or before the anchor.
    pub fn from_anchor(anchor: NaiveDate) -> Self {
        let offset = anchor.weekday().num_days_from_sunday() as i64;
        let sunday = anchor - Duration::days(offset);

        let mut week = [sunday; 7];
        for (i, day) in week.iter_mut().enumerate() {
            *day = sunday + Duration::days(i as i64);
        }
        let date_map = week.iter().map(|d| (d.weekday(), *d)).collect();

        Self { week, date_map }
    }

    /// Parse an ISO `YYYY-MM-DD` anchor string and build the frame.
    pub fn parse_anchor(anchor: &str) -> DomainResult<Self> {
        let date = NaiveDate::parse_from_str(anchor, "%Y-%m-%d").map_err(|e| {
            DomainError::InvalidInput(format!("unparseable week anchor {:?}: {}", anchor, e))
        })?;
        Ok(Self::from_anchor(date))
    }

    pub fn days(&self) -> &[NaiveDate; 7] {
        &self.week
    }

    pub fn start(&self) -> NaiveDate {
        self.week[0]
    }

    pub fn end(&self) -> NaiveDate {
        self.week[6]
    }

    /// Date of the given weekday within this frame.
    pub fn date_of(&self, day: Weekday) -> NaiveDate {
        // Every weekday is present by construction.
        self.date_map[&day]
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.week[0] && date <= self.week[6]
    }
}
