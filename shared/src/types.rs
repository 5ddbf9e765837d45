use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical shift-name vocabulary. Every period and every availability
/// whitelist speaks in these three names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ShiftName {
    Am,
    Pm,
    Lounge,
}

impl ShiftName {
    pub const ALL: [ShiftName; 3] = [ShiftName::Am, ShiftName::Pm, ShiftName::Lounge];

    /// Fixed wall-clock window of the shift name.
    ///
    /// am = 06:00-15:00, pm = 15:00-23:30, lounge = 11:00-23:59.
    pub fn window(&self) -> (NaiveTime, NaiveTime) {
        match self {
            ShiftName::Am => (hm(6, 0), hm(15, 0)),
            ShiftName::Pm => (hm(15, 0), hm(23, 30)),
            ShiftName::Lounge => (hm(11, 0), hm(23, 59)),
        }
    }

    /// Unpaid break attached to the shift. Informational; the engine does not
    /// subtract it from scheduled hours.
    pub fn break_duration(&self) -> Duration {
        match self {
            ShiftName::Am => Duration::minutes(45),
            ShiftName::Pm => Duration::minutes(30),
            ShiftName::Lounge => Duration::minutes(30),
        }
    }
}

impl fmt::Display for ShiftName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShiftName::Am => "am",
            ShiftName::Pm => "pm",
            ShiftName::Lounge => "lounge",
        };
        write!(f, "{}", name)
    }
}

fn hm(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).expect("valid wall-clock time")
}

/// Role vocabulary of the staffing table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Manager,
    Leader,
    Bartender,
    Server,
    Runner,
    Hostess,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Manager,
        Role::Leader,
        Role::Bartender,
        Role::Server,
        Role::Runner,
        Role::Hostess,
    ];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Manager => "manager",
            Role::Leader => "leader",
            Role::Bartender => "bartender",
            Role::Server => "server",
            Role::Runner => "runner",
            Role::Hostess => "hostess",
        };
        write!(f, "{}", name)
    }
}

/// Demand tier of a calendar day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StaffingTier {
    Low,
    Med,
    High,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_windows() {
        let (start, end) = ShiftName::Am.window();
        assert_eq!(start, NaiveTime::from_hms_opt(6, 0, 0).unwrap());
        assert_eq!(end, NaiveTime::from_hms_opt(15, 0, 0).unwrap());

        let (start, end) = ShiftName::Lounge.window();
        assert_eq!(start, NaiveTime::from_hms_opt(11, 0, 0).unwrap());
        assert_eq!(end, NaiveTime::from_hms_opt(23, 59, 0).unwrap());
    }

    #[test]
    fn test_break_durations() {
        assert_eq!(ShiftName::Am.break_duration(), Duration::minutes(45));
        assert_eq!(ShiftName::Pm.break_duration(), Duration::minutes(30));
        assert_eq!(ShiftName::Lounge.break_duration(), Duration::minutes(30));
    }

    #[test]
    fn test_lowercase_display() {
        assert_eq!(ShiftName::Lounge.to_string(), "lounge");
        assert_eq!(Role::Bartender.to_string(), "bartender");
    }

    #[test]
    fn test_serde_forms_are_lowercase() {
        assert_eq!(serde_json::to_string(&ShiftName::Am).unwrap(), "\"am\"");
        assert_eq!(serde_json::to_string(&Role::Hostess).unwrap(), "\"hostess\"");
        assert_eq!(serde_json::to_string(&StaffingTier::Med).unwrap(), "\"med\"");
    }
}
