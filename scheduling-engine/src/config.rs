use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::scoring::ScoreWeights;
use crate::domain::staffing::{StaffingTable, TierByDay};

/// Engine configuration. Every field has a working default; callers override
/// through a config file, environment variables, or by building the struct.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct EngineSettings {
    pub scheduling: SchedulingSettings,
    pub scoring: ScoreWeights,
    pub staffing_table: StaffingTable,
    pub tier_by_day: TierByDay,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SchedulingSettings {
    /// Minimum rest gap between one day's shift end and the next day's start.
    pub min_rest_hours: i64,
    /// Longest run of worked days a talent may reach, counting the candidate
    /// day.
    pub max_consecutive_days: u32,
    /// How far back prior assignments are consulted for streak and rest.
    pub history_days: i64,
    /// Legacy behavior: let carried-in history eat into the weekly ceiling.
    pub count_history_in_weekly_hours: bool,
}

impl Default for SchedulingSettings {
    fn default() -> Self {
        Self {
            min_rest_hours: 11,
            max_consecutive_days: 6,
            history_days: 7,
            count_history_in_weekly_hours: false,
        }
    }
}

impl EngineSettings {
    /// Layer `config/engine*` files and `ENGINE__`-prefixed environment
    /// variables over the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            .add_source(File::with_name("config/engine").required(false))
            .add_source(File::with_name(&format!("config/engine.{}", environment)).required(false))
            .add_source(Environment::with_prefix("ENGINE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
