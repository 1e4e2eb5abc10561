//! Raw configuration schema (as parsed from TOML)

use serde::{Deserialize, Serialize};

/// Raw configuration as parsed from TOML
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawConfig {
    /// Config schema version
    pub config_version: u32,

    /// Regulatory limits
    #[serde(default)]
    pub limits: RawLimits,

    /// Day-close accounting
    #[serde(default)]
    pub day_close: RawDayClose,

    /// Trip planner settings
    #[serde(default)]
    pub planner: RawPlanner,
}

/// Regulatory limits, in hours. Missing values take the federal defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawLimits {
    /// Maximum driving per duty day
    pub max_driving_hours: Option<f64>,

    /// Maximum on-duty window per duty day
    pub max_on_duty_hours: Option<f64>,

    /// Maximum on-duty hours across the rolling cycle
    pub max_cycle_hours: Option<f64>,

    /// On-duty hours after which a rest break is due (advisory)
    pub rest_break_required_after: Option<f64>,

    /// Duration credited for a rest break
    pub rest_break_min_duration: Option<f64>,
}

/// Day-close settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawDayClose {
    /// "legacy" or "on_duty_only"
    pub accounting: Option<String>,
}

/// Trip planner settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawPlanner {
    /// Maximum number of days a plan may span
    pub max_days: Option<u32>,
}
