//! Validated policy structures

use crate::schema::{RawConfig, RawLimits};
use crate::validation::parse_accounting;

/// Federal property-carrying defaults
pub const DEFAULT_MAX_DRIVING_HOURS: f64 = 11.0;
pub const DEFAULT_MAX_ON_DUTY_HOURS: f64 = 14.0;
pub const DEFAULT_MAX_CYCLE_HOURS: f64 = 70.0;
pub const DEFAULT_REST_BREAK_REQUIRED_AFTER: f64 = 8.0;
pub const DEFAULT_REST_BREAK_MIN_DURATION: f64 = 0.5;

/// Default upper bound on the length of a planned trip
pub const DEFAULT_MAX_PLAN_DAYS: u32 = 30;

/// Validated policy ready for use by the engine and planner
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HosPolicy {
    pub limits: HosLimits,
    pub day_close: DayCloseAccounting,
    pub planner: PlannerConfig,
}

impl HosPolicy {
    /// Convert from raw config (after validation)
    pub fn from_raw(raw: RawConfig) -> Self {
        let day_close = raw
            .day_close
            .accounting
            .as_deref()
            .and_then(|s| parse_accounting(s).ok())
            .unwrap_or_default();

        Self {
            limits: HosLimits::from_raw(&raw.limits),
            day_close,
            planner: PlannerConfig {
                max_days: raw.planner.max_days.unwrap_or(DEFAULT_MAX_PLAN_DAYS),
            },
        }
    }
}

/// Regulatory limits, in hours
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HosLimits {
    pub max_driving_hours: f64,
    pub max_on_duty_hours: f64,
    pub max_cycle_hours: f64,
    /// Advisory: the engine reports when a break is due but never enforces it
    pub rest_break_required_after: f64,
    pub rest_break_min_duration: f64,
}

impl HosLimits {
    pub(crate) fn from_raw(raw: &RawLimits) -> Self {
        Self {
            max_driving_hours: raw.max_driving_hours.unwrap_or(DEFAULT_MAX_DRIVING_HOURS),
            max_on_duty_hours: raw.max_on_duty_hours.unwrap_or(DEFAULT_MAX_ON_DUTY_HOURS),
            max_cycle_hours: raw.max_cycle_hours.unwrap_or(DEFAULT_MAX_CYCLE_HOURS),
            rest_break_required_after: raw
                .rest_break_required_after
                .unwrap_or(DEFAULT_REST_BREAK_REQUIRED_AFTER),
            rest_break_min_duration: raw
                .rest_break_min_duration
                .unwrap_or(DEFAULT_REST_BREAK_MIN_DURATION),
        }
    }
}

impl Default for HosLimits {
    fn default() -> Self {
        Self {
            max_driving_hours: DEFAULT_MAX_DRIVING_HOURS,
            max_on_duty_hours: DEFAULT_MAX_ON_DUTY_HOURS,
            max_cycle_hours: DEFAULT_MAX_CYCLE_HOURS,
            rest_break_required_after: DEFAULT_REST_BREAK_REQUIRED_AFTER,
            rest_break_min_duration: DEFAULT_REST_BREAK_MIN_DURATION,
        }
    }
}

/// How the day-close operation totals the hours already logged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayCloseAccounting {
    /// driving + on-duty + off-duty. Driving is already part of on-duty, so
    /// it counts twice and the padded day logs less than 24 hours.
    #[default]
    Legacy,
    /// on-duty + off-duty. The padded day logs exactly 24 hours.
    OnDutyOnly,
}

impl DayCloseAccounting {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayCloseAccounting::Legacy => "legacy",
            DayCloseAccounting::OnDutyOnly => "on_duty_only",
        }
    }
}

/// Trip planner settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerConfig {
    pub max_days: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_days: DEFAULT_MAX_PLAN_DAYS,
        }
    }
}
