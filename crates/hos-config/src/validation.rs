//! Configuration validation

use crate::policy::HosLimits;
use crate::schema::RawConfig;
use hos_util::HOURS_PER_DAY;
use thiserror::Error;

/// Validation error
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Limit '{name}' must be a positive, finite number of hours (got {value})")]
    InvalidLimit { name: &'static str, value: f64 },

    #[error("Limit '{name}' ({value}h) exceeds '{bound_name}' ({bound}h)")]
    LimitExceedsBound {
        name: &'static str,
        value: f64,
        bound_name: &'static str,
        bound: f64,
    },

    #[error("Unknown day-close accounting mode: {0}")]
    UnknownAccounting(String),

    #[error("Planner error: {0}")]
    PlannerError(String),
}

/// Validate a raw configuration
pub fn validate_config(config: &RawConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let limits = HosLimits::from_raw(&config.limits);
    errors.extend(validate_limits(&limits));

    if let Some(mode) = &config.day_close.accounting
        && let Err(e) = parse_accounting(mode)
    {
        errors.push(e);
    }

    if config.planner.max_days == Some(0) {
        errors.push(ValidationError::PlannerError(
            "max_days must be at least 1".into(),
        ));
    }

    errors
}

/// Validate a set of limits against each other and the length of a day
pub fn validate_limits(limits: &HosLimits) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let named = [
        ("max_driving_hours", limits.max_driving_hours),
        ("max_on_duty_hours", limits.max_on_duty_hours),
        ("max_cycle_hours", limits.max_cycle_hours),
        ("rest_break_required_after", limits.rest_break_required_after),
        ("rest_break_min_duration", limits.rest_break_min_duration),
    ];

    let mut all_valid = true;
    for (name, value) in named {
        if !value.is_finite() || value <= 0.0 {
            errors.push(ValidationError::InvalidLimit { name, value });
            all_valid = false;
        }
    }

    // Ordering checks are meaningless on garbage input
    if !all_valid {
        return errors;
    }

    let bounds = [
        (
            "max_driving_hours",
            limits.max_driving_hours,
            "max_on_duty_hours",
            limits.max_on_duty_hours,
        ),
        (
            "max_on_duty_hours",
            limits.max_on_duty_hours,
            "hours_per_day",
            HOURS_PER_DAY,
        ),
        (
            "max_on_duty_hours",
            limits.max_on_duty_hours,
            "max_cycle_hours",
            limits.max_cycle_hours,
        ),
        (
            "rest_break_min_duration",
            limits.rest_break_min_duration,
            "hours_per_day",
            HOURS_PER_DAY,
        ),
    ];

    for (name, value, bound_name, bound) in bounds {
        if value > bound {
            errors.push(ValidationError::LimitExceedsBound {
                name,
                value,
                bound_name,
                bound,
            });
        }
    }

    errors
}

/// Parse a day-close accounting mode name
pub fn parse_accounting(s: &str) -> Result<crate::DayCloseAccounting, ValidationError> {
    match s.to_lowercase().replace('-', "_").as_str() {
        "legacy" => Ok(crate::DayCloseAccounting::Legacy),
        "on_duty_only" => Ok(crate::DayCloseAccounting::OnDutyOnly),
        other => Err(ValidationError::UnknownAccounting(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{RawDayClose, RawLimits, RawPlanner};
    use crate::DayCloseAccounting;

    fn raw_with_limits(limits: RawLimits) -> RawConfig {
        RawConfig {
            config_version: 1,
            limits,
            day_close: RawDayClose::default(),
            planner: RawPlanner::default(),
        }
    }

    #[test]
    fn default_limits_are_valid() {
        assert!(validate_limits(&HosLimits::default()).is_empty());
    }

    #[test]
    fn test_parse_accounting() {
        assert_eq!(parse_accounting("legacy").unwrap(), DayCloseAccounting::Legacy);
        assert_eq!(
            parse_accounting("On-Duty-Only").unwrap(),
            DayCloseAccounting::OnDutyOnly
        );
        assert!(parse_accounting("creative").is_err());
    }

    #[test]
    fn rejects_non_positive_and_nan() {
        let config = raw_with_limits(RawLimits {
            max_driving_hours: Some(0.0),
            rest_break_min_duration: Some(f64::NAN),
            ..Default::default()
        });

        let errors = validate_config(&config);
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| matches!(e, ValidationError::InvalidLimit { .. })));
    }

    #[test]
    fn rejects_driving_above_on_duty() {
        let config = raw_with_limits(RawLimits {
            max_driving_hours: Some(15.0),
            ..Default::default()
        });

        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::LimitExceedsBound { name: "max_driving_hours", .. }
        )));
    }

    #[test]
    fn rejects_on_duty_above_cycle() {
        let config = raw_with_limits(RawLimits {
            max_cycle_hours: Some(12.0),
            ..Default::default()
        });

        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::LimitExceedsBound { bound_name: "max_cycle_hours", .. }
        )));
    }

    #[test]
    fn collects_every_error() {
        let config = RawConfig {
            config_version: 1,
            limits: RawLimits::default(),
            day_close: RawDayClose {
                accounting: Some("sideways".into()),
            },
            planner: RawPlanner { max_days: Some(0) },
        };

        let errors = validate_config(&config);
        assert_eq!(errors.len(), 2);
    }
}
