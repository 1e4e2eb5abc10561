//! Error types for HOS operations

use thiserror::Error;

/// Core error type for HOS operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HosError {
    #[error("Invalid starting cycle hours: {0}")]
    InvalidCycleHours(f64),

    #[error("Invalid driving request: {0} hours")]
    InvalidRequest(f64),
}

impl HosError {
    /// Check that a caller-supplied hour value is finite and non-negative
    pub fn check_cycle_hours(hours: f64) -> Result<f64> {
        if hours.is_finite() && hours >= 0.0 {
            Ok(hours)
        } else {
            Err(Self::InvalidCycleHours(hours))
        }
    }

    /// Check that a requested driving amount is finite and non-negative
    pub fn check_request(hours: f64) -> Result<f64> {
        if hours.is_finite() && hours >= 0.0 {
            Ok(hours)
        } else {
            Err(Self::InvalidRequest(hours))
        }
    }
}

pub type Result<T> = std::result::Result<T, HosError>;
