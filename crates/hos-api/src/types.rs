//! Duty-status log types

use hos_util::round_hours;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Duty status of a logged segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DutyStatus {
    #[serde(rename = "Driving")]
    Driving,
    #[serde(rename = "Off Duty")]
    OffDuty,
    #[serde(rename = "Sleeper Berth")]
    SleeperBerth,
}

impl DutyStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DutyStatus::Driving => "Driving",
            DutyStatus::OffDuty => "Off Duty",
            DutyStatus::SleeperBerth => "Sleeper Berth",
        }
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One segment of the duty-status log.
///
/// Serializes as `{"type": "Driving", "hours": 5.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(rename = "type")]
    pub status: DutyStatus,
    pub hours: f64,
}

impl LogEntry {
    /// Driving segment, rounded to hundredths of an hour
    pub fn driving(hours: f64) -> Self {
        Self {
            status: DutyStatus::Driving,
            hours: round_hours(hours),
        }
    }

    /// Off-duty segment, recorded at its exact duration
    pub fn off_duty(hours: f64) -> Self {
        Self {
            status: DutyStatus::OffDuty,
            hours,
        }
    }

    /// Sleeper-berth segment, rounded to hundredths of an hour
    pub fn sleeper_berth(hours: f64) -> Self {
        Self {
            status: DutyStatus::SleeperBerth,
            hours: round_hours(hours),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}h", self.status, self.hours)
    }
}

/// Point-in-time copy of the engine's counters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DayCounters {
    pub cycle_hours: f64,
    pub driving_hours: f64,
    pub on_duty_hours: f64,
    pub off_duty_hours: f64,
    pub on_duty_since_break: f64,
    pub rest_break_taken: bool,
}
