//! Daily log sheets

use serde::{Deserialize, Serialize};

use crate::{DayCounters, DutyStatus, LogEntry};

/// One day's log sheet: the day's counters plus the segments appended that day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySheet {
    /// 1-based day number within the trip
    pub day: u32,
    pub driving_hours: f64,
    pub on_duty_hours: f64,
    pub off_duty_hours: f64,
    /// Cycle hours at the close of the day
    pub cycle_hours: f64,
    pub duty_segments: Vec<LogEntry>,
}

impl DailySheet {
    /// Build a sheet from the counters at day close and that day's log slice
    pub fn new(day: u32, counters: &DayCounters, segments: &[LogEntry]) -> Self {
        Self {
            day,
            driving_hours: counters.driving_hours,
            on_duty_hours: counters.on_duty_hours,
            off_duty_hours: counters.off_duty_hours,
            cycle_hours: counters.cycle_hours,
            duty_segments: segments.to_vec(),
        }
    }

    /// Sum of logged hours with the given status
    pub fn logged_hours(&self, status: DutyStatus) -> f64 {
        self.duty_segments
            .iter()
            .filter(|s| s.status == status)
            .map(|s| s.hours)
            .sum()
    }

    /// Sum of all logged segment hours
    pub fn total_logged_hours(&self) -> f64 {
        self.duty_segments.iter().map(|s| s.hours).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logged_hours_by_status() {
        let counters = DayCounters {
            cycle_hours: 5.0,
            driving_hours: 5.0,
            on_duty_hours: 5.0,
            off_duty_hours: 0.5,
            ..Default::default()
        };
        let segments = [
            LogEntry::driving(3.0),
            LogEntry::off_duty(0.5),
            LogEntry::driving(2.0),
            LogEntry::sleeper_berth(13.5),
        ];

        let sheet = DailySheet::new(1, &counters, &segments);
        assert_eq!(sheet.day, 1);
        assert_eq!(sheet.logged_hours(DutyStatus::Driving), 5.0);
        assert_eq!(sheet.logged_hours(DutyStatus::OffDuty), 0.5);
        assert_eq!(sheet.total_logged_hours(), 19.0);
    }
}
