//! Hours-of-service accounting engine

use hos_api::{DayCounters, LogEntry};
use hos_config::{DayCloseAccounting, HosLimits, HosPolicy};
use hos_util::{HOURS_EPSILON, HOURS_PER_DAY, HosError};
use tracing::{debug, info, warn};

/// Duty-day accounting state for a single driver.
///
/// Holds two independent groups of counters: the day counters (driving,
/// on-duty, off-duty, on-duty since the last break, and whether the break was
/// taken), which [`HosEngine::reset_for_new_day`] clears, and the cycle total,
/// which only ever grows. Every operation is an immediate, infallible state
/// transition; limit exhaustion is reported through return values.
///
/// The log is append-only for the engine's lifetime. It is not split by day;
/// callers that need per-day sheets record `log().len()` when a day starts
/// and slice from there when it ends.
#[derive(Debug, Clone)]
pub struct HosEngine {
    limits: HosLimits,
    accounting: DayCloseAccounting,

    cycle_hours: f64,
    driving_hours: f64,
    on_duty_hours: f64,
    off_duty_hours: f64,
    on_duty_since_break: f64,
    rest_break_taken: bool,

    log: Vec<LogEntry>,
}

impl HosEngine {
    /// Create an engine with the default federal limits.
    ///
    /// `cycle_hours` is not validated; see [`HosEngine::try_new`].
    pub fn new(cycle_hours: f64) -> Self {
        Self::with_limits(HosLimits::default(), DayCloseAccounting::default(), cycle_hours)
    }

    /// Create an engine using the limits and accounting mode of a policy
    pub fn with_policy(policy: &HosPolicy, cycle_hours: f64) -> Self {
        Self::with_limits(policy.limits, policy.day_close, cycle_hours)
    }

    pub fn with_limits(
        limits: HosLimits,
        accounting: DayCloseAccounting,
        cycle_hours: f64,
    ) -> Self {
        debug!(
            cycle_hours,
            max_driving = limits.max_driving_hours,
            max_on_duty = limits.max_on_duty_hours,
            max_cycle = limits.max_cycle_hours,
            accounting = accounting.as_str(),
            "HOS engine initialized"
        );

        Self {
            limits,
            accounting,
            cycle_hours,
            driving_hours: 0.0,
            on_duty_hours: 0.0,
            off_duty_hours: 0.0,
            on_duty_since_break: 0.0,
            rest_break_taken: false,
            log: Vec::new(),
        }
    }

    /// Like [`HosEngine::with_policy`], but rejects a negative or non-finite
    /// starting cycle value.
    pub fn try_new(policy: &HosPolicy, cycle_hours: f64) -> hos_util::Result<Self> {
        let cycle_hours = HosError::check_cycle_hours(cycle_hours)?;
        Ok(Self::with_policy(policy, cycle_hours))
    }

    /// Apply up to `requested_hours` of driving to the current day.
    ///
    /// The amount granted is the smallest of the request and the remaining
    /// driving, on-duty and cycle allowances. Returns the part of the request
    /// that was not granted, which the caller carries into a later day.
    /// When nothing can be granted the state is untouched and the whole
    /// request comes back.
    pub fn allocate_driving_time(&mut self, requested_hours: f64) -> f64 {
        if requested_hours.is_nan() {
            warn!("Ignoring NaN driving request");
            return requested_hours;
        }

        let granted = requested_hours
            .min(self.limits.max_driving_hours - self.driving_hours)
            .min(self.limits.max_on_duty_hours - self.on_duty_hours)
            .min(self.limits.max_cycle_hours - self.cycle_hours);

        if granted <= 0.0 {
            debug!(
                requested_hours,
                driving_hours = self.driving_hours,
                on_duty_hours = self.on_duty_hours,
                cycle_hours = self.cycle_hours,
                "No driving time available"
            );
            return requested_hours;
        }

        self.driving_hours += granted;
        self.on_duty_hours += granted;
        self.cycle_hours += granted;
        self.on_duty_since_break += granted;
        self.log.push(LogEntry::driving(granted));

        let leftover = requested_hours - granted;
        debug!(
            requested_hours,
            granted,
            leftover,
            driving_hours = self.driving_hours,
            cycle_hours = self.cycle_hours,
            "Driving time allocated"
        );

        leftover
    }

    /// Log the day's rest break.
    ///
    /// Returns false without changing anything if the break was already taken
    /// today. The break is credited to off-duty time only; on-duty, driving
    /// and cycle totals keep running.
    pub fn take_rest_break(&mut self) -> bool {
        if self.rest_break_taken {
            debug!("Rest break already taken today");
            return false;
        }

        let duration = self.limits.rest_break_min_duration;
        self.log.push(LogEntry::off_duty(duration));
        self.rest_break_taken = true;
        self.off_duty_hours += duration;
        self.on_duty_since_break = 0.0;

        debug!(duration, on_duty_hours = self.on_duty_hours, "Rest break taken");
        true
    }

    /// Pad the day out to 24 hours with a sleeper-berth segment.
    ///
    /// Returns false and logs nothing if the day already accounts for 24
    /// hours or more.
    pub fn end_day_with_rest(&mut self) -> bool {
        let remaining = HOURS_PER_DAY - self.day_total();

        if remaining <= 0.0 {
            debug!(day_total = self.day_total(), "Day already full");
            return false;
        }

        let entry = LogEntry::sleeper_berth(remaining);
        self.log.push(entry);

        info!(
            sleeper_hours = entry.hours,
            driving_hours = self.driving_hours,
            on_duty_hours = self.on_duty_hours,
            off_duty_hours = self.off_duty_hours,
            "Day closed with rest"
        );
        true
    }

    /// Start a new duty day. The cycle total and the log carry over.
    pub fn reset_for_new_day(&mut self) {
        self.driving_hours = 0.0;
        self.on_duty_hours = 0.0;
        self.off_duty_hours = 0.0;
        self.rest_break_taken = false;
        self.on_duty_since_break = 0.0;

        info!(cycle_hours = self.cycle_hours, "Counters reset for new day");
    }

    /// All logged segments, oldest first
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// Hours the day-close operation considers already logged
    fn day_total(&self) -> f64 {
        match self.accounting {
            DayCloseAccounting::Legacy => {
                self.driving_hours + self.on_duty_hours + self.off_duty_hours
            }
            DayCloseAccounting::OnDutyOnly => self.on_duty_hours + self.off_duty_hours,
        }
    }

    // Inspection

    pub fn limits(&self) -> &HosLimits {
        &self.limits
    }

    pub fn accounting(&self) -> DayCloseAccounting {
        self.accounting
    }

    pub fn cycle_hours(&self) -> f64 {
        self.cycle_hours
    }

    pub fn driving_hours(&self) -> f64 {
        self.driving_hours
    }

    pub fn on_duty_hours(&self) -> f64 {
        self.on_duty_hours
    }

    pub fn off_duty_hours(&self) -> f64 {
        self.off_duty_hours
    }

    pub fn on_duty_since_break(&self) -> f64 {
        self.on_duty_since_break
    }

    pub fn rest_break_taken(&self) -> bool {
        self.rest_break_taken
    }

    /// True once on-duty time since the last break reaches the advisory
    /// threshold and today's break has not been taken. Never enforced.
    pub fn rest_break_due(&self) -> bool {
        !self.rest_break_taken
            && self.on_duty_since_break >= self.limits.rest_break_required_after - HOURS_EPSILON
    }

    pub fn remaining_driving(&self) -> f64 {
        (self.limits.max_driving_hours - self.driving_hours).max(0.0)
    }

    pub fn remaining_on_duty(&self) -> f64 {
        (self.limits.max_on_duty_hours - self.on_duty_hours).max(0.0)
    }

    pub fn remaining_cycle(&self) -> f64 {
        (self.limits.max_cycle_hours - self.cycle_hours).max(0.0)
    }

    /// Copy of the current counters
    pub fn counters(&self) -> DayCounters {
        DayCounters {
            cycle_hours: self.cycle_hours,
            driving_hours: self.driving_hours,
            on_duty_hours: self.on_duty_hours,
            off_duty_hours: self.off_duty_hours,
            on_duty_since_break: self.on_duty_since_break,
            rest_break_taken: self.rest_break_taken,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hos_api::DutyStatus;

    fn assert_within_limits(engine: &HosEngine) {
        let limits = engine.limits();
        assert!(engine.driving_hours() >= 0.0);
        assert!(engine.driving_hours() <= limits.max_driving_hours);
        assert!(engine.on_duty_hours() <= limits.max_on_duty_hours);
        assert!(engine.driving_hours() <= engine.on_duty_hours());
        assert!(engine.cycle_hours() <= limits.max_cycle_hours);
    }

    #[test]
    fn test_new_engine_is_empty() {
        let engine = HosEngine::new(12.5);
        assert_eq!(engine.cycle_hours(), 12.5);
        assert_eq!(engine.driving_hours(), 0.0);
        assert_eq!(engine.on_duty_hours(), 0.0);
        assert_eq!(engine.off_duty_hours(), 0.0);
        assert_eq!(engine.on_duty_since_break(), 0.0);
        assert!(!engine.rest_break_taken());
        assert!(engine.log().is_empty());
    }

    #[test]
    fn test_driving_cap_exhausts() {
        let mut engine = HosEngine::new(0.0);

        assert_eq!(engine.allocate_driving_time(11.0), 0.0);
        assert_eq!(engine.driving_hours(), 11.0);

        assert_eq!(engine.allocate_driving_time(2.0), 2.0);
        assert_eq!(engine.driving_hours(), 11.0);
        assert_eq!(engine.log().len(), 1);
    }

    #[test]
    fn test_partial_grant_returns_leftover() {
        let mut engine = HosEngine::new(0.0);

        assert_eq!(engine.allocate_driving_time(13.0), 2.0);
        assert_eq!(engine.driving_hours(), 11.0);
        assert_eq!(engine.on_duty_hours(), 11.0);
        assert_eq!(engine.cycle_hours(), 11.0);
        assert_eq!(engine.on_duty_since_break(), 11.0);
        assert_eq!(engine.log(), &[LogEntry::driving(11.0)]);
    }

    #[test]
    fn test_cycle_bound() {
        let mut engine = HosEngine::new(69.0);

        assert_eq!(engine.allocate_driving_time(5.0), 4.0);
        assert_eq!(engine.cycle_hours(), 70.0);
        assert_eq!(engine.driving_hours(), 1.0);
        assert_eq!(engine.log(), &[LogEntry::driving(1.0)]);

        // Cycle is at its cap: full request comes back
        assert_eq!(engine.allocate_driving_time(3.0), 3.0);
        assert_eq!(engine.cycle_hours(), 70.0);
    }

    #[test]
    fn test_on_duty_bound() {
        let limits = HosLimits {
            max_driving_hours: 11.0,
            max_on_duty_hours: 6.0,
            ..Default::default()
        };
        let mut engine = HosEngine::with_limits(limits, DayCloseAccounting::Legacy, 0.0);

        assert_eq!(engine.allocate_driving_time(8.0), 2.0);
        assert_eq!(engine.on_duty_hours(), 6.0);
        assert_eq!(engine.allocate_driving_time(1.0), 1.0);
    }

    #[test]
    fn test_start_above_cycle_cap_grants_nothing() {
        let mut engine = HosEngine::new(75.0);

        assert_eq!(engine.allocate_driving_time(4.0), 4.0);
        assert_eq!(engine.cycle_hours(), 75.0);
        assert_eq!(engine.remaining_cycle(), 0.0);
        assert!(engine.log().is_empty());
    }

    #[test]
    fn test_negative_and_nan_requests_change_nothing() {
        let mut engine = HosEngine::new(0.0);

        assert_eq!(engine.allocate_driving_time(-2.0), -2.0);
        assert_eq!(engine.allocate_driving_time(0.0), 0.0);
        assert!(engine.allocate_driving_time(f64::NAN).is_nan());

        assert_eq!(engine.counters(), DayCounters::default());
        assert!(engine.log().is_empty());
    }

    #[test]
    fn test_limits_hold_over_many_allocations() {
        let mut engine = HosEngine::new(60.0);

        for step in [0.7, 1.3, 2.25, 0.01, 3.0, 4.4, 0.33, 2.0, 5.0] {
            let leftover = engine.allocate_driving_time(step);
            assert!(leftover >= 0.0 && leftover <= step);
            assert_within_limits(&engine);
        }

        assert_eq!(engine.cycle_hours(), 70.0);
    }

    #[test]
    fn test_driving_entry_rounded() {
        let mut engine = HosEngine::new(0.0);
        engine.allocate_driving_time(1.0 / 3.0);

        assert_eq!(engine.log()[0].hours, 0.33);
        // Counters are not rounded
        assert_eq!(engine.driving_hours(), 1.0 / 3.0);
    }

    #[test]
    fn test_driving_entry_ties_round_to_even() {
        let mut engine = HosEngine::new(0.0);
        engine.allocate_driving_time(0.125);
        engine.allocate_driving_time(2.375);

        let hours: Vec<f64> = engine.log().iter().map(|e| e.hours).collect();
        assert_eq!(hours, vec![0.12, 2.38]);
        assert_eq!(engine.driving_hours(), 2.5);
    }

    #[test]
    fn test_rest_break_once_per_day() {
        let mut engine = HosEngine::new(0.0);
        engine.allocate_driving_time(8.0);
        assert!(engine.rest_break_due());

        assert!(engine.take_rest_break());
        assert_eq!(engine.log().len(), 2);
        assert_eq!(engine.log()[1], LogEntry::off_duty(0.5));
        assert_eq!(engine.off_duty_hours(), 0.5);
        assert_eq!(engine.on_duty_since_break(), 0.0);
        assert!(!engine.rest_break_due());

        assert!(!engine.take_rest_break());
        assert_eq!(engine.log().len(), 2);
        assert_eq!(engine.off_duty_hours(), 0.5);
    }

    #[test]
    fn test_rest_break_does_not_pause_on_duty() {
        let mut engine = HosEngine::new(10.0);
        engine.allocate_driving_time(4.0);
        engine.take_rest_break();

        assert_eq!(engine.on_duty_hours(), 4.0);
        assert_eq!(engine.driving_hours(), 4.0);
        assert_eq!(engine.cycle_hours(), 14.0);
    }

    #[test]
    fn test_rest_break_is_advisory() {
        let mut engine = HosEngine::new(0.0);
        engine.allocate_driving_time(9.0);

        // Past the threshold without a break, driving still allocates
        assert!(engine.rest_break_due());
        assert_eq!(engine.allocate_driving_time(1.0), 0.0);
        assert_eq!(engine.driving_hours(), 10.0);
    }

    #[test]
    fn test_drive_break_close_scenario() {
        let mut engine = HosEngine::new(0.0);
        engine.allocate_driving_time(5.0);
        engine.take_rest_break();

        assert!(engine.end_day_with_rest());

        let log = engine.log();
        assert_eq!(log.len(), 3);
        assert_eq!(log[0], LogEntry::driving(5.0));
        assert_eq!(log[1], LogEntry::off_duty(0.5));
        assert_eq!(log[2].status, DutyStatus::SleeperBerth);
        assert_eq!(log[2].hours, 13.5);
    }

    #[test]
    fn test_on_duty_only_accounting_fills_day() {
        let mut engine =
            HosEngine::with_limits(HosLimits::default(), DayCloseAccounting::OnDutyOnly, 0.0);
        engine.allocate_driving_time(5.0);
        engine.take_rest_break();

        assert!(engine.end_day_with_rest());
        assert_eq!(engine.log()[2], LogEntry::sleeper_berth(18.5));

        let total: f64 = engine.log().iter().map(|e| e.hours).sum();
        assert_eq!(total, 24.0);
    }

    #[test]
    fn test_end_day_when_full() {
        let mut engine = HosEngine::new(0.0);
        engine.allocate_driving_time(11.0);
        engine.take_rest_break();

        // Legacy total: 11 + 11 + 0.5 = 22.5
        assert!(engine.end_day_with_rest());
        assert_eq!(engine.log().last(), Some(&LogEntry::sleeper_berth(1.5)));

        let limits = HosLimits {
            max_driving_hours: 12.0,
            max_on_duty_hours: 14.0,
            ..Default::default()
        };
        let mut engine = HosEngine::with_limits(limits, DayCloseAccounting::Legacy, 0.0);
        engine.allocate_driving_time(12.0);

        // 12 + 12 = 24: nothing left to pad
        assert!(!engine.end_day_with_rest());
        assert_eq!(engine.log().len(), 1);
    }

    #[test]
    fn test_empty_day_closes_with_full_rest() {
        let mut engine = HosEngine::new(0.0);
        assert!(engine.end_day_with_rest());
        assert_eq!(engine.log(), &[LogEntry::sleeper_berth(24.0)]);
    }

    #[test]
    fn test_reset_preserves_cycle_and_log() {
        let mut engine = HosEngine::new(20.0);
        engine.allocate_driving_time(6.0);
        engine.take_rest_break();
        engine.end_day_with_rest();
        let log_len = engine.log().len();

        engine.reset_for_new_day();

        assert_eq!(engine.cycle_hours(), 26.0);
        assert_eq!(engine.driving_hours(), 0.0);
        assert_eq!(engine.on_duty_hours(), 0.0);
        assert_eq!(engine.off_duty_hours(), 0.0);
        assert_eq!(engine.on_duty_since_break(), 0.0);
        assert!(!engine.rest_break_taken());
        assert_eq!(engine.log().len(), log_len);

        // Break is available again
        assert!(engine.take_rest_break());
    }

    #[test]
    fn test_new_day_restores_daily_allowance() {
        let mut engine = HosEngine::new(0.0);
        assert_eq!(engine.allocate_driving_time(15.0), 4.0);

        engine.end_day_with_rest();
        engine.reset_for_new_day();

        assert_eq!(engine.allocate_driving_time(4.0), 0.0);
        assert_eq!(engine.cycle_hours(), 15.0);
        assert_eq!(engine.remaining_driving(), 7.0);
        assert_eq!(engine.remaining_on_duty(), 10.0);
        assert_eq!(engine.remaining_cycle(), 55.0);
    }

    #[test]
    fn test_try_new_rejects_bad_cycle() {
        let policy = HosPolicy::default();

        assert!(HosEngine::try_new(&policy, 0.0).is_ok());
        assert!(matches!(
            HosEngine::try_new(&policy, -1.0),
            Err(HosError::InvalidCycleHours(_))
        ));
        assert!(HosEngine::try_new(&policy, f64::INFINITY).is_err());
    }

    #[test]
    fn test_with_policy_uses_configured_limits() {
        let policy = hos_config::parse_config(
            "config_version = 1\n[limits]\nmax_driving_hours = 10.0\n",
        )
        .unwrap();
        let mut engine = HosEngine::with_policy(&policy, 0.0);

        assert_eq!(engine.allocate_driving_time(11.0), 1.0);
        assert_eq!(engine.limits().max_driving_hours, 10.0);
    }
}
