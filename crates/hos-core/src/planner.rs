//! Day-by-day trip planning on top of the accounting engine

use hos_api::DailySheet;
use hos_config::HosPolicy;
use hos_util::{HOURS_EPSILON, HosError, is_negligible};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::HosEngine;

/// Why planning stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanOutcome {
    /// Every requested driving hour was scheduled
    Completed,
    /// The rolling cycle has no hours left; driving cannot resume without a restart
    CycleExhausted,
    /// The configured maximum number of days was reached
    DayLimitReached,
}

/// Result of planning a trip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripPlan {
    pub outcome: PlanOutcome,
    pub hours_requested: f64,
    pub hours_driven: f64,
    pub hours_remaining: f64,
    pub starting_cycle_hours: f64,
    pub final_cycle_hours: f64,
    pub daily_sheets: Vec<DailySheet>,
}

impl TripPlan {
    pub fn days(&self) -> usize {
        self.daily_sheets.len()
    }

    pub fn is_complete(&self) -> bool {
        self.outcome == PlanOutcome::Completed
    }
}

/// Schedule `driving_hours` of driving into consecutive duty days.
///
/// Each day drives up to the break threshold, takes the day's rest break if
/// more driving remains, keeps driving until a limit binds, then closes the
/// day with rest and starts the next one.
pub fn plan_trip(
    policy: &HosPolicy,
    starting_cycle_hours: f64,
    driving_hours: f64,
) -> hos_util::Result<TripPlan> {
    let driving_hours = HosError::check_request(driving_hours)?;
    let mut engine = HosEngine::try_new(policy, starting_cycle_hours)?;

    let mut remaining = driving_hours;
    let mut daily_sheets = Vec::new();
    let mut outcome = PlanOutcome::Completed;

    while remaining > HOURS_EPSILON {
        if daily_sheets.len() >= policy.planner.max_days as usize {
            outcome = PlanOutcome::DayLimitReached;
            break;
        }
        if is_negligible(engine.remaining_cycle()) {
            outcome = PlanOutcome::CycleExhausted;
            break;
        }

        let day = daily_sheets.len() as u32 + 1;
        let log_start = engine.log().len();

        let driven = drive_one_day(&mut engine, remaining);
        remaining -= driven;
        engine.end_day_with_rest();

        let sheet = DailySheet::new(day, &engine.counters(), &engine.log()[log_start..]);
        info!(
            day,
            driven,
            remaining,
            cycle_hours = engine.cycle_hours(),
            segments = sheet.duty_segments.len(),
            "Planned duty day"
        );
        daily_sheets.push(sheet);

        engine.reset_for_new_day();
    }

    let hours_remaining = remaining.max(0.0);
    info!(
        outcome = ?outcome,
        days = daily_sheets.len(),
        hours_remaining,
        "Trip planning finished"
    );

    Ok(TripPlan {
        outcome,
        hours_requested: driving_hours,
        hours_driven: driving_hours - hours_remaining,
        hours_remaining,
        starting_cycle_hours,
        final_cycle_hours: engine.cycle_hours(),
        daily_sheets,
    })
}

/// Drive as much of `remaining` as today allows. Returns the hours driven.
fn drive_one_day(engine: &mut HosEngine, mut remaining: f64) -> f64 {
    let start = remaining;

    loop {
        let chunk = if engine.rest_break_taken() {
            remaining
        } else {
            let until_break =
                engine.limits().rest_break_required_after - engine.on_duty_since_break();
            if until_break > HOURS_EPSILON {
                remaining.min(until_break)
            } else {
                remaining
            }
        };

        let granted = chunk - engine.allocate_driving_time(chunk);
        remaining -= granted;

        if remaining <= HOURS_EPSILON {
            break;
        }
        if engine.rest_break_due() && engine.take_rest_break() {
            continue;
        }
        if granted <= HOURS_EPSILON {
            debug!(remaining, "Daily limit reached");
            break;
        }
    }

    start - remaining
}
