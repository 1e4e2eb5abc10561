//! Hour arithmetic for duty-status accounting
//!
//! All HOS counters are fractional hours (`f64`). Log entries carry values
//! rounded to hundredths of an hour; counters themselves are never rounded,
//! so rounding only affects what is displayed on a log sheet.

/// Length of one duty day in hours
pub const HOURS_PER_DAY: f64 = 24.0;

/// Tolerance used when deciding whether a fractional hour value is "zero".
///
/// Repeated additions of fractional hours drift by a few ULPs; anything below
/// this is treated as nothing left to do.
pub const HOURS_EPSILON: f64 = 1e-9;

/// Round an hour value to two decimal places.
///
/// Exact ties go to the even hundredth, so 0.125 h logs as 0.12 h and
/// 0.375 h as 0.38 h.
pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round_ties_even() / 100.0
}

/// Returns true if `hours` is indistinguishable from zero.
pub fn is_negligible(hours: f64) -> bool {
    hours.abs() < HOURS_EPSILON
}

/// Format an hour value as `HhMMm` for display (e.g. `5.25` -> `5h15m`).
pub fn format_hours(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let sign = if total_minutes < 0 { "-" } else { "" };
    let total_minutes = total_minutes.abs();
    format!("{}{}h{:02}m", sign, total_minutes / 60, total_minutes % 60)
}
