//! Hours-of-service accounting engine for a commercial driver's duty day
//!
//! This crate contains:
//! - The accounting engine (driving allocation against the daily driving,
//!   on-duty window and rolling cycle limits; rest break; day close; reset)
//! - A trip planner that drives the engine day by day and produces daily
//!   log sheets

mod engine;
mod planner;

pub use engine::*;
pub use planner::*;
