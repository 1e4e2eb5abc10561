//! Shared types for the HOS engine
//!
//! This crate defines the data handed to callers of the engine:
//! - Duty statuses and log entries
//! - Counter snapshots
//! - Daily log sheets

mod sheet;
mod types;

pub use sheet::*;
pub use types::*;
