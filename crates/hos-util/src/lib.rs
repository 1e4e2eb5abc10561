//! Shared utilities for the HOS engine
//!
//! This crate provides:
//! - Hour arithmetic (log rounding, tolerance comparisons)
//! - Error types
//! - Default paths for configuration

mod error;
mod hours;
mod paths;

pub use error::*;
pub use hours::*;
pub use paths::*;
