//! hos-sim - trip simulator for hours-of-service planning
//!
//! Loads the regulatory limits, schedules the requested driving hours into
//! duty days with the accounting engine, and prints the resulting daily log
//! sheets as JSON.

use anyhow::{Context, Result, bail};
use clap::Parser;
use hos_config::{HosPolicy, load_config};
use hos_core::plan_trip;
use hos_util::{HOS_CONFIG_ENV, default_config_path, format_hours};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// hos-sim - Plan driving hours into HOS-compliant daily logs
#[derive(Parser, Debug)]
#[command(name = "hos-sim")]
#[command(about = "Plan driving hours into HOS-compliant daily logs", long_about = None)]
struct Args {
    /// Configuration file path (default: ~/.config/hos/config.toml)
    #[arg(short, long, env = HOS_CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Hours already used in the current rolling cycle
    #[arg(long, default_value_t = 0.0)]
    cycle_hours: f64,

    /// Total driving hours the trip needs
    #[arg(long)]
    driving_hours: f64,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn load_policy(args: &Args) -> Result<HosPolicy> {
    if let Some(path) = &args.config {
        let policy = load_config(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?;
        info!(config_path = %path.display(), "Configuration loaded");
        return Ok(policy);
    }

    let path = default_config_path();
    if path.exists() {
        let policy = load_config(&path)
            .with_context(|| format!("Failed to load config from {:?}", path))?;
        info!(config_path = %path.display(), "Configuration loaded");
        Ok(policy)
    } else {
        info!(
            config_path = %path.display(),
            "No configuration file, using federal defaults"
        );
        Ok(HosPolicy::default())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays machine-readable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "hos-sim starting");

    if args.cycle_hours < 0.0 || !args.cycle_hours.is_finite() {
        bail!("--cycle-hours must be a non-negative number (got {})", args.cycle_hours);
    }
    if args.driving_hours < 0.0 || !args.driving_hours.is_finite() {
        bail!("--driving-hours must be a non-negative number (got {})", args.driving_hours);
    }

    let policy = load_policy(&args)?;

    if args.cycle_hours > policy.limits.max_cycle_hours {
        warn!(
            cycle_hours = args.cycle_hours,
            max_cycle_hours = policy.limits.max_cycle_hours,
            "Starting cycle hours already exceed the cycle limit"
        );
    }

    let plan = plan_trip(&policy, args.cycle_hours, args.driving_hours)
        .context("Failed to plan trip")?;

    if !plan.is_complete() {
        warn!(
            outcome = ?plan.outcome,
            hours_remaining = %format_hours(plan.hours_remaining),
            "Trip could not be fully scheduled"
        );
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&plan)
    } else {
        serde_json::to_string(&plan)
    }
    .context("Failed to serialize trip plan")?;

    println!("{}", json);
    Ok(())
}
