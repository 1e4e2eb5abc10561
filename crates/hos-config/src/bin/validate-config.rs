//! Config validation CLI tool
//!
//! Validates an HOS configuration file and reports any errors.

use hos_util::{default_config_path, format_hours};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let config_path = match args.get(1) {
        Some(path) => PathBuf::from(path),
        None => {
            let default_path = default_config_path();
            eprintln!("Usage: validate-config [config-file]");
            eprintln!();
            eprintln!("Validates an HOS configuration file.");
            eprintln!();
            eprintln!("If no path is provided, uses: {}", default_path.display());
            eprintln!();
            eprintln!("Example:");
            eprintln!("  validate-config {}", default_path.display());
            return ExitCode::from(2);
        }
    };

    if !config_path.exists() {
        eprintln!("Error: Configuration file not found: {}", config_path.display());
        return ExitCode::from(1);
    }

    match hos_config::load_config(&config_path) {
        Ok(policy) => {
            let limits = &policy.limits;
            println!("✓ Configuration is valid");
            println!();
            println!("Summary:");
            println!("  Config version: {}", hos_config::CURRENT_CONFIG_VERSION);
            println!("  Max driving:    {}", format_hours(limits.max_driving_hours));
            println!("  Max on-duty:    {}", format_hours(limits.max_on_duty_hours));
            println!("  Max cycle:      {}", format_hours(limits.max_cycle_hours));
            println!(
                "  Rest break:     {} after {}",
                format_hours(limits.rest_break_min_duration),
                format_hours(limits.rest_break_required_after)
            );
            println!("  Day close:      {}", policy.day_close.as_str());
            println!("  Max plan days:  {}", policy.planner.max_days);

            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ Configuration validation failed");
            eprintln!();
            match &e {
                hos_config::ConfigError::ReadError(io_err) => {
                    eprintln!("Failed to read file: {}", io_err);
                }
                hos_config::ConfigError::ParseError(parse_err) => {
                    eprintln!("TOML parse error:");
                    eprintln!("  {}", parse_err);
                }
                hos_config::ConfigError::ValidationFailed { errors } => {
                    eprintln!("Validation errors ({}):", errors.len());
                    for err in errors {
                        eprintln!("  - {}", err);
                    }
                }
                hos_config::ConfigError::UnsupportedVersion(ver) => {
                    eprintln!(
                        "Unsupported config version: {} (expected {})",
                        ver,
                        hos_config::CURRENT_CONFIG_VERSION
                    );
                }
            }
            ExitCode::from(1)
        }
    }
}
