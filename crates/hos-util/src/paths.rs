//! Default paths for HOS components
//!
//! Paths are user-writable by default:
//! - Config: `$XDG_CONFIG_HOME/hos/config.toml` or `~/.config/hos/config.toml`

use std::path::PathBuf;

/// Environment variable for overriding the config file path
pub const HOS_CONFIG_ENV: &str = "HOS_CONFIG";

/// Config filename within the config directory
const CONFIG_FILENAME: &str = "config.toml";

/// Application subdirectory name
const APP_DIR: &str = "hos";

/// Get the default config file path.
///
/// Order of precedence:
/// 1. `$HOS_CONFIG` environment variable (if set)
/// 2. `$XDG_CONFIG_HOME/hos/config.toml` (if XDG_CONFIG_HOME is set)
/// 3. `~/.config/hos/config.toml` (fallback)
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(HOS_CONFIG_ENV) {
        return PathBuf::from(path);
    }

    config_path_without_env()
}

/// Get the config path without checking the HOS_CONFIG env var.
pub fn config_path_without_env() -> PathBuf {
    if let Ok(config_home) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(config_home).join(APP_DIR).join(CONFIG_FILENAME);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home)
            .join(".config")
            .join(APP_DIR)
            .join(CONFIG_FILENAME);
    }

    // Last resort
    PathBuf::from("/etc").join(APP_DIR).join(CONFIG_FILENAME)
}
