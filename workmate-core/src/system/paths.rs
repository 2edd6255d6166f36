use std::path::PathBuf;
use std::sync::OnceLock;

// Cache the home path to avoid repeated environment lookups
static WORKMATE_HOME: OnceLock<PathBuf> = OnceLock::new();

/// Environment variable overriding the Workmate home directory
pub const HOME_ENV: &str = "WORKMATE_HOME";

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV: &str = "WORKMATE_CONFIG";

/// Get the Workmate home directory
/// Checks WORKMATE_HOME environment variable, falls back to ${HOME}/.workmate
pub fn workmate_home() -> PathBuf {
    WORKMATE_HOME
        .get_or_init(|| {
            if let Ok(path) = std::env::var(HOME_ENV) {
                PathBuf::from(path)
            } else {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".workmate")
            }
        })
        .clone()
}

/// Get the implicit configuration file location
/// Returns: WORKMATE_HOME/config.toml
pub fn default_config_path() -> PathBuf {
    workmate_home().join("config.toml")
}
