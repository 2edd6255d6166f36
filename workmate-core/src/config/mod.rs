//! Configuration types for Workmate

use crate::system::paths::{default_config_path, CONFIG_ENV};
use crate::types::OutputFormat;
use crate::WorkmateError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Field separator, a single ASCII character
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

// Default value functions
fn default_delimiter() -> char { ',' }

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

impl InputConfig {
    /// Delimiter as the byte the CSV reader expects
    pub fn delimiter_byte(&self) -> Result<u8, WorkmateError> {
        delimiter_byte(self.delimiter)
    }
}

/// Validate a delimiter character and convert it to a byte
pub fn delimiter_byte(delimiter: char) -> Result<u8, WorkmateError> {
    if delimiter.is_ascii() && delimiter != '\n' && delimiter != '\r' && delimiter != '"' {
        Ok(delimiter as u8)
    } else {
        Err(WorkmateError::Configuration(format!(
            "delimiter must be a single ASCII character other than a quote or newline, got {:?}",
            delimiter
        )))
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), WorkmateError> {
        self.input.delimiter_byte().map(|_| ())
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, WorkmateError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| {
        WorkmateError::Configuration(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| WorkmateError::Configuration(format!("Failed to parse config: {}", e)))?;
    config.validate()?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), WorkmateError> {
    let path = path.as_ref();
    let contents = toml::to_string_pretty(config)
        .map_err(|e| WorkmateError::Configuration(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents).map_err(|e| {
        WorkmateError::Configuration(format!("Failed to write {}: {}", path.display(), e))
    })?;
    Ok(())
}

/// Where the effective configuration comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named on the command line or via WORKMATE_CONFIG; must exist
    Explicit(PathBuf),
    /// The home config file; used only when present
    Implicit(PathBuf),
}

/// Pick the configuration file: flag, then environment, then home.
pub fn config_source(flag: Option<&Path>, env_value: Option<PathBuf>, home_config: PathBuf) -> ConfigSource {
    match (flag, env_value) {
        (Some(path), _) => ConfigSource::Explicit(path.to_path_buf()),
        (None, Some(path)) if !path.as_os_str().is_empty() => ConfigSource::Explicit(path),
        _ => ConfigSource::Implicit(home_config),
    }
}

/// Resolve and load the effective configuration
pub fn resolve_config(flag: Option<&Path>) -> Result<Config, WorkmateError> {
    let env_value = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    match config_source(flag, env_value, default_config_path()) {
        ConfigSource::Explicit(path) => {
            tracing::debug!("Loading configuration from {}", path.display());
            load_config(path)
        }
        ConfigSource::Implicit(path) if path.is_file() => {
            tracing::debug!("Loading configuration from {}", path.display());
            load_config(path)
        }
        ConfigSource::Implicit(_) => Ok(default_config()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.input.delimiter, ',');
        assert_eq!(config.output.format, OutputFormat::Table);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[input]\ndelimiter = \";\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.input.delimiter, ';');
        assert_eq!(config.output.format, OutputFormat::Table);
    }

    #[test]
    fn test_output_format_from_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"json\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_save_and_reload() {
        let file = NamedTempFile::new().unwrap();
        let mut config = Config::default();
        config.input.delimiter = '\t';
        config.output.format = OutputFormat::Csv;

        save_config(file.path(), &config).unwrap();
        let loaded = load_config(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[input\ndelimiter = ").unwrap();

        match load_config(file.path()) {
            Err(WorkmateError::Configuration(msg)) => assert!(msg.contains("Failed to parse")),
            other => panic!("Expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[input]\ndelimiter = \"§\"").unwrap();

        assert!(matches!(
            load_config(file.path()),
            Err(WorkmateError::Configuration(_))
        ));
        assert!(delimiter_byte('"').is_err());
        assert_eq!(delimiter_byte('|').unwrap(), b'|');
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(WorkmateError::Configuration(_))));
    }

    #[test]
    fn test_config_source_precedence() {
        let home = PathBuf::from("/home/u/.workmate/config.toml");
        let flag = PathBuf::from("flag.toml");

        assert_eq!(
            config_source(Some(&flag), Some(PathBuf::from("env.toml")), home.clone()),
            ConfigSource::Explicit(flag.clone())
        );
        assert_eq!(
            config_source(None, Some(PathBuf::from("env.toml")), home.clone()),
            ConfigSource::Explicit(PathBuf::from("env.toml"))
        );
        assert_eq!(
            config_source(None, Some(PathBuf::new()), home.clone()),
            ConfigSource::Implicit(home.clone())
        );
        assert_eq!(config_source(None, None, home.clone()), ConfigSource::Implicit(home));
    }
}
