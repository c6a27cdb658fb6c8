//! Shift type seed configuration loading from config.toml
//!
//! The `[[shifts]]` entries in config.toml describe the shift types a fresh
//! installation starts with. Seeding only inserts codes that do not exist yet,
//! so edits made later through the bot are never overwritten.

use crate::errors::{Error, Result};
use chrono::NaiveTime;
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Shift types to seed
    #[serde(default)]
    pub shifts: Vec<ShiftConfig>,
}

/// Configuration for a single shift type
#[derive(Debug, Deserialize, Clone)]
pub struct ShiftConfig {
    /// Unique short code (e.g. "M")
    pub code: String,
    /// Display name
    pub name: String,
    /// Start time as `HH:MM`
    pub start: String,
    /// End time as `HH:MM`
    pub end: String,
    /// People needed on the shift
    #[serde(default = "default_required_staff")]
    pub required_staff: i32,
    /// Stored as-is, not used by any logic
    #[serde(default = "default_fairness_weight")]
    pub fairness_weight: i32,
    /// Whether the shift type starts active
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_required_staff() -> i32 {
    2
}

const fn default_fairness_weight() -> i32 {
    1
}

const fn default_active() -> bool {
    true
}

impl ShiftConfig {
    /// Parses `start` and `end` into times.
    pub fn times(&self) -> Result<(NaiveTime, NaiveTime)> {
        let parse = |value: &str| {
            NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|e| Error::Config {
                message: format!("Invalid time '{value}' for shift '{}': {e}", self.code),
            })
        };
        Ok((parse(&self.start)?, parse(&self.end)?))
    }
}

/// Loads shift configuration from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the config file named by `CONFIG_PATH` (default `./config.toml`).
///
/// A missing file is not an error: the installation simply starts without
/// seeded shift types.
pub fn load_default_config() -> Result<Config> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if !Path::new(&path).exists() {
        tracing::info!("No config file at {path}, skipping shift seeding");
        return Ok(Config::default());
    }
    load_config(path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_shift_config() {
        let toml_str = r#"
            [[shifts]]
            code = "M"
            name = "Morning"
            start = "09:00"
            end = "13:30"
            required_staff = 2

            [[shifts]]
            code = "T"
            name = "Afternoon"
            start = "16:30"
            end = "20:30"
            fairness_weight = 2
            active = false
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.shifts.len(), 2);
        assert_eq!(config.shifts[0].code, "M");
        assert_eq!(config.shifts[0].fairness_weight, 1);
        assert!(config.shifts[0].active);

        assert_eq!(config.shifts[1].required_staff, 2);
        assert_eq!(config.shifts[1].fairness_weight, 2);
        assert!(!config.shifts[1].active);

        let (start, end) = config.shifts[0].times().unwrap();
        assert_eq!(start, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(end, NaiveTime::from_hms_opt(13, 30, 0).unwrap());
    }

    #[test]
    fn test_empty_config_has_no_shifts() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.shifts.is_empty());
    }

    #[test]
    fn test_invalid_time_is_config_error() {
        let shift = ShiftConfig {
            code: "X".to_string(),
            name: "Broken".to_string(),
            start: "9am".to_string(),
            end: "13:00".to_string(),
            required_staff: 1,
            fairness_weight: 1,
            active: true,
        };
        assert!(matches!(shift.times(), Err(Error::Config { .. })));
    }
}
