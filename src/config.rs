//! Run configuration file support.
//!
//! Reads scheduler settings from a TOML configuration file, with
//! environment-variable overrides for one-off runs.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::SlotDuration;

/// Scheduler configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchedulerConfig {
    #[serde(default)]
    pub scheduler: SchedulerSettings,
}

/// Scheduler settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerSettings {
    /// Requested slot length in minutes, shared across the whole run.
    #[serde(default = "default_slot_duration_minutes")]
    pub slot_duration_minutes: i64,
}

fn default_slot_duration_minutes() -> i64 {
    90
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            slot_duration_minutes: default_slot_duration_minutes(),
        }
    }
}

impl SchedulerConfig {
    /// Load scheduler configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read config file: {}", path.as_ref().display())
        })?;

        let config: SchedulerConfig =
            toml::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load scheduler configuration from the default location.
    ///
    /// Searches for `scheduler.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    ///
    /// Falls back to default settings when no file exists; an unreadable or
    /// malformed file is still an error.
    pub fn from_default_location() -> Result<Self> {
        let search_paths = vec![
            PathBuf::from("scheduler.toml"),
            PathBuf::from("config/scheduler.toml"),
            PathBuf::from("../scheduler.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Apply environment-variable overrides.
    ///
    /// `SLOT_DURATION_MINUTES` overrides the configured slot length.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("SLOT_DURATION_MINUTES") {
            self.scheduler.slot_duration_minutes = val
                .parse()
                .context("SLOT_DURATION_MINUTES must be an integer minute count")?;
        }
        Ok(())
    }

    /// The configured slot duration, validated.
    pub fn slot_duration(&self) -> Result<SlotDuration> {
        SlotDuration::from_minutes(self.scheduler.slot_duration_minutes).with_context(|| {
            format!(
                "slot duration must be a positive minute count, got {}",
                self.scheduler.slot_duration_minutes
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slot_duration_is_90() {
        let config = SchedulerConfig::default();
        assert_eq!(config.scheduler.slot_duration_minutes, 90);
        assert_eq!(config.slot_duration().unwrap().minutes(), 90);
    }

    #[test]
    fn test_parse_toml_settings() {
        let config: SchedulerConfig =
            toml::from_str("[scheduler]\nslot_duration_minutes = 120\n").unwrap();
        assert_eq!(config.scheduler.slot_duration_minutes, 120);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: SchedulerConfig = toml::from_str("").unwrap();
        assert_eq!(config.scheduler.slot_duration_minutes, 90);
    }

    #[test]
    fn test_non_positive_duration_rejected() {
        let config: SchedulerConfig =
            toml::from_str("[scheduler]\nslot_duration_minutes = 0\n").unwrap();
        assert!(config.slot_duration().is_err());
    }

    #[test]
    fn test_from_file_missing_path() {
        assert!(SchedulerConfig::from_file("no/such/scheduler.toml").is_err());
    }
}
