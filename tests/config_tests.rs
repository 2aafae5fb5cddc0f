//! Configuration loading and environment overrides.

mod support;

use std::path::PathBuf;

use pas_rust::config::SchedulerConfig;
use support::with_scoped_env;

fn repo_data_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join(file_name)
}

#[test]
fn from_file_reads_slot_duration() {
    let config = SchedulerConfig::from_file(repo_data_path("scheduler.toml")).unwrap();
    assert_eq!(config.scheduler.slot_duration_minutes, 120);
    assert_eq!(config.slot_duration().unwrap().minutes(), 120);
}

#[test]
fn default_location_falls_back_to_defaults() {
    // No scheduler.toml is checked in at any of the search locations.
    let config = SchedulerConfig::from_default_location().unwrap();
    assert_eq!(config.scheduler.slot_duration_minutes, 90);
}

#[test]
fn env_override_wins_over_file_value() {
    with_scoped_env(&[("SLOT_DURATION_MINUTES", Some("45"))], || {
        let mut config = SchedulerConfig::from_file(repo_data_path("scheduler.toml")).unwrap();
        config.apply_env_overrides().unwrap();
        assert_eq!(config.slot_duration().unwrap().minutes(), 45);
    });
}

#[test]
fn unset_env_leaves_config_untouched() {
    with_scoped_env(&[("SLOT_DURATION_MINUTES", None)], || {
        let mut config = SchedulerConfig::default();
        config.apply_env_overrides().unwrap();
        assert_eq!(config.scheduler.slot_duration_minutes, 90);
    });
}

#[test]
fn non_numeric_env_override_is_an_error() {
    with_scoped_env(&[("SLOT_DURATION_MINUTES", Some("ninety"))], || {
        let mut config = SchedulerConfig::default();
        assert!(config.apply_env_overrides().is_err());
    });
}
