// ABOUTME: Tests for workload configuration defaults, environment overrides and validation
// ABOUTME: Environment-mutating tests run serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use pierre_workload::errors::{AppError, ErrorCode};
use pierre_workload::intelligence::config::{ConfigError, WorkloadConfig};
use serial_test::serial;

const OVERRIDE_KEYS: [&str; 7] = [
    "PIERRE_WORKLOAD_ACUTE_WINDOW_DAYS",
    "PIERRE_WORKLOAD_CHRONIC_WINDOW_DAYS",
    "PIERRE_WORKLOAD_TREND_WEEKS",
    "PIERRE_WORKLOAD_PROGRESSION_PERIOD_DAYS",
    "PIERRE_WORKLOAD_RECOVERY_LOOKBACK_DAYS",
    "PIERRE_WORKLOAD_DEFAULT_RPE",
    "PIERRE_WORKLOAD_DEFAULT_HEART_RATE_ZONE",
];

fn clear_overrides() {
    for key in OVERRIDE_KEYS {
        env::remove_var(key);
    }
}

#[test]
fn test_defaults() {
    let config = WorkloadConfig::default();
    assert_eq!(config.acute_window_days, 7);
    assert_eq!(config.chronic_window_days, 28);
    assert_eq!(config.trend_weeks, 4);
    assert_eq!(config.progression_period_days, 28);
    assert_eq!(config.recovery_lookback_days, 4);
    assert!((config.chronic_weeks() - 4.0).abs() < f64::EPSILON);
    assert!((config.volume_defaults.rpe - 5.0).abs() < f64::EPSILON);
    assert_eq!(config.volume_defaults.heart_rate_zone, 3);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_load_without_overrides() {
    clear_overrides();
    assert_eq!(WorkloadConfig::load().unwrap(), WorkloadConfig::default());
}

#[test]
#[serial]
fn test_env_overrides() {
    clear_overrides();
    env::set_var("PIERRE_WORKLOAD_CHRONIC_WINDOW_DAYS", "42");
    env::set_var("PIERRE_WORKLOAD_TREND_WEEKS", " 6 ");
    env::set_var("PIERRE_WORKLOAD_DEFAULT_RPE", "6.5");

    let config = WorkloadConfig::load();
    clear_overrides();

    let config = config.unwrap();
    assert_eq!(config.chronic_window_days, 42);
    assert!((config.chronic_weeks() - 6.0).abs() < f64::EPSILON);
    assert_eq!(config.trend_weeks, 6);
    assert!((config.volume_defaults.rpe - 6.5).abs() < f64::EPSILON);
    assert_eq!(config.acute_window_days, 7);
}

#[test]
#[serial]
fn test_unparsable_override() {
    clear_overrides();
    env::set_var("PIERRE_WORKLOAD_ACUTE_WINDOW_DAYS", "seven");

    let result = WorkloadConfig::load();
    clear_overrides();

    match result {
        Err(ConfigError::Parse(message)) => {
            assert!(message.contains("PIERRE_WORKLOAD_ACUTE_WINDOW_DAYS=seven"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_override_failing_validation() {
    clear_overrides();
    env::set_var("PIERRE_WORKLOAD_CHRONIC_WINDOW_DAYS", "30");

    let result = WorkloadConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
fn test_validation_rules() {
    let shorter_chronic = WorkloadConfig {
        acute_window_days: 14,
        chronic_window_days: 7,
        ..WorkloadConfig::default()
    };
    assert!(matches!(
        shorter_chronic.validate(),
        Err(ConfigError::InvalidRange(_))
    ));

    let no_trend = WorkloadConfig {
        trend_weeks: 0,
        ..WorkloadConfig::default()
    };
    assert!(no_trend.validate().is_err());

    let mut bad_zone = WorkloadConfig::default();
    bad_zone.volume_defaults.heart_rate_zone = 6;
    assert!(bad_zone.validate().is_err());

    let mut bad_rpe = WorkloadConfig::default();
    bad_rpe.volume_defaults.rpe = 0.0;
    assert!(bad_rpe.validate().is_err());

    let no_lookback = WorkloadConfig {
        recovery_lookback_days: 0,
        ..WorkloadConfig::default()
    };
    assert!(no_lookback.validate().is_err());
}

#[test]
fn test_config_error_converts_to_app_error() {
    let error: AppError = ConfigError::ValueOutOfRange("trend_weeks must be >= 1").into();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("trend_weeks"));
    assert!(error.source.is_some());
}
