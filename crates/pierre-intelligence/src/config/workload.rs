// ABOUTME: Workload engine configuration: time windows and volume fallback values
// ABOUTME: Defaults from pierre-core constants, PIERRE_WORKLOAD_* environment overrides, validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workload Configuration
//!
//! Window lengths and fallback values used by the orchestration layer. All
//! values can be overridden via environment variables with the
//! `PIERRE_WORKLOAD_` prefix. Classification thresholds are deliberately not
//! part of this struct; see `pierre_core::constants`.

use std::env;
use std::str::FromStr;

use pierre_core::constants::{volume_defaults, windows};
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Environment variable prefix for overrides
const ENV_PREFIX: &str = "PIERRE_WORKLOAD_";

/// Fallbacks used by the per-exercise volume metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeDefaults {
    /// RPE assumed when an exercise carries none
    pub rpe: f64,
    /// Heart rate zone assumed for cardio without one
    pub heart_rate_zone: u8,
}

impl Default for VolumeDefaults {
    fn default() -> Self {
        Self {
            rpe: volume_defaults::DEFAULT_RPE,
            heart_rate_zone: volume_defaults::DEFAULT_HEART_RATE_ZONE,
        }
    }
}

/// Workload engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Acute window (days before the reference time)
    pub acute_window_days: i64,
    /// Chronic window (days before the reference time), a whole number of weeks
    pub chronic_window_days: i64,
    /// Weeks in the session/volume trend, current week included
    pub trend_weeks: usize,
    /// Length of each strength progression period
    pub progression_period_days: i64,
    /// Snapshot lookback for muscle recovery
    pub recovery_lookback_days: i64,
    /// Volume metric fallbacks
    pub volume_defaults: VolumeDefaults,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            acute_window_days: windows::ACUTE_WINDOW_DAYS,
            chronic_window_days: windows::CHRONIC_WINDOW_DAYS,
            trend_weeks: windows::TREND_WEEKS,
            progression_period_days: windows::PROGRESSION_PERIOD_DAYS,
            recovery_lookback_days: windows::RECOVERY_LOOKBACK_DAYS,
            volume_defaults: VolumeDefaults::default(),
        }
    }
}

impl WorkloadConfig {
    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.acute_window_days <= 0 {
            return Err(ConfigError::ValueOutOfRange("acute_window_days must be > 0"));
        }
        if self.chronic_window_days <= 0 || self.chronic_window_days % windows::DAYS_PER_WEEK != 0
        {
            return Err(ConfigError::ValueOutOfRange(
                "chronic_window_days must be a positive multiple of 7",
            ));
        }
        if self.chronic_window_days < self.acute_window_days {
            return Err(ConfigError::InvalidRange(
                "chronic_window_days must be >= acute_window_days",
            ));
        }
        if self.trend_weeks == 0 {
            return Err(ConfigError::ValueOutOfRange("trend_weeks must be >= 1"));
        }
        if self.progression_period_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "progression_period_days must be > 0",
            ));
        }
        if self.recovery_lookback_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "recovery_lookback_days must be > 0",
            ));
        }
        let rpe = self.volume_defaults.rpe;
        if !(rpe > 0.0 && rpe <= volume_defaults::RPE_SCALE) {
            return Err(ConfigError::ValueOutOfRange("default rpe must be in (0, 10]"));
        }
        if !(1..=5).contains(&self.volume_defaults.heart_rate_zone) {
            return Err(ConfigError::ValueOutOfRange(
                "default heart_rate_zone must be in 1..=5",
            ));
        }
        Ok(())
    }

    /// Chronic window expressed in weeks (ACWR normalization divisor)
    #[must_use]
    pub fn chronic_weeks(&self) -> f64 {
        self.chronic_window_days as f64 / windows::DAYS_PER_WEEK as f64
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(days) = env_override("ACUTE_WINDOW_DAYS")? {
            self.acute_window_days = days;
        }
        if let Some(days) = env_override("CHRONIC_WINDOW_DAYS")? {
            self.chronic_window_days = days;
        }
        if let Some(weeks) = env_override("TREND_WEEKS")? {
            self.trend_weeks = weeks;
        }
        if let Some(days) = env_override("PROGRESSION_PERIOD_DAYS")? {
            self.progression_period_days = days;
        }
        if let Some(days) = env_override("RECOVERY_LOOKBACK_DAYS")? {
            self.recovery_lookback_days = days;
        }
        if let Some(rpe) = env_override("DEFAULT_RPE")? {
            self.volume_defaults.rpe = rpe;
        }
        if let Some(zone) = env_override("DEFAULT_HEART_RATE_ZONE")? {
            self.volume_defaults.heart_rate_zone = zone;
        }
        Ok(self)
    }
}

/// Read and parse `PIERRE_WORKLOAD_<key>`; unset means no override
fn env_override<T: FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    let name = format!("{ENV_PREFIX}{key}");
    match env::var(&name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("{name}={raw}"))),
        Err(_) => Ok(None),
    }
}
