// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Fixed thresholds, defaults and unit factors used by the workload engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Classification thresholds here are part of the engine's output contract:
//! consumers compare against them, so they are constants rather than
//! configuration. Window lengths and fallback values have configurable
//! counterparts in `pierre_intelligence::config`, seeded from this module.

/// Default time windows (days / weeks)
pub mod windows {
    /// Acute load window (ACWR numerator)
    pub const ACUTE_WINDOW_DAYS: i64 = 7;
    /// Chronic load window (ACWR denominator before weekly normalization)
    pub const CHRONIC_WINDOW_DAYS: i64 = 28;
    /// Weeks considered by the volume and session trend, current week included
    pub const TREND_WEEKS: usize = 4;
    /// Length of each strength progression comparison period
    pub const PROGRESSION_PERIOD_DAYS: i64 = 28;
    /// How far back muscle load snapshots are read for recovery estimation
    pub const RECOVERY_LOOKBACK_DAYS: i64 = 4;
    /// Days per training week
    pub const DAYS_PER_WEEK: i64 = 7;
}

/// Session RPE load thresholds
///
/// Foster, C. (1998). Monitoring training in athletes with reference to overtraining syndrome.
/// *Medicine & Science in Sports & Exercise*, 30(7), 1164-1168.
pub mod session_load {
    /// Absolute week-over-week change (percent) above which a warning is raised
    pub const WEEK_OVER_WEEK_WARNING_PCT: f64 = 15.0;
    /// Monotony above which a warning is raised
    pub const MONOTONY_WARNING_THRESHOLD: f64 = 2.0;
    /// Decimal places for monotony
    pub const MONOTONY_DECIMALS: i32 = 2;
    /// Decimal places for strain
    pub const STRAIN_DECIMALS: i32 = 1;
    /// Decimal places for week-over-week change
    pub const CHANGE_PCT_DECIMALS: i32 = 1;
}

/// Set-volume trend thresholds relative to the rolling average
pub mod volume_trend {
    /// Current week above `average * INCREASING_FACTOR` is increasing
    pub const INCREASING_FACTOR: f64 = 1.1;
    /// Current week below `average * DECREASING_FACTOR` is decreasing
    pub const DECREASING_FACTOR: f64 = 0.9;
}

/// Acute:chronic workload ratio zone boundaries
///
/// Gabbett, T.J. (2016). The training-injury prevention paradox.
/// *British Journal of Sports Medicine*, 50(5), 273-280.
pub mod acwr {
    /// Ratios below this value indicate undertraining
    pub const SWEET_SPOT_MIN: f64 = 0.8;
    /// Upper (inclusive) bound of the sweet spot
    pub const SWEET_SPOT_MAX: f64 = 1.3;
    /// Upper (inclusive) bound of the caution zone; above is danger
    pub const CAUTION_MAX: f64 = 1.5;
    /// Decimal places for the ratio
    pub const RATIO_DECIMALS: i32 = 2;
}

/// Fallback values for the per-exercise volume metric
pub mod volume_defaults {
    /// RPE assumed when an exercise has no target RPE
    pub const DEFAULT_RPE: f64 = 5.0;
    /// Heart rate zone assumed when a cardio exercise has none
    pub const DEFAULT_HEART_RATE_ZONE: u8 = 3;
    /// RPE scale maximum
    pub const RPE_SCALE: f64 = 10.0;
    /// Heart rate zone scale maximum
    pub const HEART_RATE_ZONE_SCALE: f64 = 5.0;
    /// Cardio minutes are divided by this to keep cardio comparable to set volume
    pub const CARDIO_MINUTES_DIVISOR: f64 = 10.0;
}

/// Estimated one-rep-max
pub mod strength {
    /// Epley: `weight * (1 + reps / EPLEY_REPS_DIVISOR)`
    pub const EPLEY_REPS_DIVISOR: f64 = 30.0;
}

/// Structured-workout muscle load attribution
pub mod muscle_load {
    /// Effort applied to exercise entries without an RPE target
    pub const DEFAULT_EFFORT: f64 = 0.6;
}

/// Linear-decay muscle recovery model
pub mod recovery {
    /// Snapshots with load below this recover in `LIGHT_RECOVERY_HOURS`
    pub const LIGHT_LOAD_MAX: f64 = 30.0;
    /// Snapshots with load below this recover in `MODERATE_RECOVERY_HOURS`
    pub const MODERATE_LOAD_MAX: f64 = 70.0;
    /// Recovery time for light loads
    pub const LIGHT_RECOVERY_HOURS: f64 = 24.0;
    /// Recovery time for moderate loads
    pub const MODERATE_RECOVERY_HOURS: f64 = 48.0;
    /// Recovery time for heavy loads
    pub const HEAVY_RECOVERY_HOURS: f64 = 72.0;
    /// Fatigue at or below this is fresh
    pub const FRESH_MAX: f64 = 20.0;
    /// Fatigue at or below this (and above fresh) is recovering
    pub const RECOVERING_MAX: f64 = 50.0;
    /// Fatigue strictly below this allows heavy training
    pub const READY_FOR_HEAVY_BELOW: f64 = 15.0;
}

/// Unit conversion factors
pub mod units {
    /// Seconds per minute
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
    /// Seconds per hour
    pub const SECONDS_PER_HOUR: f64 = 3600.0;
    /// Meters per kilometer
    pub const METERS_PER_KM: f64 = 1000.0;
}
