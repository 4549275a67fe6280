// ABOUTME: Session RPE load statistics over ISO training weeks
// ABOUTME: Weekly totals, Foster monotony and strain, week-over-week change and warning flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session Load (sRPE)
//!
//! Session load is `round(duration_minutes x RPE)` per completed session.
//! Weekly statistics follow Foster's method:
//!
//! - Monotony: mean daily load divided by its standard deviation across the
//!   seven days of the current week (rest days count as zero)
//! - Strain: weekly load multiplied by monotony
//!
//! When the daily loads have no spread, monotony and strain are reported as
//! zero rather than undefined, and the monotony warning therefore stays off.
//!
//! # Scientific References
//!
//! - Foster, C. (1998). "Monitoring training in athletes with reference to overtraining syndrome."
//!   *Medicine & Science in Sports & Exercise*, 30(7), 1164-1168.

use pierre_core::constants::{session_load, windows};
use pierre_core::math::{mean, population_std_dev, round_to};
use pierre_core::models::{CompletedSession, DateRange};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Load totals for one previous week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyLoad {
    /// `-1` for last week, `-2` for the week before, ...
    pub week_offset: i64,
    /// Sum of session loads
    pub total_load: i64,
    /// Number of sessions
    pub session_count: usize,
}

/// Session load statistics for the current week against previous weeks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionLoadResult {
    /// Sum of session loads in the current week
    pub current_weekly_total: i64,
    /// Sessions in the current week
    pub current_session_count: usize,
    /// Foster monotony, 2 decimals
    pub monotony: f64,
    /// Foster strain, 1 decimal
    pub strain: f64,
    /// Previous weeks, most recent first
    pub previous_weeks: Vec<WeeklyLoad>,
    /// Change against last week in percent, 1 decimal
    pub week_over_week_change_pct: f64,
    /// `|change| > 15%`
    pub week_over_week_warning: bool,
    /// `monotony > 2.0`
    pub monotony_warning: bool,
}

/// Monotony and strain of one week
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonotonyStrain {
    /// Mean daily load over its standard deviation
    pub monotony: f64,
    /// Weekly load times monotony
    pub strain: f64,
}

/// Computes sRPE statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionLoadCalculator;

impl SessionLoadCalculator {
    /// Compute statistics for `current_week` and `previous_weeks` (most recent first)
    #[must_use]
    pub fn calculate(
        sessions: &[CompletedSession],
        current_week: &DateRange,
        previous_weeks: &[DateRange],
    ) -> SessionLoadResult {
        let (current_weekly_total, current_session_count) =
            Self::week_totals(sessions, current_week);
        let MonotonyStrain { monotony, strain } = Self::monotony_strain(sessions, current_week);

        let previous_weeks: Vec<WeeklyLoad> = previous_weeks
            .iter()
            .zip(1_i64..)
            .map(|(week, offset)| {
                let (total_load, session_count) = Self::week_totals(sessions, week);
                WeeklyLoad {
                    week_offset: -offset,
                    total_load,
                    session_count,
                }
            })
            .collect();

        let previous_total = previous_weeks.first().map_or(0, |week| week.total_load);
        let week_over_week_change_pct =
            Self::week_over_week_change(current_weekly_total, previous_total);

        let result = SessionLoadResult {
            current_weekly_total,
            current_session_count,
            monotony,
            strain,
            previous_weeks,
            week_over_week_change_pct,
            week_over_week_warning: week_over_week_change_pct.abs()
                > session_load::WEEK_OVER_WEEK_WARNING_PCT,
            monotony_warning: monotony > session_load::MONOTONY_WARNING_THRESHOLD,
        };

        debug!(
            current_weekly_total,
            current_session_count,
            monotony,
            strain,
            week_over_week_change_pct,
            "Calculated session load"
        );
        result
    }

    /// Total session load and session count inside `week`
    #[must_use]
    pub fn week_totals(sessions: &[CompletedSession], week: &DateRange) -> (i64, usize) {
        sessions
            .iter()
            .filter(|session| week.contains(session.completed_at))
            .fold((0, 0), |(total, count), session| {
                (total + session.session_load(), count + 1)
            })
    }

    /// Foster monotony and strain over the seven days starting at `week.from`
    ///
    /// Sessions outside `week` are ignored.
    #[must_use]
    pub fn monotony_strain(sessions: &[CompletedSession], week: &DateRange) -> MonotonyStrain {
        const ZERO: MonotonyStrain = MonotonyStrain {
            monotony: 0.0,
            strain: 0.0,
        };

        let mut daily_loads = [0.0_f64; windows::DAYS_PER_WEEK as usize];
        for session in sessions
            .iter()
            .filter(|session| week.contains(session.completed_at))
        {
            let slot = week.days_since_start(session.completed_at);
            if let Some(load) = usize::try_from(slot)
                .ok()
                .and_then(|slot| daily_loads.get_mut(slot))
            {
                *load += session.session_load() as f64;
            }
        }

        let daily_mean = mean(&daily_loads);
        if daily_mean <= 0.0 {
            return ZERO;
        }
        let std_dev = population_std_dev(&daily_loads, daily_mean);
        if std_dev <= f64::EPSILON {
            return ZERO;
        }

        let monotony = round_to(daily_mean / std_dev, session_load::MONOTONY_DECIMALS);
        let weekly_load: f64 = daily_loads.iter().sum();
        MonotonyStrain {
            monotony,
            strain: round_to(weekly_load * monotony, session_load::STRAIN_DECIMALS),
        }
    }

    /// Percentage change against the previous total, `0.0` without a positive baseline
    #[must_use]
    pub fn week_over_week_change(current_total: i64, previous_total: i64) -> f64 {
        if previous_total <= 0 {
            return 0.0;
        }
        let change = (current_total - previous_total) as f64 / previous_total as f64 * 100.0;
        round_to(change, session_load::CHANGE_PCT_DECIMALS)
    }
}
