// ABOUTME: Estimated one-rep-max progression per exercise between two periods
// ABOUTME: Epley formula, best set per period, percentage change when a baseline exists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Strength Progression
//!
//! The estimated one-rep max of a set follows Epley:
//! `e1RM = weight x (1 + reps / 30)`.
//!
//! For each exercise the best e1RM of the current period is compared with the
//! best e1RM of the previous period. Exercises without records in the current
//! period are not reported.
//!
//! # Scientific References
//!
//! - Epley, B. (1985). "Poundage Chart." *Boyd Epley Workout*. Lincoln, NE.

use std::collections::BTreeMap;

use pierre_core::constants::strength;
use pierre_core::math::round_to;
use pierre_core::models::{DateRange, StrengthRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

const E1RM_DECIMALS: i32 = 1;
const CHANGE_PCT_DECIMALS: i32 = 1;

/// Progression of one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthProgressionResult {
    /// Catalog exercise id
    pub exercise_id: String,
    /// Display name (from the most recent current-period record)
    pub exercise_name: String,
    /// Best e1RM in the current period, 1 decimal
    pub current_e1rm: f64,
    /// Best e1RM in the previous period, `None` without records
    pub previous_e1rm: Option<f64>,
    /// Change in percent, `None` without a positive baseline
    pub change_pct: Option<f64>,
    /// Records counted in the current period
    pub current_record_count: usize,
    /// Records counted in the previous period
    pub previous_record_count: usize,
}

/// Epley estimated one-rep max
#[must_use]
pub fn estimated_one_rep_max(weight: f64, reps: u32) -> f64 {
    weight * (1.0 + f64::from(reps) / strength::EPLEY_REPS_DIVISOR)
}

/// Computes e1RM progression per exercise
#[derive(Debug, Clone, Copy, Default)]
pub struct StrengthProgressionCalculator;

impl StrengthProgressionCalculator {
    /// Progression per exercise, ordered by exercise id
    #[must_use]
    pub fn calculate(
        records: &[StrengthRecord],
        current_period: &DateRange,
        previous_period: &DateRange,
    ) -> Vec<StrengthProgressionResult> {
        debug_assert!(
            !current_period.overlaps(previous_period),
            "progression periods must not overlap"
        );

        let mut by_exercise: BTreeMap<&str, Vec<&StrengthRecord>> = BTreeMap::new();
        for record in records {
            by_exercise
                .entry(record.exercise_id.as_str())
                .or_default()
                .push(record);
        }

        let results: Vec<StrengthProgressionResult> = by_exercise
            .into_iter()
            .filter_map(|(exercise_id, records)| {
                Self::progression(exercise_id, &records, current_period, previous_period)
            })
            .collect();

        debug!(
            record_count = records.len(),
            exercise_count = results.len(),
            "Calculated strength progression"
        );
        results
    }

    fn progression(
        exercise_id: &str,
        records: &[&StrengthRecord],
        current_period: &DateRange,
        previous_period: &DateRange,
    ) -> Option<StrengthProgressionResult> {
        let (current, previous): (Vec<&StrengthRecord>, Vec<&StrengthRecord>) = records
            .iter()
            .copied()
            .filter(|record| {
                current_period.contains(record.performed_at)
                    || previous_period.contains(record.performed_at)
            })
            .partition(|record| current_period.contains(record.performed_at));

        let latest = current.iter().max_by_key(|record| record.performed_at)?;
        let current_e1rm = best_e1rm(&current)?;
        let previous_e1rm = best_e1rm(&previous);

        let change_pct = previous_e1rm
            .filter(|previous| *previous > 0.0)
            .map(|previous| {
                round_to(
                    (current_e1rm - previous) / previous * 100.0,
                    CHANGE_PCT_DECIMALS,
                )
            });

        Some(StrengthProgressionResult {
            exercise_id: exercise_id.to_owned(),
            exercise_name: latest.exercise_name.clone(),
            current_e1rm: round_to(current_e1rm, E1RM_DECIMALS),
            previous_e1rm: previous_e1rm.map(|e1rm| round_to(e1rm, E1RM_DECIMALS)),
            change_pct,
            current_record_count: current.len(),
            previous_record_count: previous.len(),
        })
    }
}

fn best_e1rm(records: &[&StrengthRecord]) -> Option<f64> {
    records
        .iter()
        .map(|record| estimated_one_rep_max(record.weight, record.reps))
        .reduce(f64::max)
}
