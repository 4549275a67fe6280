// ABOUTME: Weekly effective-set volume per muscle group with trend classification
// ABOUTME: Attributes strength sets through load factors into ISO week buckets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Muscle Group Volume
//!
//! Effective sets are `sets x load_factor`, so a primary mover (factor 1.0)
//! receives full credit and a synergist (0.5) half. Only strength exercises
//! count. Each exercise lands in the first supplied week range that contains
//! it; callers pass non-overlapping ranges, current week first.

use std::collections::BTreeMap;

use pierre_core::constants::volume_trend;
use pierre_core::math::{mean, round_to};
use pierre_core::models::{DateRange, ExerciseType, MuscleGroupMapping, PerformedExercise};
use serde::{Deserialize, Serialize};
use tracing::debug;

const SETS_DECIMALS: i32 = 1;

/// Direction of the current week's volume against the multi-week average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeTrend {
    /// More than 10% above average (or any volume over a zero average)
    Increasing,
    /// Within 10% of the average
    Stable,
    /// More than 10% below average
    Decreasing,
}

impl VolumeTrend {
    /// Classify `current` week sets against the `average` over all weeks
    #[must_use]
    pub fn classify(current: f64, average: f64) -> Self {
        if average <= 0.0 {
            return if current > 0.0 {
                Self::Increasing
            } else {
                Self::Stable
            };
        }
        if current > average * volume_trend::INCREASING_FACTOR {
            Self::Increasing
        } else if current < average * volume_trend::DECREASING_FACTOR {
            Self::Decreasing
        } else {
            Self::Stable
        }
    }
}

/// Volume of one muscle group across the supplied weeks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleGroupVolumeResult {
    /// Catalog identifier
    pub muscle_group_id: String,
    /// Machine name
    pub name: String,
    /// Display label
    pub label: String,
    /// Body region
    pub body_part: String,
    /// Effective sets this week, 1 decimal
    pub current_week_sets: f64,
    /// Mean effective sets per week including the current one, 1 decimal
    pub average_weekly_sets: f64,
    /// Effective sets per supplied week, current first, 1 decimal
    pub weekly_sets: Vec<f64>,
    /// Trend classification (computed before rounding)
    pub trend: VolumeTrend,
}

struct GroupVolume<'a> {
    mapping: &'a MuscleGroupMapping,
    weekly_sets: Vec<f64>,
}

/// Computes weekly effective-set volume per muscle group
#[derive(Debug, Clone, Copy, Default)]
pub struct MuscleGroupVolumeCalculator;

impl MuscleGroupVolumeCalculator {
    /// Volume per muscle group, ordered by muscle group id
    ///
    /// Returns an empty list without strength exercises or week ranges.
    #[must_use]
    pub fn calculate(
        exercises: &[PerformedExercise],
        week_ranges: &[DateRange],
    ) -> Vec<MuscleGroupVolumeResult> {
        debug_assert!(
            week_ranges
                .windows(2)
                .all(|pair| !pair[0].overlaps(&pair[1])),
            "week ranges must not overlap"
        );

        let mut groups: BTreeMap<&str, GroupVolume<'_>> = BTreeMap::new();
        let strength = exercises
            .iter()
            .filter(|exercise| exercise.exercise_type == ExerciseType::Strength);

        for exercise in strength {
            let Some(week_index) = week_ranges
                .iter()
                .position(|week| week.contains(exercise.completed_at))
            else {
                continue;
            };

            for mapping in &exercise.muscle_groups {
                let group = groups
                    .entry(mapping.muscle_group_id.as_str())
                    .or_insert_with(|| GroupVolume {
                        mapping,
                        weekly_sets: vec![0.0; week_ranges.len()],
                    });
                group.weekly_sets[week_index] += f64::from(exercise.sets) * mapping.load_factor;
            }
        }

        let results: Vec<MuscleGroupVolumeResult> =
            groups.into_values().map(Self::summarize).collect();

        debug!(
            exercise_count = exercises.len(),
            week_count = week_ranges.len(),
            muscle_group_count = results.len(),
            "Calculated muscle group volume"
        );
        results
    }

    fn summarize(group: GroupVolume<'_>) -> MuscleGroupVolumeResult {
        let current = group.weekly_sets.first().copied().unwrap_or(0.0);
        let average = mean(&group.weekly_sets);

        MuscleGroupVolumeResult {
            muscle_group_id: group.mapping.muscle_group_id.clone(),
            name: group.mapping.name.clone(),
            label: group.mapping.label.clone(),
            body_part: group.mapping.body_part.clone(),
            current_week_sets: round_to(current, SETS_DECIMALS),
            average_weekly_sets: round_to(average, SETS_DECIMALS),
            weekly_sets: group
                .weekly_sets
                .iter()
                .map(|sets| round_to(*sets, SETS_DECIMALS))
                .collect(),
            trend: VolumeTrend::classify(current, average),
        }
    }
}
