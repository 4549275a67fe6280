// ABOUTME: Tests for weekly effective-set volume per muscle group and trend classification
// ABOUTME: Load factor weighting, week attribution at boundaries, strength-only filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{assert_close, chest, glutes, mapping, performed, quadriceps, reference_time};
use pierre_workload::intelligence::muscle_volume::{MuscleGroupVolumeCalculator, VolumeTrend};
use pierre_workload::models::{DateRange, ExerciseType};

fn ranges() -> Vec<DateRange> {
    DateRange::trend_weeks(reference_time(), 4)
}

#[test]
fn test_trend_classification_examples() {
    assert_eq!(VolumeTrend::classify(10.0, 5.5), VolumeTrend::Increasing);
    assert_eq!(VolumeTrend::classify(5.0, 5.0), VolumeTrend::Stable);
    assert_eq!(VolumeTrend::classify(2.0, 6.5), VolumeTrend::Decreasing);
}

#[test]
fn test_trend_with_zero_average() {
    assert_eq!(VolumeTrend::classify(0.0, 0.0), VolumeTrend::Stable);
    assert_eq!(VolumeTrend::classify(3.0, 0.0), VolumeTrend::Increasing);
}

#[test]
fn test_trend_band_edges_are_stable() {
    assert_eq!(VolumeTrend::classify(11.0, 10.0), VolumeTrend::Stable);
    assert_eq!(VolumeTrend::classify(9.0, 10.0), VolumeTrend::Stable);
    assert_eq!(VolumeTrend::classify(11.01, 10.0), VolumeTrend::Increasing);
    assert_eq!(VolumeTrend::classify(8.99, 10.0), VolumeTrend::Decreasing);
}

#[test]
fn test_empty_inputs_yield_no_results() {
    let cardio = vec![performed(
        reference_time(),
        1,
        ExerciseType::Cardio,
        vec![mapping(&quadriceps(), 1.0)],
    )];
    assert!(MuscleGroupVolumeCalculator::calculate(&[], &ranges()).is_empty());
    assert!(MuscleGroupVolumeCalculator::calculate(&cardio, &ranges()).is_empty());

    let squats = vec![performed(
        reference_time(),
        4,
        ExerciseType::Strength,
        vec![mapping(&quadriceps(), 1.0)],
    )];
    assert!(MuscleGroupVolumeCalculator::calculate(&squats, &[]).is_empty());
}

#[test]
fn test_effective_sets_use_load_factor_per_week() {
    let ranges = ranges();
    let legs = vec![mapping(&quadriceps(), 1.0), mapping(&glutes(), 0.5)];
    let exercises = vec![
        performed(reference_time(), 10, ExerciseType::Strength, legs.clone()),
        performed(ranges[1].from + Duration::days(1), 4, ExerciseType::Strength, legs.clone()),
        performed(ranges[2].from + Duration::days(3), 4, ExerciseType::Strength, legs.clone()),
        performed(ranges[3].from, 4, ExerciseType::Strength, legs),
    ];

    let results = MuscleGroupVolumeCalculator::calculate(&exercises, &ranges);
    assert_eq!(results.len(), 2);

    // Ordered by muscle group id: mg-glutes before mg-quads
    let glutes = &results[0];
    assert_eq!(glutes.muscle_group_id, "mg-glutes");
    assert_close(glutes.current_week_sets, 5.0);
    assert_close(glutes.average_weekly_sets, 2.8);
    assert_eq!(glutes.weekly_sets, vec![5.0, 2.0, 2.0, 2.0]);
    assert_eq!(glutes.trend, VolumeTrend::Increasing);

    let quads = &results[1];
    assert_eq!(quads.name, "quadriceps");
    assert_eq!(quads.body_part, "legs");
    assert_close(quads.current_week_sets, 10.0);
    assert_close(quads.average_weekly_sets, 5.5);
    assert_eq!(quads.trend, VolumeTrend::Increasing);
}

#[test]
fn test_only_strength_counts() {
    let exercises = vec![
        performed(reference_time(), 3, ExerciseType::Strength, vec![mapping(&chest(), 1.0)]),
        performed(reference_time(), 9, ExerciseType::Duration, vec![mapping(&chest(), 1.0)]),
        performed(reference_time(), 9, ExerciseType::Cardio, vec![mapping(&chest(), 1.0)]),
    ];
    let results = MuscleGroupVolumeCalculator::calculate(&exercises, &ranges());
    assert_eq!(results.len(), 1);
    assert_close(results[0].current_week_sets, 3.0);
}

#[test]
fn test_boundary_timestamps_and_dropped_records() {
    let ranges = ranges();
    let chest_only = || vec![mapping(&chest(), 1.0)];
    let exercises = vec![
        // Exactly at the end of the current week: included
        performed(ranges[0].to, 2, ExerciseType::Strength, chest_only()),
        // Exactly at the start of the oldest week: included
        performed(ranges[3].from, 3, ExerciseType::Strength, chest_only()),
        // Before every range: dropped
        performed(ranges[3].from - Duration::seconds(1), 50, ExerciseType::Strength, chest_only()),
        // After every range: dropped
        performed(ranges[0].to + Duration::seconds(1), 50, ExerciseType::Strength, chest_only()),
    ];

    let results = MuscleGroupVolumeCalculator::calculate(&exercises, &ranges);
    let total: f64 = results[0].weekly_sets.iter().sum();
    assert_close(total, 5.0);
    assert_close(results[0].current_week_sets, 2.0);
    assert_close(results[0].weekly_sets[3], 3.0);
}

#[test]
fn test_stable_and_decreasing_trends() {
    let ranges = ranges();
    let quads = || vec![mapping(&quadriceps(), 1.0)];
    let steady: Vec<_> = ranges
        .iter()
        .map(|week| performed(week.from + Duration::hours(10), 5, ExerciseType::Strength, quads()))
        .collect();
    let results = MuscleGroupVolumeCalculator::calculate(&steady, &ranges);
    assert_eq!(results[0].trend, VolumeTrend::Stable);

    let tapering = vec![
        performed(ranges[0].from, 2, ExerciseType::Strength, quads()),
        performed(ranges[1].from, 8, ExerciseType::Strength, quads()),
        performed(ranges[2].from, 8, ExerciseType::Strength, quads()),
        performed(ranges[3].from, 8, ExerciseType::Strength, quads()),
    ];
    let results = MuscleGroupVolumeCalculator::calculate(&tapering, &ranges);
    assert_close(results[0].average_weekly_sets, 6.5);
    assert_eq!(results[0].trend, VolumeTrend::Decreasing);
}

#[test]
fn test_volume_is_idempotent() {
    let exercises = vec![performed(
        reference_time(),
        4,
        ExerciseType::Strength,
        vec![mapping(&quadriceps(), 0.75)],
    )];
    let ranges = ranges();
    assert_eq!(
        MuscleGroupVolumeCalculator::calculate(&exercises, &ranges),
        MuscleGroupVolumeCalculator::calculate(&exercises, &ranges)
    );
}
