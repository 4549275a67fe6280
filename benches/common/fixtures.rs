// ABOUTME: Benchmark fixtures generating deterministic training histories
// ABOUTME: Muscle group catalog, completed workouts, strength records and structured workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark test fixtures for generating realistic training data.
//!
//! Everything is derived from the index, so runs are reproducible.

use chrono::{DateTime, Duration, TimeZone, Utc};
use pierre_workload::models::{
    ActivityMuscleLoad, BlockExercise, BlockType, CompletedWorkout, Exerciseable, ExerciseEntry,
    ExerciseGroupSpec, Intensity, IntervalSpec, LoadBlock, LoadBlockKind, MuscleGroup,
    MuscleGroupMapping, MuscleLoadFactor, StrengthRecord, StructuredWorkout, WorkoutBlock,
    WorkoutSection,
};
use uuid::Uuid;

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum WorkoutBatchSize {
    /// Small history (10 workouts) - quick benchmarks
    Small,
    /// Medium history (100 workouts) - committed user
    Medium,
}

impl WorkoutBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 100,
        }
    }
}

const MUSCLE_GROUPS: [(&str, &str, &str); 6] = [
    ("mg-quads", "quadriceps", "legs"),
    ("mg-hams", "hamstrings", "legs"),
    ("mg-glutes", "glutes", "legs"),
    ("mg-chest", "chest", "chest"),
    ("mg-back", "back", "back"),
    ("mg-calves", "calves", "legs"),
];

/// Fixed anchor so every run sees the same windows
#[must_use]
pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 12, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

#[must_use]
pub fn catalog() -> Vec<MuscleGroup> {
    MUSCLE_GROUPS
        .iter()
        .map(|(id, name, body_part)| MuscleGroup {
            id: (*id).to_owned(),
            name: (*name).to_owned(),
            label: name.to_uppercase(),
            body_part: (*body_part).to_owned(),
        })
        .collect()
}

#[must_use]
pub fn activity_muscles() -> Vec<ActivityMuscleLoad> {
    [("quadriceps", 0.6), ("calves", 0.8), ("hamstrings", 0.4)]
        .into_iter()
        .map(|(muscle_group, load_factor)| ActivityMuscleLoad {
            activity: "running".to_owned(),
            muscle_group: muscle_group.to_owned(),
            load_factor,
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation)]
fn exercise_slot(index: usize, groups: &[MuscleGroup]) -> BlockExercise {
    let primary = &groups[index % groups.len()];
    let secondary = &groups[(index + 1) % groups.len()];
    BlockExercise {
        exercise_id: Some(format!("exercise-{}", index % 12)),
        name: format!("Exercise {}", index % 12),
        exercise: Exerciseable::Strength {
            target_sets: Some(3 + (index % 3) as u32),
            target_reps_min: Some(6),
            target_reps_max: Some(8 + (index % 5) as u32),
            target_weight: Some(60.0),
            target_rpe: Some(6.0 + (index % 4) as f64),
        },
        estimated_duration_seconds: None,
        muscle_groups: vec![
            MuscleGroupMapping::for_group(primary, 1.0),
            MuscleGroupMapping::for_group(secondary, 0.5),
        ],
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap
)]
fn generate_workout(index: usize, groups: &[MuscleGroup]) -> CompletedWorkout {
    let hours_ago = (index as i64) * 9 + 3;
    let exercises = (0..4).map(|slot| exercise_slot(index * 4 + slot, groups)).collect();
    CompletedWorkout {
        id: Uuid::from_u128(index as u128 + 1),
        name: format!("Benchmark workout {index}"),
        completed_at: reference_time() - Duration::hours(hours_ago),
        duration_minutes: (index % 5 != 0).then_some(45.0 + (index % 30) as f64),
        rpe: Some(5.0 + (index % 5) as f64),
        sections: vec![WorkoutSection {
            label: Some("Main".to_owned()),
            blocks: vec![WorkoutBlock {
                block_type: BlockType::Circuit,
                label: None,
                rounds: Some(3),
                rest_between_exercises: Some(30),
                rest_between_rounds: Some(90),
                time_cap: None,
                work_interval: None,
                rest_interval: None,
                exercises,
            }],
        }],
    }
}

/// Generate a workout history going backwards from [`reference_time`]
#[must_use]
pub fn generate_workouts(size: WorkoutBatchSize) -> Vec<CompletedWorkout> {
    let groups = catalog();
    (0..size.count())
        .map(|index| generate_workout(index, &groups))
        .collect()
}

/// Strength records spread over both progression periods
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap
)]
#[must_use]
pub fn generate_strength_records(count: usize) -> Vec<StrengthRecord> {
    (0..count)
        .map(|index| StrengthRecord {
            exercise_id: format!("exercise-{}", index % 12),
            exercise_name: format!("Exercise {}", index % 12),
            performed_at: reference_time() - Duration::hours((index as i64) * 7),
            weight: 60.0 + ((index * 13) % 80) as f64,
            reps: 1 + (index % 10) as u32,
        })
        .collect()
}

/// Structured workout mixing nested run intervals and a strength group
#[must_use]
pub fn structured_workout() -> StructuredWorkout {
    let interval = LoadBlock {
        label: Some("Hill repeats".to_owned()),
        repeat: 6,
        kind: LoadBlockKind::Interval(IntervalSpec {
            activity: "running".to_owned(),
            duration_seconds: None,
            distance_meters: Some(400.0),
            target_pace_seconds_per_km: None,
            intensity: Some(Intensity::Hard),
        }),
    };
    let strength = LoadBlock {
        label: Some("Strength".to_owned()),
        repeat: 1,
        kind: LoadBlockKind::ExerciseGroup(ExerciseGroupSpec {
            rounds: 3,
            entries: vec![ExerciseEntry {
                name: "Split squat".to_owned(),
                sets: 2,
                reps: Some(10),
                rpe_target: Some(7.0),
                muscles: vec![
                    MuscleLoadFactor {
                        muscle_group: "quadriceps".to_owned(),
                        load_factor: 1.0,
                    },
                    MuscleLoadFactor {
                        muscle_group: "glutes".to_owned(),
                        load_factor: 0.7,
                    },
                ],
            }],
        }),
    };

    StructuredWorkout {
        id: Uuid::from_u128(42),
        completed_at: reference_time(),
        blocks: vec![LoadBlock {
            label: Some("Main set".to_owned()),
            repeat: 2,
            kind: LoadBlockKind::Group {
                children: vec![interval, strength],
            },
        }],
    }
}
