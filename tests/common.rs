// ABOUTME: Shared test fixtures for workload engine integration tests
// ABOUTME: Fixed reference timestamps, muscle group catalog and workout/record builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `pierre_workload`

use std::env;
use std::sync::Once;

use chrono::{DateTime, Duration, Utc};
use pierre_workload::models::{
    BlockExercise, BlockType, CompletedSession, CompletedWorkout, Exerciseable, ExerciseType,
    MuscleGroup, MuscleGroupMapping, PerformedExercise, StrengthRecord, WorkoutBlock,
    WorkoutSection,
};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Parse an RFC 3339 timestamp
pub fn at(timestamp: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(timestamp)
        .expect("valid RFC 3339 timestamp")
        .with_timezone(&Utc)
}

/// Wednesday 2025-03-12 12:00 UTC; its ISO week starts Monday 2025-03-10
pub fn reference_time() -> DateTime<Utc> {
    at("2025-03-12T12:00:00Z")
}

/// Monday 2025-03-10 00:00 UTC
pub fn current_week_start() -> DateTime<Utc> {
    at("2025-03-10T00:00:00Z")
}

/// `days` days before the reference time
pub fn days_ago(days: i64) -> DateTime<Utc> {
    reference_time() - Duration::days(days)
}

pub fn test_user() -> Uuid {
    Uuid::parse_str("6a2f41a3-c54c-4ce8-a2d2-0324e1c32e22").unwrap()
}

pub fn muscle_group(id: &str, name: &str, body_part: &str) -> MuscleGroup {
    let mut label = name.to_owned();
    if let Some(first) = label.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    MuscleGroup {
        id: id.to_owned(),
        name: name.to_owned(),
        label,
        body_part: body_part.to_owned(),
    }
}

pub fn quadriceps() -> MuscleGroup {
    muscle_group("mg-quads", "quadriceps", "legs")
}

pub fn glutes() -> MuscleGroup {
    muscle_group("mg-glutes", "glutes", "legs")
}

pub fn chest() -> MuscleGroup {
    muscle_group("mg-chest", "chest", "chest")
}

pub fn hamstrings() -> MuscleGroup {
    muscle_group("mg-hams", "hamstrings", "legs")
}

pub fn catalog() -> Vec<MuscleGroup> {
    vec![quadriceps(), glutes(), chest(), hamstrings()]
}

pub fn mapping(group: &MuscleGroup, load_factor: f64) -> MuscleGroupMapping {
    MuscleGroupMapping::for_group(group, load_factor)
}

pub fn strength(sets: Option<u32>, reps: Option<u32>, rpe: Option<f64>) -> Exerciseable {
    Exerciseable::Strength {
        target_sets: sets,
        target_reps_min: None,
        target_reps_max: reps,
        target_weight: None,
        target_rpe: rpe,
    }
}

pub fn slot(
    exercise_id: Option<&str>,
    exercise: Exerciseable,
    muscle_groups: Vec<MuscleGroupMapping>,
) -> BlockExercise {
    BlockExercise {
        exercise_id: exercise_id.map(str::to_owned),
        name: exercise_id.unwrap_or("Unlinked exercise").to_owned(),
        exercise,
        estimated_duration_seconds: None,
        muscle_groups,
    }
}

/// Linked strength slot: `sets x reps @ rpe` on the given mappings
pub fn squat(
    sets: u32,
    reps: u32,
    rpe: f64,
    muscle_groups: Vec<MuscleGroupMapping>,
) -> BlockExercise {
    slot(
        Some("back-squat"),
        strength(Some(sets), Some(reps), Some(rpe)),
        muscle_groups,
    )
}

pub fn block(
    block_type: BlockType,
    rounds: Option<u32>,
    exercises: Vec<BlockExercise>,
) -> WorkoutBlock {
    WorkoutBlock {
        block_type,
        label: None,
        rounds,
        rest_between_exercises: None,
        rest_between_rounds: None,
        time_cap: None,
        work_interval: None,
        rest_interval: None,
        exercises,
    }
}

pub fn workout(
    completed_at: DateTime<Utc>,
    duration_minutes: Option<f64>,
    rpe: Option<f64>,
    blocks: Vec<WorkoutBlock>,
) -> CompletedWorkout {
    CompletedWorkout {
        id: Uuid::new_v4(),
        name: "Test workout".to_owned(),
        completed_at,
        duration_minutes,
        rpe,
        sections: vec![WorkoutSection {
            label: Some("Main".to_owned()),
            blocks,
        }],
    }
}

pub fn session(completed_at: DateTime<Utc>, duration_minutes: f64, rpe: f64) -> CompletedSession {
    CompletedSession {
        completed_at,
        duration_minutes,
        rpe,
    }
}

pub fn performed(
    completed_at: DateTime<Utc>,
    sets: u32,
    exercise_type: ExerciseType,
    muscle_groups: Vec<MuscleGroupMapping>,
) -> PerformedExercise {
    PerformedExercise {
        completed_at,
        sets,
        exercise_type,
        muscle_groups,
    }
}

pub fn strength_record(
    exercise_id: &str,
    performed_at: DateTime<Utc>,
    weight: f64,
    reps: u32,
) -> StrengthRecord {
    StrengthRecord {
        exercise_id: exercise_id.to_owned(),
        exercise_name: exercise_id.replace('-', " "),
        performed_at,
        weight,
        reps,
    }
}

/// Absolute-difference float comparison
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
