// ABOUTME: Collaborator traits through which the engine receives its input records
// ABOUTME: Workouts, muscle group catalog, strength history, injuries and muscle load snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Repository Traits
//!
//! The engine never touches storage. Callers implement these traits over
//! whatever holds the records (database, API client, JSON file) and hand
//! fully materialized collections to the calculators through them. Range
//! filters are inclusive on both ends.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pierre_core::errors::AppResult;
use pierre_core::models::{
    CompletedWorkout, DateRange, Injury, MuscleGroup, StrengthRecord, WorkoutMuscleLoadSnapshot,
};
use uuid::Uuid;

/// Completed workouts and the muscle group catalog
#[async_trait]
pub trait WorkoutRepository: Send + Sync {
    /// Workouts completed by `user_id` inside `range`, muscle group mappings resolved
    async fn completed_workouts(
        &self,
        user_id: Uuid,
        range: &DateRange,
    ) -> AppResult<Vec<CompletedWorkout>>;

    /// Every known muscle group
    async fn muscle_groups(&self) -> AppResult<Vec<MuscleGroup>>;
}

/// Performed strength sets
#[async_trait]
pub trait StrengthHistoryRepository: Send + Sync {
    /// Strength records of `user_id` performed inside `range`
    async fn strength_records(
        &self,
        user_id: Uuid,
        range: &DateRange,
    ) -> AppResult<Vec<StrengthRecord>>;
}

/// Injury status, surfaced verbatim
#[async_trait]
pub trait InjuryRepository: Send + Sync {
    /// Injuries of `user_id` active at `as_of`
    async fn active_injuries(&self, user_id: Uuid, as_of: DateTime<Utc>)
        -> AppResult<Vec<Injury>>;
}

/// Persisted per-workout muscle load
#[async_trait]
pub trait MuscleLoadSnapshotRepository: Send + Sync {
    /// Snapshots of `user_id` whose workout completed inside `range`
    async fn snapshots(
        &self,
        user_id: Uuid,
        range: &DateRange,
    ) -> AppResult<Vec<WorkoutMuscleLoadSnapshot>>;

    /// Replace whatever is stored for `workout_id` with `snapshots`
    async fn save_snapshots(
        &self,
        user_id: Uuid,
        workout_id: Uuid,
        snapshots: Vec<WorkoutMuscleLoadSnapshot>,
    ) -> AppResult<()>;
}
