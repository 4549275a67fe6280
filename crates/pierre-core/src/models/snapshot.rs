// ABOUTME: Per-workout, per-muscle load snapshot with explainable source breakdown
// ABOUTME: Written once when a workout completes, decayed later by the recovery model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One contribution to a muscle group's load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadSource {
    /// What produced the load ("Intervals: running 20.0 min @ tempo")
    pub description: String,
    /// Load contributed
    pub load: f64,
}

/// Historical load of one muscle group from one workout; never mutated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutMuscleLoadSnapshot {
    /// Workout that produced the load
    pub workout_id: Uuid,
    /// Muscle group key
    pub muscle_group: String,
    /// Summed load
    pub total_load: f64,
    /// Workout completion timestamp
    pub completed_at: DateTime<Utc>,
    /// Contributions making up `total_load`
    pub source_breakdown: Vec<LoadSource>,
}
