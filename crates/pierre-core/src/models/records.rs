// ABOUTME: Flat read-only records derived from completed workouts and training history
// ABOUTME: Sessions for sRPE, performed exercises for set volume, strength sets, injuries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ExerciseType, MuscleGroupMapping};

/// Completed session reduced to what session-RPE needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletedSession {
    /// Completion timestamp
    pub completed_at: DateTime<Utc>,
    /// Session duration
    pub duration_minutes: f64,
    /// Session RPE (1-10)
    pub rpe: f64,
}

impl CompletedSession {
    /// sRPE load: `round(duration_minutes * rpe)`
    #[must_use]
    pub fn session_load(&self) -> i64 {
        (self.duration_minutes * self.rpe).round() as i64
    }
}

/// One exercise as performed, with its muscle mappings resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformedExercise {
    /// Completion timestamp of the containing workout
    pub completed_at: DateTime<Utc>,
    /// Number of sets performed
    pub sets: u32,
    /// Category; only strength contributes to set volume
    pub exercise_type: ExerciseType,
    /// Muscle groups loaded by the exercise
    pub muscle_groups: Vec<MuscleGroupMapping>,
}

/// A single logged strength set (or best set of a session)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthRecord {
    /// Catalog exercise id
    pub exercise_id: String,
    /// Exercise display name
    pub exercise_name: String,
    /// When the set was performed
    pub performed_at: DateTime<Utc>,
    /// Load lifted (kg)
    pub weight: f64,
    /// Repetitions completed
    pub reps: u32,
}

/// Injury severity as recorded by the user or coach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjurySeverity {
    /// Training can continue with minor adjustments
    Mild,
    /// Affected area should be unloaded
    Moderate,
    /// Affected area must not be trained
    Severe,
}

/// Injury record, surfaced verbatim in the workload summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Injury {
    /// Injury identifier
    pub id: Uuid,
    /// Affected body region
    pub body_part: String,
    /// Free-form description
    pub description: String,
    /// Severity
    pub severity: InjurySeverity,
    /// Onset
    pub started_at: DateTime<Utc>,
    /// Resolution, `None` while active
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Injury {
    /// Whether the injury is active at `at`
    #[must_use]
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        self.started_at <= at && self.resolved_at.is_none_or(|resolved| resolved > at)
    }
}
