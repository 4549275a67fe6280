// ABOUTME: Exercise slot types: strength, cardio and duration variants as a tagged sum type
// ABOUTME: BlockExercise links a slot to the catalog and to its muscle group mappings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::MuscleGroupMapping;

/// Broad exercise category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    /// Sets and reps against a load
    Strength,
    /// Heart-rate driven endurance work
    Cardio,
    /// Timed holds or drills
    Duration,
}

/// Prescription carried by one exercise slot
///
/// Unknown `type` tags fail deserialization, so an unrecognized variant can
/// never be silently counted as one of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Exerciseable {
    /// Sets x reps work
    Strength {
        /// Prescribed number of sets
        target_sets: Option<u32>,
        /// Lower bound of the rep range
        target_reps_min: Option<u32>,
        /// Upper bound of the rep range
        target_reps_max: Option<u32>,
        /// Prescribed load (kg)
        target_weight: Option<f64>,
        /// Prescribed RPE (1-10)
        target_rpe: Option<f64>,
    },
    /// Endurance work
    Cardio {
        /// Planned or performed duration
        duration_seconds: Option<u32>,
        /// Planned or performed distance
        distance_meters: Option<f64>,
        /// Heart rate zone (1-5)
        heart_rate_zone: Option<u8>,
    },
    /// Timed work
    Duration {
        /// Hold or drill duration
        duration_seconds: Option<u32>,
        /// Prescribed RPE (1-10)
        target_rpe: Option<f64>,
    },
}

impl Exerciseable {
    /// Category of this prescription
    #[must_use]
    pub const fn exercise_type(&self) -> ExerciseType {
        match self {
            Self::Strength { .. } => ExerciseType::Strength,
            Self::Cardio { .. } => ExerciseType::Cardio,
            Self::Duration { .. } => ExerciseType::Duration,
        }
    }

    /// Duration carried by the prescription itself, if any
    #[must_use]
    pub const fn duration_seconds(&self) -> Option<u32> {
        match self {
            Self::Strength { .. } => None,
            Self::Cardio {
                duration_seconds, ..
            }
            | Self::Duration {
                duration_seconds, ..
            } => *duration_seconds,
        }
    }
}

/// One exercise inside a workout block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockExercise {
    /// Catalog exercise id; `None` when the slot was never linked to the catalog
    pub exercise_id: Option<String>,
    /// Display name as written in the workout
    pub name: String,
    /// The prescription
    pub exercise: Exerciseable,
    /// Estimated time to complete the slot, overriding the prescription's own duration
    #[serde(default)]
    pub estimated_duration_seconds: Option<u32>,
    /// Muscle groups this exercise loads
    #[serde(default)]
    pub muscle_groups: Vec<MuscleGroupMapping>,
}

impl BlockExercise {
    /// Best known duration of the slot in seconds
    #[must_use]
    pub fn duration_seconds(&self) -> Option<u32> {
        self.estimated_duration_seconds
            .or_else(|| self.exercise.duration_seconds())
    }
}
