// ABOUTME: Structured workout block tree used for per-muscle load attribution
// ABOUTME: Interval, exercise-group and container blocks with repeat counts and intensity tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const fn one() -> u32 {
    1
}

/// Effort descriptor for interval (cardio) blocks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Conversational pace
    Easy,
    /// Steady aerobic pace
    #[default]
    Moderate,
    /// Comfortably hard
    Tempo,
    /// Lactate threshold
    Threshold,
    /// VO2max-type efforts
    Hard,
    /// All-out
    Sprint,
}

impl Intensity {
    /// Pace assumed when a distance block has no target pace (seconds per km)
    #[must_use]
    pub const fn default_pace_seconds_per_km(self) -> f64 {
        match self {
            Self::Easy => 360.0,
            Self::Moderate => 330.0,
            Self::Tempo => 300.0,
            Self::Threshold => 270.0,
            Self::Hard => 240.0,
            Self::Sprint => 210.0,
        }
    }

    /// Load multiplier per minute of work
    #[must_use]
    pub const fn load_multiplier(self) -> f64 {
        match self {
            Self::Easy => 0.5,
            Self::Moderate => 0.7,
            Self::Tempo => 0.85,
            Self::Threshold => 1.0,
            Self::Hard => 1.15,
            Self::Sprint => 1.3,
        }
    }

    /// Lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::Tempo => "tempo",
            Self::Threshold => "threshold",
            Self::Hard => "hard",
            Self::Sprint => "sprint",
        }
    }
}

/// Row of the activity-to-muscle reference table (`running` loads `calves` at 0.8)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityMuscleLoad {
    /// Activity name as used by interval blocks
    pub activity: String,
    /// Muscle group key
    pub muscle_group: String,
    /// Share of the activity load attributed to the group
    pub load_factor: f64,
}

/// Muscle group loaded by an exercise entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleLoadFactor {
    /// Muscle group key
    pub muscle_group: String,
    /// Share of the entry load attributed to the group
    pub load_factor: f64,
}

/// Timed or distance-based cardio work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalSpec {
    /// Activity name (`running`, `rowing`, ...)
    pub activity: String,
    /// Duration, takes precedence over distance
    #[serde(default)]
    pub duration_seconds: Option<f64>,
    /// Distance, converted to time through the pace
    #[serde(default)]
    pub distance_meters: Option<f64>,
    /// Target pace in seconds per km
    #[serde(default)]
    pub target_pace_seconds_per_km: Option<f64>,
    /// Intensity, moderate when unset
    #[serde(default)]
    pub intensity: Option<Intensity>,
}

/// Strength-style entry inside an exercise group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    /// Exercise display name
    pub name: String,
    /// Sets per round
    pub sets: u32,
    /// Reps per set, treated as 1 when absent
    #[serde(default)]
    pub reps: Option<u32>,
    /// Target RPE (1-10)
    #[serde(default)]
    pub rpe_target: Option<f64>,
    /// Muscles loaded by the entry
    #[serde(default)]
    pub muscles: Vec<MuscleLoadFactor>,
}

/// Group of strength-style entries performed for a number of rounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseGroupSpec {
    /// Rounds through the entries
    #[serde(default = "one")]
    pub rounds: u32,
    /// Entries in order
    #[serde(default)]
    pub entries: Vec<ExerciseEntry>,
}

/// What a load block does
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LoadBlockKind {
    /// Cardio interval
    Interval(IntervalSpec),
    /// Strength-style exercise group
    ExerciseGroup(ExerciseGroupSpec),
    /// Container that only structures and repeats its children
    Group {
        /// Nested blocks
        #[serde(default)]
        children: Vec<LoadBlock>,
    },
}

/// Node of the structured workout tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBlock {
    /// Optional label used in load source descriptions
    #[serde(default)]
    pub label: Option<String>,
    /// Times this block (and everything below it) is performed
    #[serde(default = "one")]
    pub repeat: u32,
    /// Block payload
    pub kind: LoadBlockKind,
}

/// Structured workout as needed for muscle load attribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredWorkout {
    /// Workout identifier
    pub id: Uuid,
    /// Completion timestamp
    pub completed_at: DateTime<Utc>,
    /// Top-level blocks
    #[serde(default)]
    pub blocks: Vec<LoadBlock>,
}
