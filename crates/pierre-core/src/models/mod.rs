// ABOUTME: Core data models and value types for the workload engine
// ABOUTME: Re-exports workouts, exercises, muscle groups, records, block trees and snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain in-memory records consumed by the calculators. Callers build them from
//! whatever persistence they use; the engine never retains them across calls.
//!
//! - `DateRange`: inclusive window used by every windowed calculator
//! - `CompletedWorkout`: sections -> blocks -> exercise slots
//! - `Exerciseable`: strength / cardio / duration prescription (tagged)
//! - `CompletedSession`, `PerformedExercise`, `StrengthRecord`: flat views
//! - `StructuredWorkout`: recursive block tree for muscle load attribution
//! - `WorkoutMuscleLoadSnapshot`: immutable per-muscle load history

mod date_range;
mod exercise;
mod muscle_group;
mod records;
mod snapshot;
mod structured;
mod workout;

pub use date_range::DateRange;
pub use exercise::{BlockExercise, ExerciseType, Exerciseable};
pub use muscle_group::{MuscleGroup, MuscleGroupMapping};
pub use records::{CompletedSession, Injury, InjurySeverity, PerformedExercise, StrengthRecord};
pub use snapshot::{LoadSource, WorkoutMuscleLoadSnapshot};
pub use structured::{
    ActivityMuscleLoad, ExerciseEntry, ExerciseGroupSpec, Intensity, IntervalSpec, LoadBlock,
    LoadBlockKind, MuscleLoadFactor, StructuredWorkout,
};
pub use workout::{BlockType, CompletedWorkout, PlannedBlock, WorkoutBlock, WorkoutSection};
