// ABOUTME: Per-muscle load attribution over a recursive structured workout tree
// ABOUTME: Cardio intervals via pace/intensity tables, exercise groups via sets x reps x effort
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Muscle Load
//!
//! Walks a structured workout depth-first, carrying a repeat multiplier that
//! compounds through nested blocks:
//!
//! - Interval: `minutes x intensity multiplier x activity load factor x repeat`,
//!   minutes taken from the duration or derived from distance and pace
//! - Exercise group: `sets x reps x rounds x effort x muscle load factor x repeat`,
//!   effort being `RPE / 10` or 0.6 without a target
//! - Group: recurses into children, contributes nothing itself
//!
//! Every contribution keeps a human-readable source line.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use pierre_core::constants::{muscle_load, units, volume_defaults};
use pierre_core::models::{
    ActivityMuscleLoad, ExerciseEntry, ExerciseGroupSpec, IntervalSpec, LoadBlock, LoadBlockKind,
    LoadSource, StructuredWorkout, WorkoutMuscleLoadSnapshot,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Load attributed to one muscle group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MuscleLoadEntry {
    /// Summed load
    pub total: f64,
    /// Individual contributions in traversal order
    pub sources: Vec<LoadSource>,
}

/// Load per muscle group key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MuscleLoadSummary {
    /// Entries keyed by muscle group name
    pub muscles: BTreeMap<String, MuscleLoadEntry>,
}

impl MuscleLoadSummary {
    /// Total load of `muscle_group`, zero when untouched
    #[must_use]
    pub fn total_for(&self, muscle_group: &str) -> f64 {
        self.muscles.get(muscle_group).map_or(0.0, |entry| entry.total)
    }

    /// Whether no load was attributed at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.muscles.is_empty()
    }

    /// One snapshot per muscle group, ordered by key
    #[must_use]
    pub fn to_snapshots(
        &self,
        workout_id: Uuid,
        completed_at: DateTime<Utc>,
    ) -> Vec<WorkoutMuscleLoadSnapshot> {
        self.muscles
            .iter()
            .map(|(muscle_group, entry)| WorkoutMuscleLoadSnapshot {
                workout_id,
                muscle_group: muscle_group.clone(),
                total_load: entry.total,
                completed_at,
                source_breakdown: entry.sources.clone(),
            })
            .collect()
    }

    fn add(&mut self, muscle_group: &str, load: f64, description: String) {
        let entry = self.muscles.entry(muscle_group.to_owned()).or_default();
        entry.total += load;
        entry.sources.push(LoadSource { description, load });
    }
}

/// Attributes structured workout load to muscle groups
#[derive(Debug, Clone, Default)]
pub struct MuscleLoadCalculator {
    activity_muscles: Vec<ActivityMuscleLoad>,
}

impl MuscleLoadCalculator {
    /// Calculator using the given activity to muscle group table
    #[must_use]
    pub const fn new(activity_muscles: Vec<ActivityMuscleLoad>) -> Self {
        Self { activity_muscles }
    }

    /// Load per muscle group for `workout`
    #[must_use]
    pub fn calculate(&self, workout: &StructuredWorkout) -> MuscleLoadSummary {
        let mut summary = MuscleLoadSummary::default();
        for block in &workout.blocks {
            self.walk(block, 1.0, &mut summary);
        }

        debug!(
            workout_id = %workout.id,
            block_count = workout.blocks.len(),
            muscle_group_count = summary.muscles.len(),
            "Calculated muscle load"
        );
        summary
    }

    fn walk(&self, block: &LoadBlock, multiplier: f64, summary: &mut MuscleLoadSummary) {
        let multiplier = multiplier * f64::from(block.repeat);
        match &block.kind {
            LoadBlockKind::Interval(spec) => {
                self.apply_interval(block.label.as_deref(), spec, multiplier, summary);
            }
            LoadBlockKind::ExerciseGroup(group) => {
                Self::apply_exercise_group(block.label.as_deref(), group, multiplier, summary);
            }
            LoadBlockKind::Group { children } => {
                for child in children {
                    self.walk(child, multiplier, summary);
                }
            }
        }
    }

    fn apply_interval(
        &self,
        label: Option<&str>,
        spec: &IntervalSpec,
        multiplier: f64,
        summary: &mut MuscleLoadSummary,
    ) {
        let Some(minutes) = interval_minutes(spec) else {
            return;
        };
        let intensity = spec.intensity.unwrap_or_default();
        let base = minutes * intensity.load_multiplier() * multiplier;

        let rows = self
            .activity_muscles
            .iter()
            .filter(|row| row.activity.eq_ignore_ascii_case(&spec.activity));
        for row in rows {
            let load = base * row.load_factor;
            if load <= 0.0 {
                continue;
            }
            summary.add(
                &row.muscle_group,
                load,
                describe_interval(label, spec, minutes, multiplier),
            );
        }
    }

    fn apply_exercise_group(
        label: Option<&str>,
        group: &ExerciseGroupSpec,
        multiplier: f64,
        summary: &mut MuscleLoadSummary,
    ) {
        for entry in &group.entries {
            let volume = f64::from(entry.sets)
                * f64::from(entry.reps.unwrap_or(1))
                * f64::from(group.rounds);
            let effort = entry.rpe_target.map_or(muscle_load::DEFAULT_EFFORT, |rpe| {
                rpe / volume_defaults::RPE_SCALE
            });

            for muscle in &entry.muscles {
                let load = volume * effort * muscle.load_factor * multiplier;
                if load <= 0.0 {
                    continue;
                }
                summary.add(
                    &muscle.muscle_group,
                    load,
                    describe_entry(label, entry, group.rounds, multiplier),
                );
            }
        }
    }
}

/// Working minutes of an interval; duration wins over distance
fn interval_minutes(spec: &IntervalSpec) -> Option<f64> {
    if let Some(seconds) = spec.duration_seconds {
        return Some(seconds / units::SECONDS_PER_MINUTE);
    }
    let distance = spec.distance_meters?;
    let pace = spec.target_pace_seconds_per_km.unwrap_or_else(|| {
        spec.intensity
            .unwrap_or_default()
            .default_pace_seconds_per_km()
    });
    Some(distance / units::METERS_PER_KM * pace / units::SECONDS_PER_MINUTE)
}

fn describe_interval(
    label: Option<&str>,
    spec: &IntervalSpec,
    minutes: f64,
    multiplier: f64,
) -> String {
    let intensity = spec.intensity.unwrap_or_default().as_str();
    let effort = match (spec.duration_seconds, spec.distance_meters) {
        (None, Some(meters)) => format!(
            "{:.2} km (~{minutes:.1} min)",
            meters / units::METERS_PER_KM
        ),
        _ => format!("{minutes:.1} min"),
    };
    let mut description = format!(
        "{}: {} {effort} @ {intensity}",
        label.unwrap_or(&spec.activity),
        spec.activity
    );
    append_repeat(&mut description, multiplier);
    description
}

fn describe_entry(
    label: Option<&str>,
    entry: &ExerciseEntry,
    rounds: u32,
    multiplier: f64,
) -> String {
    let mut description = format!(
        "{}: {} {}x{}",
        label.unwrap_or("Exercise group"),
        entry.name,
        entry.sets,
        entry.reps.unwrap_or(1)
    );
    if rounds > 1 {
        description.push_str(&format!(" x {rounds} rounds"));
    }
    if let Some(rpe) = entry.rpe_target {
        description.push_str(&format!(" @ RPE {rpe}"));
    }
    append_repeat(&mut description, multiplier);
    description
}

fn append_repeat(description: &mut String, multiplier: f64) {
    if multiplier > 1.0 {
        description.push_str(&format!(" (x{multiplier})"));
    }
}
