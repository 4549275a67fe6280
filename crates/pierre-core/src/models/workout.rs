// ABOUTME: Completed workout structure: sections, blocks and exercise slots
// ABOUTME: Block types, planned-block projection for duration estimation, session extraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BlockExercise, CompletedSession};

/// Structural block types (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    /// Classic sets of one exercise at a time
    StraightSets,
    /// Rotation through several exercises, repeated for rounds
    Circuit,
    /// Paired exercises without rest between them
    Superset,
    /// Work/rest intervals
    Interval,
    /// As many rounds as possible within a time cap
    Amrap,
    /// Fixed work completed as fast as possible, capped
    ForTime,
    /// Every minute on the minute
    Emom,
    /// Continuous distance or time effort
    DistanceDuration,
    /// Explicit rest period
    Rest,
}

/// Timing view of one block, all durations in seconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedBlock {
    /// Structural type, selects the estimation policy
    pub block_type: BlockType,
    /// Number of rounds
    #[serde(default)]
    pub rounds: Option<u32>,
    /// Rest between consecutive exercises of a round
    #[serde(default)]
    pub rest_between_exercises: Option<u32>,
    /// Rest between rounds
    #[serde(default)]
    pub rest_between_rounds: Option<u32>,
    /// Time cap (AMRAP / for time)
    #[serde(default)]
    pub time_cap: Option<u32>,
    /// Work interval (interval / EMOM)
    #[serde(default)]
    pub work_interval: Option<u32>,
    /// Rest interval (interval)
    #[serde(default)]
    pub rest_interval: Option<u32>,
    /// Per-exercise durations, `None` where unknown
    #[serde(default)]
    pub exercise_durations: Vec<Option<u32>>,
}

impl PlannedBlock {
    /// Block of the given type with no timing information
    #[must_use]
    pub const fn new(block_type: BlockType) -> Self {
        Self {
            block_type,
            rounds: None,
            rest_between_exercises: None,
            rest_between_rounds: None,
            time_cap: None,
            work_interval: None,
            rest_interval: None,
            exercise_durations: Vec::new(),
        }
    }
}

/// One block of a workout section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutBlock {
    /// Structural type
    pub block_type: BlockType,
    /// Optional label ("Main lift", "Finisher")
    #[serde(default)]
    pub label: Option<String>,
    /// Number of rounds
    #[serde(default)]
    pub rounds: Option<u32>,
    /// Rest between exercises in seconds
    #[serde(default)]
    pub rest_between_exercises: Option<u32>,
    /// Rest between rounds in seconds
    #[serde(default)]
    pub rest_between_rounds: Option<u32>,
    /// Time cap in seconds
    #[serde(default)]
    pub time_cap: Option<u32>,
    /// Work interval in seconds
    #[serde(default)]
    pub work_interval: Option<u32>,
    /// Rest interval in seconds
    #[serde(default)]
    pub rest_interval: Option<u32>,
    /// Exercise slots in order
    #[serde(default)]
    pub exercises: Vec<BlockExercise>,
}

impl WorkoutBlock {
    /// Timing projection used by the duration estimator
    #[must_use]
    pub fn to_planned_block(&self) -> PlannedBlock {
        PlannedBlock {
            block_type: self.block_type,
            rounds: self.rounds,
            rest_between_exercises: self.rest_between_exercises,
            rest_between_rounds: self.rest_between_rounds,
            time_cap: self.time_cap,
            work_interval: self.work_interval,
            rest_interval: self.rest_interval,
            exercise_durations: self
                .exercises
                .iter()
                .map(BlockExercise::duration_seconds)
                .collect(),
        }
    }
}

/// Named group of blocks (warm-up, main, cool-down)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSection {
    /// Section label
    #[serde(default)]
    pub label: Option<String>,
    /// Blocks in order
    #[serde(default)]
    pub blocks: Vec<WorkoutBlock>,
}

/// A workout the user has finished
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedWorkout {
    /// Workout identifier
    pub id: Uuid,
    /// Workout title
    pub name: String,
    /// Completion timestamp
    pub completed_at: DateTime<Utc>,
    /// Session duration as logged
    #[serde(default)]
    pub duration_minutes: Option<f64>,
    /// Session RPE as logged (1-10)
    #[serde(default)]
    pub rpe: Option<f64>,
    /// Sections in order
    #[serde(default)]
    pub sections: Vec<WorkoutSection>,
}

impl CompletedWorkout {
    /// sRPE view of the workout; `None` unless both duration and RPE were logged
    #[must_use]
    pub fn session(&self) -> Option<CompletedSession> {
        match (self.duration_minutes, self.rpe) {
            (Some(duration_minutes), Some(rpe)) => Some(CompletedSession {
                completed_at: self.completed_at,
                duration_minutes,
                rpe,
            }),
            _ => None,
        }
    }

    /// All blocks across all sections, in order
    pub fn blocks(&self) -> impl Iterator<Item = &WorkoutBlock> {
        self.sections.iter().flat_map(|section| section.blocks.iter())
    }

    /// Every exercise slot paired with its containing block
    pub fn exercises(&self) -> impl Iterator<Item = (&WorkoutBlock, &BlockExercise)> {
        self.blocks()
            .flat_map(|block| block.exercises.iter().map(move |exercise| (block, exercise)))
    }

    /// Timing projection of every block
    #[must_use]
    pub fn planned_blocks(&self) -> Vec<PlannedBlock> {
        self.blocks().map(WorkoutBlock::to_planned_block).collect()
    }
}
