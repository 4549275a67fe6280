// ABOUTME: Residual muscle fatigue from recent load snapshots with linear time decay
// ABOUTME: Load-tiered recovery windows, fresh/recovering/fatigued status, freshest-first suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Muscle Recovery
//!
//! Each snapshot decays linearly to zero over a recovery window chosen by its
//! load: under 30 recovers in 24h, under 70 in 48h, anything heavier in 72h.
//!
//! `remaining = max(0, 1 - hours_since / recovery_hours) x load`
//!
//! Remaining fatigue is summed per muscle group and classified:
//! `<= 20` fresh, `<= 50` recovering, otherwise fatigued. A group is ready
//! for heavy work below 15.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use pierre_core::constants::{recovery, units};
use pierre_core::errors::AppResult;
use pierre_core::math::round_to;
use pierre_core::models::{DateRange, StructuredWorkout, WorkoutMuscleLoadSnapshot};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::config::WorkloadConfig;
use crate::muscle_load::{MuscleLoadCalculator, MuscleLoadSummary};
use crate::repository::{MuscleLoadSnapshotRepository, WorkoutRepository};

const FATIGUE_DECIMALS: i32 = 1;

/// Recovery classification of one muscle group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryStatus {
    /// Little or no residual fatigue
    Fresh,
    /// Partially recovered
    Recovering,
    /// Still carrying substantial fatigue
    Fatigued,
}

impl RecoveryStatus {
    /// Status of a fatigue score
    #[must_use]
    pub fn classify(fatigue_score: f64) -> Self {
        if fatigue_score <= recovery::FRESH_MAX {
            Self::Fresh
        } else if fatigue_score <= recovery::RECOVERING_MAX {
            Self::Recovering
        } else {
            Self::Fatigued
        }
    }
}

/// Recovery state of one muscle group
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MuscleRecoveryStatus {
    /// Residual fatigue, 1 decimal
    pub fatigue_score: f64,
    /// Classification of the rounded score
    pub status: RecoveryStatus,
    /// `fatigue_score < 15`
    pub ready_for_heavy: bool,
}

impl MuscleRecoveryStatus {
    /// Rounds `fatigue` and classifies it
    #[must_use]
    pub fn from_fatigue(fatigue: f64) -> Self {
        let fatigue_score = round_to(fatigue, FATIGUE_DECIMALS);
        Self {
            fatigue_score,
            status: RecoveryStatus::classify(fatigue_score),
            ready_for_heavy: fatigue_score < recovery::READY_FOR_HEAVY_BELOW,
        }
    }
}

/// A muscle group with its recovery state, used for ordered suggestions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleRecoveryEntry {
    /// Muscle group key
    pub muscle_group: String,
    /// Residual fatigue, 1 decimal
    pub fatigue_score: f64,
    /// Classification
    pub status: RecoveryStatus,
    /// Ready for heavy work
    pub ready_for_heavy: bool,
}

/// Hours a load needs to fully decay
#[must_use]
pub fn recovery_hours(total_load: f64) -> f64 {
    if total_load < recovery::LIGHT_LOAD_MAX {
        recovery::LIGHT_RECOVERY_HOURS
    } else if total_load < recovery::MODERATE_LOAD_MAX {
        recovery::MODERATE_RECOVERY_HOURS
    } else {
        recovery::HEAVY_RECOVERY_HOURS
    }
}

/// Fatigue left from `snapshot` at `as_of`; zero for snapshots after `as_of`
#[must_use]
pub fn remaining_fatigue(snapshot: &WorkoutMuscleLoadSnapshot, as_of: DateTime<Utc>) -> f64 {
    let hours_since = (as_of - snapshot.completed_at).num_milliseconds() as f64
        / (units::SECONDS_PER_HOUR * 1000.0);
    if hours_since < 0.0 {
        return 0.0;
    }
    let decay = (1.0 - hours_since / recovery_hours(snapshot.total_load)).max(0.0);
    decay * snapshot.total_load
}

/// Recovery state per muscle group at `as_of`
///
/// Every key in `muscle_groups` appears (zero-filled when untouched); groups
/// only present in snapshots are included as well.
#[must_use]
pub fn compute_recovery_status<'a>(
    snapshots: &[WorkoutMuscleLoadSnapshot],
    muscle_groups: impl IntoIterator<Item = &'a str>,
    as_of: DateTime<Utc>,
) -> BTreeMap<String, MuscleRecoveryStatus> {
    let mut fatigue: BTreeMap<String, f64> = muscle_groups
        .into_iter()
        .map(|key| (key.to_owned(), 0.0))
        .collect();

    for snapshot in snapshots {
        *fatigue.entry(snapshot.muscle_group.clone()).or_insert(0.0) +=
            remaining_fatigue(snapshot, as_of);
    }

    fatigue
        .into_iter()
        .map(|(key, score)| (key, MuscleRecoveryStatus::from_fatigue(score)))
        .collect()
}

/// All groups ordered freshest first, ties broken by key
#[must_use]
pub fn suggest_target_muscles(
    status: &BTreeMap<String, MuscleRecoveryStatus>,
) -> Vec<MuscleRecoveryEntry> {
    let mut entries: Vec<MuscleRecoveryEntry> = status
        .iter()
        .map(|(muscle_group, state)| MuscleRecoveryEntry {
            muscle_group: muscle_group.clone(),
            fatigue_score: state.fatigue_score,
            status: state.status,
            ready_for_heavy: state.ready_for_heavy,
        })
        .collect();
    entries.sort_by(|a, b| {
        a.fatigue_score
            .total_cmp(&b.fatigue_score)
            .then_with(|| a.muscle_group.cmp(&b.muscle_group))
    });
    entries
}

/// Records workout muscle load and reports recovery state
pub struct MuscleRecoveryService<R> {
    repository: Arc<R>,
    calculator: MuscleLoadCalculator,
    config: WorkloadConfig,
}

impl<R> MuscleRecoveryService<R>
where
    R: MuscleLoadSnapshotRepository + WorkoutRepository,
{
    /// Create a service over `repository`
    #[must_use]
    pub const fn new(
        repository: Arc<R>,
        calculator: MuscleLoadCalculator,
        config: WorkloadConfig,
    ) -> Self {
        Self {
            repository,
            calculator,
            config,
        }
    }

    /// Recovery state of every catalog muscle group at `as_of` (default now)
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshots or the catalog cannot be fetched
    #[instrument(skip_all, fields(user_id = %user_id))]
    pub async fn get_recovery_status(
        &self,
        user_id: Uuid,
        as_of: Option<DateTime<Utc>>,
    ) -> AppResult<BTreeMap<String, MuscleRecoveryStatus>> {
        let as_of = as_of.unwrap_or_else(Utc::now);
        let lookback = DateRange::trailing_days(as_of, self.config.recovery_lookback_days);

        let snapshots = self.repository.snapshots(user_id, &lookback).await?;
        let muscle_groups = self.repository.muscle_groups().await?;

        let status = compute_recovery_status(
            &snapshots,
            muscle_groups.iter().map(|group| group.name.as_str()),
            as_of,
        );

        debug!(
            snapshot_count = snapshots.len(),
            muscle_group_count = status.len(),
            %as_of,
            "Computed muscle recovery status"
        );
        Ok(status)
    }

    /// Calculate the muscle load of a completed workout and persist it as snapshots
    ///
    /// Recording a workout again replaces its earlier snapshots.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshots cannot be stored
    #[instrument(skip_all, fields(user_id = %user_id, workout_id = %workout.id))]
    pub async fn record_workout_load(
        &self,
        user_id: Uuid,
        workout: &StructuredWorkout,
    ) -> AppResult<MuscleLoadSummary> {
        let summary = self.calculator.calculate(workout);
        let snapshots = summary.to_snapshots(workout.id, workout.completed_at);

        info!(
            snapshot_count = snapshots.len(),
            "Recording workout muscle load"
        );
        self.repository
            .save_snapshots(user_id, workout.id, snapshots)
            .await?;
        Ok(summary)
    }
}
