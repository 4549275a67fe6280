// ABOUTME: Workload summary orchestration for one user at one reference time
// ABOUTME: Window construction, per-exercise volume metric, acute/chronic accumulation, warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workload Summary
//!
//! Fetches the records a summary needs through the repository traits, then
//! runs the four independent calculations in parallel:
//!
//! - acute/chronic accumulation per muscle group (ACWR)
//! - session load (sRPE, monotony, strain)
//! - weekly effective-set volume and trend
//! - strength progression (e1RM)
//!
//! Everything after the fetch is a pure function of the records and the
//! reference time, see [`summarize_workload`].

use std::iter;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use pierre_core::constants::{units, volume_defaults};
use pierre_core::errors::{AppError, AppResult};
use pierre_core::models::{
    CompletedSession, CompletedWorkout, DateRange, Exerciseable, Injury, MuscleGroup,
    PerformedExercise, StrengthRecord,
};
use serde::{Deserialize, Serialize};
use tokio::task;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::acwr::{AcwrZone, MuscleGroupWorkload};
use crate::config::{VolumeDefaults, WorkloadConfig};
use crate::load_accumulator::LoadAccumulator;
use crate::muscle_volume::{MuscleGroupVolumeCalculator, MuscleGroupVolumeResult};
use crate::repository::{InjuryRepository, StrengthHistoryRepository, WorkoutRepository};
use crate::session_load::{SessionLoadCalculator, SessionLoadResult};
use crate::strength_progression::{StrengthProgressionCalculator, StrengthProgressionResult};

/// Condition worth surfacing to whoever reads the summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkloadWarning {
    /// Weekly session load changed by more than 15% against last week
    WeekOverWeekSpike {
        /// Change in percent
        change_pct: f64,
    },
    /// Daily loads of the current week were too uniform
    HighMonotony {
        /// Foster monotony
        monotony: f64,
    },
    /// Muscle group in the ACWR caution zone
    AcwrCaution {
        /// Catalog identifier
        muscle_group_id: String,
        /// Ratio
        acwr: f64,
    },
    /// Muscle group in the ACWR danger zone
    AcwrDanger {
        /// Catalog identifier
        muscle_group_id: String,
        /// Ratio
        acwr: f64,
    },
    /// Exercises could not be attributed to muscle groups
    UnlinkedExercises {
        /// Number of exercises
        count: usize,
    },
}

/// Everything known about a user's recent training load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadSummary {
    /// User the summary belongs to
    pub user_id: Uuid,
    /// Instant the windows are anchored to
    pub reference_time: DateTime<Utc>,
    /// `None` when no session in the trend weeks logged both duration and RPE
    pub session_load: Option<SessionLoadResult>,
    /// Weekly set volume per muscle group
    pub muscle_group_volume: Vec<MuscleGroupVolumeResult>,
    /// Acute/chronic load per muscle group with any load
    pub muscle_group_workloads: Vec<MuscleGroupWorkload>,
    /// Injuries active at the reference time
    pub active_injuries: Vec<Injury>,
    /// e1RM progression per exercise
    pub strength_progression: Vec<StrengthProgressionResult>,
    /// Exercises in the chronic window without muscle group linkage
    pub unlinked_exercise_count: usize,
    /// Raised warnings
    pub warnings: Vec<WorkloadWarning>,
}

/// Output of the accumulation pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccumulatedWorkload {
    /// Groups with nonzero acute or chronic load
    pub workloads: Vec<MuscleGroupWorkload>,
    /// Exercises that could not be attributed
    pub unlinked_exercise_count: usize,
}

/// Time windows derived from a reference time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadWindows {
    /// Anchor
    pub reference_time: DateTime<Utc>,
    /// ISO week containing the reference time
    pub current_week: DateRange,
    /// Older ISO weeks, most recent first
    pub previous_weeks: Vec<DateRange>,
    /// Trailing chronic window
    pub chronic: DateRange,
    /// Exercises at or after this instant are acute
    pub acute_cutoff: DateTime<Utc>,
    /// Trailing progression period
    pub progression_current: DateRange,
    /// Progression period immediately before the current one
    pub progression_previous: DateRange,
}

impl WorkloadWindows {
    /// Windows for `reference_time` under `config`
    #[must_use]
    pub fn new(reference_time: DateTime<Utc>, config: &WorkloadConfig) -> Self {
        let current_week = DateRange::week_containing(reference_time);
        let previous_weeks = DateRange::trend_weeks(reference_time, config.trend_weeks)
            .into_iter()
            .skip(1)
            .collect();
        let progression_current =
            DateRange::trailing_days(reference_time, config.progression_period_days);

        Self {
            reference_time,
            current_week,
            previous_weeks,
            chronic: DateRange::trailing_days(reference_time, config.chronic_window_days),
            acute_cutoff: reference_time - Duration::days(config.acute_window_days),
            progression_previous: progression_current.preceding(),
            progression_current,
        }
    }

    /// Current week followed by the previous weeks
    #[must_use]
    pub fn volume_ranges(&self) -> Vec<DateRange> {
        iter::once(self.current_week)
            .chain(self.previous_weeks.iter().copied())
            .collect()
    }

    /// Smallest window covering the trend weeks and the chronic window
    ///
    /// Ends at the reference time, not at the end of the current week.
    #[must_use]
    pub fn workout_fetch_range(&self) -> DateRange {
        let oldest_week = self.previous_weeks.last().unwrap_or(&self.current_week);
        DateRange::new(oldest_week.from.min(self.chronic.from), self.reference_time)
    }

    /// Both progression periods
    #[must_use]
    pub fn progression_fetch_range(&self) -> DateRange {
        DateRange::new(self.progression_previous.from, self.progression_current.to)
    }
}

/// Volume metric of one exercise slot
///
/// - strength: `sets x reps x RPE / 10`, sets falling back to the block rounds then 1,
///   reps to the upper then lower target then 1
/// - cardio: `minutes / 10 x zone / 5`
/// - duration: `minutes x RPE / 10`
#[must_use]
pub fn exercise_volume(
    exercise: &Exerciseable,
    block_rounds: Option<u32>,
    defaults: &VolumeDefaults,
) -> f64 {
    match exercise {
        Exerciseable::Strength {
            target_sets,
            target_reps_min,
            target_reps_max,
            target_rpe,
            ..
        } => {
            let sets = target_sets.or(block_rounds).unwrap_or(1);
            let reps = target_reps_max.or(*target_reps_min).unwrap_or(1);
            let rpe = target_rpe.unwrap_or(defaults.rpe);
            f64::from(sets) * f64::from(reps) * (rpe / volume_defaults::RPE_SCALE)
        }
        Exerciseable::Cardio {
            duration_seconds,
            heart_rate_zone,
            ..
        } => {
            let minutes = f64::from(duration_seconds.unwrap_or(0)) / units::SECONDS_PER_MINUTE;
            let zone = heart_rate_zone.unwrap_or(defaults.heart_rate_zone);
            (minutes / volume_defaults::CARDIO_MINUTES_DIVISOR)
                * (f64::from(zone) / volume_defaults::HEART_RATE_ZONE_SCALE)
        }
        Exerciseable::Duration {
            duration_seconds,
            target_rpe,
        } => {
            let minutes = f64::from(duration_seconds.unwrap_or(0)) / units::SECONDS_PER_MINUTE;
            let rpe = target_rpe.unwrap_or(defaults.rpe);
            minutes * (rpe / volume_defaults::RPE_SCALE)
        }
    }
}

/// Distribute exercise volume over muscle groups into acute and chronic totals
///
/// Only workouts inside `chronic_window` count. Exercises without a catalog id
/// or without muscle group mappings are counted as unlinked.
#[must_use]
pub fn accumulate_workload(
    workouts: &[CompletedWorkout],
    muscle_groups: &[MuscleGroup],
    chronic_window: &DateRange,
    acute_cutoff: DateTime<Utc>,
    config: &WorkloadConfig,
) -> AccumulatedWorkload {
    let mut accumulator = LoadAccumulator::new(muscle_groups);

    for workout in workouts
        .iter()
        .filter(|workout| chronic_window.contains(workout.completed_at))
    {
        let is_acute = workout.completed_at >= acute_cutoff;
        for (block, slot) in workout.exercises() {
            if slot.exercise_id.is_none() || slot.muscle_groups.is_empty() {
                accumulator.record_unlinked();
                continue;
            }
            let volume = exercise_volume(&slot.exercise, block.rounds, &config.volume_defaults);
            for mapping in &slot.muscle_groups {
                accumulator.add_mapped_load(mapping, volume, is_acute);
            }
        }
    }

    AccumulatedWorkload {
        workloads: accumulator.to_muscle_group_workloads(config.chronic_weeks()),
        unlinked_exercise_count: accumulator.unlinked_count(),
    }
}

/// Exercise slots of `workouts` as performed exercises for volume analysis
#[must_use]
pub fn performed_exercises(workouts: &[CompletedWorkout]) -> Vec<PerformedExercise> {
    workouts
        .iter()
        .flat_map(|workout| {
            workout.exercises().map(|(block, slot)| {
                let target_sets = match slot.exercise {
                    Exerciseable::Strength { target_sets, .. } => target_sets,
                    Exerciseable::Cardio { .. } | Exerciseable::Duration { .. } => None,
                };
                PerformedExercise {
                    completed_at: workout.completed_at,
                    sets: target_sets.or(block.rounds).unwrap_or(1),
                    exercise_type: slot.exercise.exercise_type(),
                    muscle_groups: slot.muscle_groups.clone(),
                }
            })
        })
        .collect()
}

/// Assemble a summary from already fetched records
#[must_use]
pub fn summarize_workload(
    user_id: Uuid,
    windows: &WorkloadWindows,
    records: WorkloadRecords,
    config: &WorkloadConfig,
) -> WorkloadSummary {
    let WorkloadRecords {
        mut workouts,
        muscle_groups,
        strength_records,
        active_injuries,
    } = records;
    // The rest of the current week has not happened yet
    workouts.retain(|workout| workout.completed_at <= windows.reference_time);

    let volume_ranges = windows.volume_ranges();
    let sessions: Vec<CompletedSession> = workouts
        .iter()
        .filter_map(CompletedWorkout::session)
        .collect();
    let exercises = performed_exercises(&workouts);

    let ((accumulated, session_load), (muscle_group_volume, strength_progression)) = rayon::join(
        || {
            rayon::join(
                || {
                    accumulate_workload(
                        &workouts,
                        &muscle_groups,
                        &windows.chronic,
                        windows.acute_cutoff,
                        config,
                    )
                },
                || {
                    let in_trend = sessions.iter().any(|session| {
                        volume_ranges
                            .iter()
                            .any(|week| week.contains(session.completed_at))
                    });
                    in_trend.then(|| {
                        SessionLoadCalculator::calculate(
                            &sessions,
                            &windows.current_week,
                            &windows.previous_weeks,
                        )
                    })
                },
            )
        },
        || {
            rayon::join(
                || MuscleGroupVolumeCalculator::calculate(&exercises, &volume_ranges),
                || {
                    StrengthProgressionCalculator::calculate(
                        &strength_records,
                        &windows.progression_current,
                        &windows.progression_previous,
                    )
                },
            )
        },
    );

    let warnings = collect_warnings(
        session_load.as_ref(),
        &accumulated.workloads,
        accumulated.unlinked_exercise_count,
    );

    WorkloadSummary {
        user_id,
        reference_time: windows.reference_time,
        session_load,
        muscle_group_volume,
        muscle_group_workloads: accumulated.workloads,
        active_injuries,
        strength_progression,
        unlinked_exercise_count: accumulated.unlinked_exercise_count,
        warnings,
    }
}

/// Warnings raised by the calculated figures, in a stable order
#[must_use]
pub fn collect_warnings(
    session_load: Option<&SessionLoadResult>,
    workloads: &[MuscleGroupWorkload],
    unlinked_exercise_count: usize,
) -> Vec<WorkloadWarning> {
    let mut warnings = Vec::new();

    if let Some(load) = session_load {
        if load.week_over_week_warning {
            warnings.push(WorkloadWarning::WeekOverWeekSpike {
                change_pct: load.week_over_week_change_pct,
            });
        }
        if load.monotony_warning {
            warnings.push(WorkloadWarning::HighMonotony {
                monotony: load.monotony,
            });
        }
    }

    for workload in workloads {
        let (Some(acwr), Some(zone)) = (workload.acwr, workload.zone) else {
            continue;
        };
        let muscle_group_id = workload.muscle_group_id.clone();
        match zone {
            AcwrZone::Caution => warnings.push(WorkloadWarning::AcwrCaution {
                muscle_group_id,
                acwr,
            }),
            AcwrZone::Danger => warnings.push(WorkloadWarning::AcwrDanger {
                muscle_group_id,
                acwr,
            }),
            AcwrZone::Undertraining | AcwrZone::SweetSpot => {}
        }
    }

    if unlinked_exercise_count > 0 {
        warnings.push(WorkloadWarning::UnlinkedExercises {
            count: unlinked_exercise_count,
        });
    }

    warnings
}

/// Records fetched for one summary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkloadRecords {
    /// Completed workouts covering trend weeks and chronic window
    pub workouts: Vec<CompletedWorkout>,
    /// Muscle group catalog
    pub muscle_groups: Vec<MuscleGroup>,
    /// Strength records covering both progression periods
    pub strength_records: Vec<StrengthRecord>,
    /// Injuries active at the reference time
    pub active_injuries: Vec<Injury>,
}

/// Builds workload summaries from repository data
pub struct WorkloadService<R> {
    repository: Arc<R>,
    config: WorkloadConfig,
}

impl<R> WorkloadService<R>
where
    R: WorkoutRepository + StrengthHistoryRepository + InjuryRepository,
{
    /// Create a service over `repository`
    #[must_use]
    pub const fn new(repository: Arc<R>, config: WorkloadConfig) -> Self {
        Self { repository, config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &WorkloadConfig {
        &self.config
    }

    /// Workload summary of `user_id` at `reference_time` (default now)
    ///
    /// The calculations run on the blocking pool.
    ///
    /// # Errors
    ///
    /// Returns an error if any repository fetch fails or the calculation task aborts
    #[instrument(skip_all, fields(user_id = %user_id))]
    pub async fn calculate_workload(
        &self,
        user_id: Uuid,
        reference_time: Option<DateTime<Utc>>,
    ) -> AppResult<WorkloadSummary> {
        let reference_time = reference_time.unwrap_or_else(Utc::now);
        let windows = WorkloadWindows::new(reference_time, &self.config);

        let records = WorkloadRecords {
            workouts: self
                .repository
                .completed_workouts(user_id, &windows.workout_fetch_range())
                .await?,
            muscle_groups: self.repository.muscle_groups().await?,
            strength_records: self
                .repository
                .strength_records(user_id, &windows.progression_fetch_range())
                .await?,
            active_injuries: self
                .repository
                .active_injuries(user_id, reference_time)
                .await?,
        };
        debug!(
            workout_count = records.workouts.len(),
            strength_record_count = records.strength_records.len(),
            injury_count = records.active_injuries.len(),
            "Fetched workload records"
        );

        let config = self.config.clone();
        let summary =
            task::spawn_blocking(move || summarize_workload(user_id, &windows, records, &config))
                .await
                .map_err(|e| {
                    AppError::internal(format!("workload calculation did not complete: {e}"))
                })?;

        if summary.unlinked_exercise_count > 0 {
            warn!(
                unlinked_exercise_count = summary.unlinked_exercise_count,
                "Exercises without muscle group linkage were skipped"
            );
        }
        info!(
            %reference_time,
            warning_count = summary.warnings.len(),
            "Calculated workload summary"
        );
        Ok(summary)
    }
}
