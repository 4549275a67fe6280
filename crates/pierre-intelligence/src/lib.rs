// ABOUTME: Training-load analytics engine for the Pierre workload tooling
// ABOUTME: Calculators, ACWR zoning, recovery model, collaborator traits and orchestration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Intelligence
//!
//! Computes the training-load signals a coach needs before programming the
//! next session: weekly sRPE load with monotony and strain, per-muscle ACWR,
//! effective-set volume trends, estimated strength progression, workout
//! duration estimates and short-term muscle fatigue.
//!
//! Calculators are synchronous and pure. [`workload::WorkloadService`] and
//! [`muscle_recovery::MuscleRecoveryService`] fetch records through the traits
//! in [`repository`] and hand them to the calculators.

/// Acute:chronic workload ratio and zones
pub mod acwr;
/// Engine configuration
pub mod config;
/// Workout duration estimation
pub mod duration_estimator;
/// Acute/chronic load aggregation
pub mod load_accumulator;
/// Structured workout muscle load attribution
pub mod muscle_load;
/// Residual fatigue and recovery status
pub mod muscle_recovery;
/// Weekly effective-set volume and trend
pub mod muscle_volume;
/// Collaborator traits
pub mod repository;
/// sRPE statistics
pub mod session_load;
/// Estimated one-rep-max progression
pub mod strength_progression;
/// Summary orchestration
pub mod workload;

pub use acwr::{AcwrZone, MuscleGroupWorkload};
pub use config::{ConfigError, VolumeDefaults, WorkloadConfig};
pub use duration_estimator::DurationEstimator;
pub use load_accumulator::LoadAccumulator;
pub use muscle_load::{MuscleLoadCalculator, MuscleLoadSummary};
pub use muscle_recovery::{MuscleRecoveryService, MuscleRecoveryStatus, RecoveryStatus};
pub use muscle_volume::{MuscleGroupVolumeCalculator, MuscleGroupVolumeResult, VolumeTrend};
pub use session_load::{SessionLoadCalculator, SessionLoadResult};
pub use strength_progression::{StrengthProgressionCalculator, StrengthProgressionResult};
pub use workload::{WorkloadService, WorkloadSummary, WorkloadWarning};
