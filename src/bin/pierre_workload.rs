// ABOUTME: Pierre workload CLI - training-load analytics over a JSON dataset
// ABOUTME: Prints workload summaries, recovery status, muscle load and duration estimates as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Workload summary for a user, anchored now
//! pierre-workload --data training.json summary --user 6a2f41a3-c54c-fce8-32d2-0324e1c32e22
//!
//! # Same summary at a past reference time, pretty printed
//! pierre-workload --data training.json --as-of 2025-03-12T18:00:00Z --pretty summary --user ...
//!
//! # Residual fatigue per muscle group, freshest first suggestions included
//! pierre-workload --data training.json recovery --user ...
//!
//! # Muscle load of a structured workout, snapshots written back to training.json
//! pierre-workload --data training.json muscle-load --user ... --workout session.json
//!
//! # Estimated duration of a list of planned blocks
//! pierre-workload estimate-duration --blocks blocks.json
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use pierre_workload::errors::AppError;
use pierre_workload::intelligence::duration_estimator::DurationEstimator;
use pierre_workload::intelligence::muscle_recovery::suggest_target_muscles;
use pierre_workload::intelligence::{
    MuscleLoadCalculator, MuscleRecoveryService, WorkloadConfig, WorkloadService,
};
use pierre_workload::logging::{CommandLogger, LoggingConfig};
use pierre_workload::models::{PlannedBlock, StructuredWorkout};
use pierre_workload::store::InMemoryTrainingStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "pierre-workload",
    about = "Pierre training-load analytics",
    long_about = "Computes sRPE load, ACWR, set volume trends, strength progression, duration estimates and muscle recovery from a JSON training dataset."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Training dataset (JSON)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Reference time (RFC 3339), defaults to now
    #[arg(long, global = true)]
    as_of: Option<DateTime<Utc>>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Workload summary (session load, volume, ACWR, progression, warnings)
    Summary {
        /// User id
        #[arg(long)]
        user: Uuid,
    },

    /// Residual fatigue per muscle group
    Recovery {
        /// User id
        #[arg(long)]
        user: Uuid,
    },

    /// Muscle load of a structured workout, saved as snapshots into the --data file
    MuscleLoad {
        /// User id
        #[arg(long)]
        user: Uuid,

        /// Structured workout (JSON)
        #[arg(long)]
        workout: PathBuf,
    },

    /// Estimated duration in seconds of a list of planned blocks
    EstimateDuration {
        /// Planned blocks (JSON array)
        #[arg(long)]
        blocks: PathBuf,
    },
}

impl Command {
    const fn name(&self) -> &'static str {
        match self {
            Self::Summary { .. } => "summary",
            Self::Recovery { .. } => "recovery",
            Self::MuscleLoad { .. } => "muscle-load",
            Self::EstimateDuration { .. } => "estimate-duration",
        }
    }

    fn user(&self) -> Option<Uuid> {
        match self {
            Self::Summary { user } | Self::Recovery { user } | Self::MuscleLoad { user, .. } => {
                Some(*user)
            }
            Self::EstimateDuration { .. } => None,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let started = Instant::now();
    let command = cli.command.name();
    let user = cli.command.user().map_or_else(String::new, |id| id.to_string());

    let outcome = run(&cli).await;
    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    CommandLogger::log_command(command, &user, outcome.is_ok(), duration_ms);

    let output = outcome?;
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");
    Ok(())
}

async fn run(cli: &Cli) -> Result<serde_json::Value> {
    match &cli.command {
        Command::EstimateDuration { blocks } => {
            let blocks: Vec<PlannedBlock> = read_json(blocks).await?;
            Ok(json!({
                "estimated_seconds": DurationEstimator::estimate(&blocks),
                "blocks": DurationEstimator::breakdown(&blocks),
            }))
        }
        Command::Summary { user } => {
            let store = load_store(cli).await?;
            let service = WorkloadService::new(store, WorkloadConfig::load()?);
            let summary = service.calculate_workload(*user, cli.as_of).await?;
            to_value(&summary)
        }
        Command::Recovery { user } => {
            let store = load_store(cli).await?;
            let calculator = MuscleLoadCalculator::new(store.activity_muscles().to_vec());
            let service = MuscleRecoveryService::new(store, calculator, WorkloadConfig::load()?);
            let status = service.get_recovery_status(*user, cli.as_of).await?;
            Ok(json!({
                "muscles": status,
                "suggested_targets": suggest_target_muscles(&status),
            }))
        }
        Command::MuscleLoad { user, workout } => {
            let store = load_store(cli).await?;
            let workout: StructuredWorkout = read_json(workout).await?;
            let calculator = MuscleLoadCalculator::new(store.activity_muscles().to_vec());
            let service = MuscleRecoveryService::new(
                Arc::clone(&store),
                calculator,
                WorkloadConfig::load()?,
            );
            let summary = service.record_workout_load(*user, &workout).await?;

            let path = data_path(cli)?;
            store.save_to_path(path).await?;
            Ok(json!({
                "workout_id": workout.id,
                "muscles": summary.muscles,
                "snapshots": summary.to_snapshots(workout.id, workout.completed_at),
                "saved_to": path.display().to_string(),
            }))
        }
    }
}

fn data_path(cli: &Cli) -> Result<&Path> {
    cli.data
        .as_deref()
        .ok_or_else(|| anyhow!("--data <file> is required for this command"))
}

async fn load_store(cli: &Cli) -> Result<Arc<InMemoryTrainingStore>> {
    let path = data_path(cli)?;
    let store = InMemoryTrainingStore::from_path(path).await?;
    CommandLogger::log_dataset(
        &path.display().to_string(),
        store.user_count(),
        store.muscle_group_count(),
    );
    if let Some(user) = cli.command.user() {
        if !store.contains_user(user) {
            debug!(user_id = %user, "User has no records in dataset");
        }
    }
    Ok(Arc::new(store))
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let resource = path.display().to_string();
    let contents = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::from(e).with_resource_id(resource.clone()))?;
    let value = serde_json::from_str(&contents)
        .map_err(|e| AppError::from(e).with_resource_id(resource))?;
    Ok(value)
}

fn to_value(value: &impl Serialize) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(value)?)
}
