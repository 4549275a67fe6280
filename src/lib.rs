// ABOUTME: Main library entry point for the Pierre workload tooling
// ABOUTME: Re-exports the analytics engine and provides logging setup and a JSON-backed record store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Workload
//!
//! Training-load analytics over a user's completed workouts: weekly sRPE load,
//! monotony and strain, per-muscle acute:chronic workload ratio, effective-set
//! volume trends, estimated one-rep-max progression, workout duration
//! estimates and short-term muscle recovery.
//!
//! ## Architecture
//!
//! - **pierre-core**: models, constants, `AppError`
//! - **pierre-intelligence**: calculators, repository traits, orchestration
//! - **store**: in-memory repository implementation over a JSON dataset
//! - **logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use pierre_workload::errors::AppResult;
//! use pierre_workload::intelligence::{WorkloadConfig, WorkloadService};
//! use pierre_workload::store::InMemoryTrainingStore;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let store = Arc::new(InMemoryTrainingStore::from_path("training.json").await?);
//!     let service = WorkloadService::new(store, WorkloadConfig::load()?);
//!
//!     let summary = service.calculate_workload(Uuid::new_v4(), None).await?;
//!     println!("{} warnings", summary.warnings.len());
//!     Ok(())
//! }
//! ```

/// Logging configuration and structured logging setup
pub mod logging;

/// JSON-backed in-memory record store
pub mod store;

pub use pierre_core::{constants, errors, models};
pub use pierre_intelligence as intelligence;
