// ABOUTME: Core types and constants for the Pierre training-load engine
// ABOUTME: Foundation crate with error handling, domain models, constants and numeric helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Core
//!
//! Foundation crate providing shared types and constants for the Pierre
//! training-load engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Thresholds, defaults and unit factors organized by domain
//! - **models**: Workouts, exercises, muscle groups, records and snapshots
//! - **math**: Rounding and summary statistics shared by the calculators

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (workouts, exercises, muscle groups, snapshots)
pub mod models;

/// Rounding and summary statistics
pub mod math;
