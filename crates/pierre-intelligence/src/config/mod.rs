// ABOUTME: Configuration module for pierre-intelligence crate
// ABOUTME: Re-exports workload engine configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration validation errors
pub mod error;
/// Workload windows and volume fallbacks
pub mod workload;

pub use error::ConfigError;
pub use workload::{VolumeDefaults, WorkloadConfig};
