// ABOUTME: Muscle group catalog entries and exercise-to-muscle load mappings
// ABOUTME: Reference data supplied per call; the engine never caches it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Catalog entry for a muscle group
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MuscleGroup {
    /// Stable catalog identifier
    pub id: String,
    /// Machine name (`quadriceps`), also the key used by muscle load snapshots
    pub name: String,
    /// Display label (`Quadriceps`)
    pub label: String,
    /// Body region (`legs`, `chest`, ...)
    pub body_part: String,
}

/// How much of an exercise's volume is attributed to one muscle group
///
/// Primary movers usually carry `1.0`, secondary muscles `0.5`. The factor is
/// expected in `(0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleGroupMapping {
    /// Catalog identifier of the muscle group
    pub muscle_group_id: String,
    /// Machine name of the muscle group
    pub name: String,
    /// Display label
    pub label: String,
    /// Body region
    pub body_part: String,
    /// Share of the exercise volume attributed to this group
    pub load_factor: f64,
}

impl MuscleGroupMapping {
    /// Mapping for a catalog muscle group with the given load factor
    #[must_use]
    pub fn for_group(group: &MuscleGroup, load_factor: f64) -> Self {
        Self {
            muscle_group_id: group.id.clone(),
            name: group.name.clone(),
            label: group.label.clone(),
            body_part: group.body_part.clone(),
            load_factor,
        }
    }
}
