// ABOUTME: Scoped acute/chronic load aggregator keyed by muscle group
// ABOUTME: Pre-seeded with the catalog, counts exercises without muscle group linkage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use pierre_core::models::{MuscleGroup, MuscleGroupMapping};
use tracing::debug;

use crate::acwr::MuscleGroupWorkload;

#[derive(Debug, Clone)]
struct GroupTotals {
    group: MuscleGroup,
    acute: f64,
    chronic: f64,
}

/// Running acute and chronic totals for one workload calculation
///
/// Created per calculation and consumed by it; never shared between calls.
#[derive(Debug, Clone, Default)]
pub struct LoadAccumulator {
    totals: Vec<GroupTotals>,
    index: HashMap<String, usize>,
    unlinked: usize,
}

impl LoadAccumulator {
    /// Accumulator seeded with every catalog group at zero load
    #[must_use]
    pub fn new(muscle_groups: &[MuscleGroup]) -> Self {
        let mut accumulator = Self::default();
        for group in muscle_groups {
            accumulator.ensure_group(group);
        }
        accumulator
    }

    /// Register a group unless it is already known
    pub fn ensure_group(&mut self, group: &MuscleGroup) {
        if self.index.contains_key(&group.id) {
            return;
        }
        self.index.insert(group.id.clone(), self.totals.len());
        self.totals.push(GroupTotals {
            group: group.clone(),
            acute: 0.0,
            chronic: 0.0,
        });
    }

    /// Add `load` to the chronic total of the group, and to the acute total when `is_acute`
    ///
    /// Groups outside the catalog are registered under their id.
    pub fn add_load(&mut self, muscle_group_id: &str, load: f64, is_acute: bool) {
        let slot = if let Some(&slot) = self.index.get(muscle_group_id) {
            slot
        } else {
            debug!(muscle_group_id, "Load for muscle group outside the catalog");
            self.ensure_group(&MuscleGroup {
                id: muscle_group_id.to_owned(),
                name: muscle_group_id.to_owned(),
                label: muscle_group_id.to_owned(),
                body_part: String::new(),
            });
            self.totals.len() - 1
        };

        let totals = &mut self.totals[slot];
        totals.chronic += load;
        if is_acute {
            totals.acute += load;
        }
    }

    /// Add `load` scaled by the mapping's load factor, registering the group from
    /// the mapping when the catalog lacks it
    pub fn add_mapped_load(&mut self, mapping: &MuscleGroupMapping, load: f64, is_acute: bool) {
        if !self.index.contains_key(&mapping.muscle_group_id) {
            self.ensure_group(&MuscleGroup {
                id: mapping.muscle_group_id.clone(),
                name: mapping.name.clone(),
                label: mapping.label.clone(),
                body_part: mapping.body_part.clone(),
            });
        }
        self.add_load(&mapping.muscle_group_id, load * mapping.load_factor, is_acute);
    }

    /// Count an exercise that could not be attributed to any muscle group
    pub fn record_unlinked(&mut self) {
        self.unlinked += 1;
    }

    /// Exercises counted by [`Self::record_unlinked`]
    #[must_use]
    pub const fn unlinked_count(&self) -> usize {
        self.unlinked
    }

    /// Workloads of groups with any load, chronic normalized to a weekly rate
    ///
    /// Groups keep catalog order; groups first seen through `add_load` follow.
    #[must_use]
    pub fn to_muscle_group_workloads(&self, chronic_weeks: f64) -> Vec<MuscleGroupWorkload> {
        debug_assert!(chronic_weeks > 0.0, "chronic window must span at least one week");
        self.totals
            .iter()
            .filter(|totals| totals.acute > 0.0 || totals.chronic > 0.0)
            .map(|totals| {
                MuscleGroupWorkload::from_loads(
                    &totals.group,
                    totals.acute,
                    totals.chronic / chronic_weeks,
                )
            })
            .collect()
    }
}
