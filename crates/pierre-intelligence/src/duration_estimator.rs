// ABOUTME: Workout duration estimation from block structure and timing fields
// ABOUTME: Per-block-type policies (intervals, EMOM, circuits, supersets, capped blocks)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Duration Estimation
//!
//! Estimates how long a workout takes from the structure of its blocks. Each
//! block type has its own policy; a block without enough timing data yields
//! no estimate and contributes nothing to the total.
//!
//! The overall estimate is `None` only when no block could be estimated, so
//! "unknown" stays distinguishable from "zero seconds".

use pierre_core::models::{BlockType, PlannedBlock};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Per-block estimate, kept for explainability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDurationEstimate {
    /// Block type the policy was selected from
    pub block_type: BlockType,
    /// Estimated seconds, `None` when the block lacks timing data
    pub seconds: Option<u64>,
}

/// Estimates workout duration in seconds
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationEstimator;

impl DurationEstimator {
    /// Estimate the total duration of `blocks`
    ///
    /// Resolvable blocks are summed; unresolvable ones count as zero. Returns
    /// `None` when the list is empty or no block resolves.
    #[must_use]
    pub fn estimate(blocks: &[PlannedBlock]) -> Option<u64> {
        let total = blocks
            .iter()
            .filter_map(Self::estimate_block)
            .fold(None, |total: Option<u64>, seconds| {
                Some(total.unwrap_or(0).saturating_add(seconds))
            });

        debug!(
            block_count = blocks.len(),
            estimated_seconds = ?total,
            "Estimated workout duration"
        );
        total
    }

    /// Estimate every block individually, preserving order
    #[must_use]
    pub fn breakdown(blocks: &[PlannedBlock]) -> Vec<BlockDurationEstimate> {
        blocks
            .iter()
            .map(|block| BlockDurationEstimate {
                block_type: block.block_type,
                seconds: Self::estimate_block(block),
            })
            .collect()
    }

    /// Estimate a single block according to its type
    #[must_use]
    pub fn estimate_block(block: &PlannedBlock) -> Option<u64> {
        match block.block_type {
            BlockType::DistanceDuration | BlockType::StraightSets | BlockType::Rest => {
                KnownDurations::of(block).map(|known| known.sum)
            }
            BlockType::Interval => {
                let rounds = u64::from(block.rounds?);
                let work = u64::from(block.work_interval?);
                let rest = u64::from(block.rest_interval?);
                // No trailing rest after the final round
                Some((rounds * (work + rest)).saturating_sub(rest))
            }
            BlockType::Emom => {
                let rounds = u64::from(block.rounds?);
                let work = u64::from(block.work_interval?);
                Some(rounds * work)
            }
            BlockType::Amrap | BlockType::ForTime => block.time_cap.map(u64::from),
            BlockType::Circuit => {
                let rounds = u64::from(block.rounds?);
                let known = KnownDurations::of(block)?;
                let rest_between_exercises = u64::from(block.rest_between_exercises.unwrap_or(0));
                let per_round =
                    known.sum + rest_between_exercises * known.count.saturating_sub(1);
                Some(rounds * per_round + Self::rest_between_rounds(block, rounds))
            }
            BlockType::Superset => {
                let rounds = u64::from(block.rounds?);
                let known = KnownDurations::of(block)?;
                Some(rounds * known.sum + Self::rest_between_rounds(block, rounds))
            }
        }
    }

    fn rest_between_rounds(block: &PlannedBlock, rounds: u64) -> u64 {
        u64::from(block.rest_between_rounds.unwrap_or(0)) * rounds.saturating_sub(1)
    }
}

/// Sum and count of the exercise durations that are known
struct KnownDurations {
    sum: u64,
    count: u64,
}

impl KnownDurations {
    /// `None` when no exercise duration is known
    fn of(block: &PlannedBlock) -> Option<Self> {
        let known = block
            .exercise_durations
            .iter()
            .flatten()
            .fold(Self { sum: 0, count: 0 }, |acc, &seconds| Self {
                sum: acc.sum + u64::from(seconds),
                count: acc.count + 1,
            });
        (known.count > 0).then_some(known)
    }
}
