// ABOUTME: Acute:chronic workload ratio per muscle group and its risk zones
// ABOUTME: Weekly-normalized chronic load, rounded ratio, zone classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Acute:Chronic Workload Ratio
//!
//! `ACWR = acute load / chronic weekly load`. The chronic total is divided by
//! the number of weeks in the chronic window so both sides describe one week.
//!
//! | Zone | Ratio |
//! |------|-------|
//! | Undertraining | < 0.8 |
//! | Sweet spot | 0.8 - 1.3 |
//! | Caution | > 1.3 - 1.5 |
//! | Danger | > 1.5 |
//!
//! # Scientific References
//!
//! - Gabbett, T.J. (2016). "The training-injury prevention paradox." *British Journal of
//!   Sports Medicine*, 50(5), 273-280.

use pierre_core::constants::acwr;
use pierre_core::math::round_to;
use pierre_core::models::MuscleGroup;
use serde::{Deserialize, Serialize};

const LOAD_DECIMALS: i32 = 1;

/// Injury-risk zone of an ACWR value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcwrZone {
    /// Load well below what the tissue is used to
    Undertraining,
    /// Load in proportion to recent history
    SweetSpot,
    /// Elevated spike
    Caution,
    /// Sharp spike
    Danger,
}

impl AcwrZone {
    /// Zone of `ratio`; boundaries 0.8 and 1.3 belong to the sweet spot, 1.5 to caution
    #[must_use]
    pub fn classify(ratio: f64) -> Self {
        if ratio < acwr::SWEET_SPOT_MIN {
            Self::Undertraining
        } else if ratio <= acwr::SWEET_SPOT_MAX {
            Self::SweetSpot
        } else if ratio <= acwr::CAUTION_MAX {
            Self::Caution
        } else {
            Self::Danger
        }
    }
}

/// Ratio rounded to 2 decimals, `None` without chronic load
#[must_use]
pub fn acwr_ratio(acute_load: f64, chronic_weekly_load: f64) -> Option<f64> {
    (chronic_weekly_load > 0.0)
        .then(|| round_to(acute_load / chronic_weekly_load, acwr::RATIO_DECIMALS))
}

/// Acute and weekly chronic load of one muscle group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleGroupWorkload {
    /// Catalog identifier
    pub muscle_group_id: String,
    /// Machine name
    pub name: String,
    /// Display label
    pub label: String,
    /// Body region
    pub body_part: String,
    /// Load inside the acute window, 1 decimal
    pub acute_load: f64,
    /// Chronic load per week, 1 decimal
    pub chronic_load: f64,
    /// Acute over chronic, 2 decimals
    pub acwr: Option<f64>,
    /// Zone of the rounded ratio
    pub zone: Option<AcwrZone>,
}

impl MuscleGroupWorkload {
    /// Build from raw totals; rounding happens after the ratio is taken
    #[must_use]
    pub fn from_loads(group: &MuscleGroup, acute_load: f64, chronic_weekly_load: f64) -> Self {
        let ratio = acwr_ratio(acute_load, chronic_weekly_load);
        Self {
            muscle_group_id: group.id.clone(),
            name: group.name.clone(),
            label: group.label.clone(),
            body_part: group.body_part.clone(),
            acute_load: round_to(acute_load, LOAD_DECIMALS),
            chronic_load: round_to(chronic_weekly_load, LOAD_DECIMALS),
            acwr: ratio,
            zone: ratio.map(AcwrZone::classify),
        }
    }
}
