// ABOUTME: Inclusive time window value type used by every windowed calculator
// ABOUTME: Provides ISO training-week construction and trailing/preceding windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::iter;

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Inclusive `[from, to]` time window
///
/// Immutable; callers build one per question they ask ("current week",
/// "previous week N", "trailing 28 days").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First instant inside the window
    pub from: DateTime<Utc>,
    /// Last instant inside the window
    pub to: DateTime<Utc>,
}

impl DateRange {
    /// Create a window; `from` must not be after `to`
    #[must_use]
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        debug_assert!(from <= to, "DateRange requires from <= to");
        Self { from, to }
    }

    /// Whether `timestamp` lies inside the window (both ends inclusive)
    #[must_use]
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.from && timestamp <= self.to
    }

    /// Seven-day window starting at `start`
    #[must_use]
    pub fn week_starting(start: DateTime<Utc>) -> Self {
        Self::new(start, start + Duration::days(7) - Duration::nanoseconds(1))
    }

    /// ISO training week (Monday 00:00 UTC onwards) containing `timestamp`
    #[must_use]
    pub fn week_containing(timestamp: DateTime<Utc>) -> Self {
        let date = timestamp.date_naive();
        let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
        Self::week_starting(monday.and_time(NaiveTime::MIN).and_utc())
    }

    /// The week `weeks_back` weeks before this one (same weekday alignment)
    #[must_use]
    pub fn previous_week(&self, weeks_back: i64) -> Self {
        Self::week_starting(self.from - Duration::days(7 * weeks_back))
    }

    /// `count` consecutive weeks, most recent first, the first containing `reference`
    #[must_use]
    pub fn trend_weeks(reference: DateTime<Utc>, count: usize) -> Vec<Self> {
        iter::successors(Some(Self::week_containing(reference)), |week| {
            Some(week.previous_week(1))
        })
        .take(count)
        .collect()
    }

    /// Window covering the `days` days up to and including `end`
    #[must_use]
    pub fn trailing_days(end: DateTime<Utc>, days: i64) -> Self {
        Self::new(end - Duration::days(days), end)
    }

    /// Equally long window ending just before this one starts
    #[must_use]
    pub fn preceding(&self) -> Self {
        let end = self.from - Duration::nanoseconds(1);
        Self::new(end - (self.to - self.from), end)
    }

    /// Whole days elapsed between `from` and `timestamp`, floored (negative before `from`)
    #[must_use]
    pub fn days_since_start(&self, timestamp: DateTime<Utc>) -> i64 {
        let elapsed = timestamp - self.from;
        // num_days truncates toward zero
        let days = elapsed.num_days();
        if elapsed < Duration::days(days) {
            days - 1
        } else {
            days
        }
    }

    /// Whether the two windows share at least one instant
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.from <= other.to && other.from <= self.to
    }
}
