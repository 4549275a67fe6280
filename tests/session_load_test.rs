// ABOUTME: Tests for sRPE session load statistics over ISO training weeks
// ABOUTME: Weekly totals, monotony/strain with zero guards, week-over-week change and warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{assert_close, at, current_week_start, reference_time, session};
use pierre_workload::intelligence::session_load::SessionLoadCalculator;
use pierre_workload::models::{CompletedSession, DateRange};

fn weeks() -> (DateRange, Vec<DateRange>) {
    let mut weeks = DateRange::trend_weeks(reference_time(), 4);
    let current = weeks.remove(0);
    (current, weeks)
}

/// One session per day of the current week, starting Monday, with the given loads
fn daily_sessions(loads: &[f64]) -> Vec<CompletedSession> {
    loads
        .iter()
        .zip(0_i64..)
        .filter(|(load, _)| **load > 0.0)
        .map(|(load, day)| {
            session(
                current_week_start() + Duration::days(day) + Duration::hours(7),
                *load / 5.0,
                5.0,
            )
        })
        .collect()
}

#[test]
fn test_session_load_is_rounded_srpe() {
    assert_eq!(session(reference_time(), 45.0, 7.0).session_load(), 315);
    assert_eq!(session(reference_time(), 32.5, 7.0).session_load(), 228);
}

#[test]
fn test_no_sessions_yields_zeros() {
    let (current, previous) = weeks();
    let result = SessionLoadCalculator::calculate(&[], &current, &previous);

    assert_eq!(result.current_weekly_total, 0);
    assert_eq!(result.current_session_count, 0);
    assert_close(result.monotony, 0.0);
    assert_close(result.strain, 0.0);
    assert_close(result.week_over_week_change_pct, 0.0);
    assert!(!result.week_over_week_warning);
    assert!(!result.monotony_warning);

    let offsets: Vec<i64> = result.previous_weeks.iter().map(|w| w.week_offset).collect();
    assert_eq!(offsets, vec![-1, -2, -3]);
    assert!(result.previous_weeks.iter().all(|w| w.total_load == 0));
}

#[test]
fn test_current_week_totals_and_monotony() {
    let (current, previous) = weeks();
    let sessions = vec![
        session(at("2025-03-10T07:00:00Z"), 60.0, 7.0),
        session(at("2025-03-12T07:00:00Z"), 45.0, 6.0),
        // Sunday before the week: not counted in the current week
        session(at("2025-03-09T23:59:59Z"), 30.0, 5.0),
    ];

    let result = SessionLoadCalculator::calculate(&sessions, &current, &previous);

    assert_eq!(result.current_weekly_total, 690);
    assert_eq!(result.current_session_count, 2);
    assert_close(result.monotony, 0.61);
    assert_close(result.strain, 420.9);
    assert!(!result.monotony_warning);
    assert_eq!(result.previous_weeks[0].total_load, 150);
    assert_eq!(result.previous_weeks[0].session_count, 1);
}

#[test]
fn test_session_just_before_monday_stays_out_of_monotony() {
    let (current, previous) = weeks();
    let sessions = vec![
        session(current_week_start() - Duration::milliseconds(500), 30.0, 5.0),
        session(at("2025-03-10T07:00:00Z"), 60.0, 7.0),
        session(at("2025-03-12T07:00:00Z"), 45.0, 6.0),
    ];

    let result = SessionLoadCalculator::calculate(&sessions, &current, &previous);

    assert_eq!(result.current_weekly_total, 690);
    assert_close(result.monotony, 0.61);
    assert_close(result.strain, 420.9);
    assert_eq!(result.previous_weeks[0].total_load, 150);
}

#[test]
fn test_week_upper_bound_is_inclusive() {
    let (current, previous) = weeks();
    let sessions = vec![session(current.to, 10.0, 5.0)];

    let result = SessionLoadCalculator::calculate(&sessions, &current, &previous);
    assert_eq!(result.current_weekly_total, 50);
    assert_eq!(result.current_session_count, 1);
}

#[test]
fn test_uniform_daily_load_has_zero_monotony() {
    let (current, previous) = weeks();
    let sessions = daily_sessions(&[300.0; 7]);

    let result = SessionLoadCalculator::calculate(&sessions, &current, &previous);
    assert_eq!(result.current_weekly_total, 2100);
    assert_close(result.monotony, 0.0);
    assert_close(result.strain, 0.0);
    assert!(!result.monotony_warning);
}

#[test]
fn test_high_monotony_raises_warning() {
    let (current, previous) = weeks();
    let sessions = daily_sessions(&[300.0, 300.0, 300.0, 300.0, 300.0, 300.0, 0.0]);

    let result = SessionLoadCalculator::calculate(&sessions, &current, &previous);
    assert_close(result.monotony, 2.45);
    assert_close(result.strain, 4410.0);
    assert!(result.monotony_warning);
}

#[test]
fn test_multiple_sessions_share_a_daily_slot() {
    let (current, _) = weeks();
    let sessions = vec![
        session(at("2025-03-11T06:00:00Z"), 30.0, 5.0),
        session(at("2025-03-11T18:00:00Z"), 30.0, 5.0),
    ];
    let single_day = vec![session(at("2025-03-11T06:00:00Z"), 60.0, 5.0)];

    assert_eq!(
        SessionLoadCalculator::monotony_strain(&sessions, &current),
        SessionLoadCalculator::monotony_strain(&single_day, &current)
    );
}

#[test]
fn test_week_over_week_change() {
    assert_close(SessionLoadCalculator::week_over_week_change(690, 600), 15.0);
    assert_close(SessionLoadCalculator::week_over_week_change(690, 500), 38.0);
    assert_close(SessionLoadCalculator::week_over_week_change(300, 400), -25.0);
    assert_close(SessionLoadCalculator::week_over_week_change(300, 0), 0.0);
}

#[test]
fn test_week_over_week_warning_threshold_is_exclusive() {
    let (current, previous) = weeks();
    let last_week = previous[0].from + Duration::days(2);

    let at_threshold = vec![
        session(at("2025-03-11T07:00:00Z"), 115.0, 1.0),
        session(last_week, 100.0, 1.0),
    ];
    let result = SessionLoadCalculator::calculate(&at_threshold, &current, &previous);
    assert_close(result.week_over_week_change_pct, 15.0);
    assert!(!result.week_over_week_warning);

    let spike = vec![
        session(at("2025-03-11T07:00:00Z"), 60.0, 7.0),
        session(last_week, 40.0, 5.0),
    ];
    let result = SessionLoadCalculator::calculate(&spike, &current, &previous);
    assert_close(result.week_over_week_change_pct, 110.0);
    assert!(result.week_over_week_warning);
}

#[test]
fn test_drop_in_load_also_warns() {
    let (current, previous) = weeks();
    let sessions = vec![
        session(at("2025-03-11T07:00:00Z"), 20.0, 5.0),
        session(previous[0].from, 40.0, 5.0),
    ];
    let result = SessionLoadCalculator::calculate(&sessions, &current, &previous);
    assert_close(result.week_over_week_change_pct, -50.0);
    assert!(result.week_over_week_warning);
}

#[test]
fn test_calculation_is_idempotent() {
    let (current, previous) = weeks();
    let sessions = daily_sessions(&[400.0, 350.0, 300.0, 0.0, 300.0, 350.0, 0.0]);

    let first = SessionLoadCalculator::calculate(&sessions, &current, &previous);
    let second = SessionLoadCalculator::calculate(&sessions, &current, &previous);
    assert_eq!(first, second);
    assert_close(first.monotony, 1.55);
    assert_close(first.strain, 2635.0);
}
