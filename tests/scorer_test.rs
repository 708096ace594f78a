// ABOUTME: Integration tests for the coarse and weighted condition scorers
// ABOUTME: Pins the bucket boundaries, default substitution and the target-time bonus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Surfcast Contributors

//! Scoring Engine Tests
//!
//! End-to-end scenarios over the two scoring models, including the boundary
//! conditions a refactor is most likely to disturb.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, TimeZone, Utc};
use surfcast::intelligence::{coarse_score, weighted_score};
use surfcast::models::{ConditionSample, RatingCategory, SpotProfile};

const WEST_FACING: f64 = 270.0;

fn bore_profile() -> SpotProfile {
    SpotProfile {
        wave_height_min: 0.8,
        wave_height_max: 2.0,
        wave_direction_min: 240.0,
        wave_direction_max: 300.0,
        wind_direction_min: 60.0,
        wind_direction_max: 120.0,
        max_wind_speed: 12.0,
    }
}

fn dawn() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 15, 7, 0, 0).unwrap()
}

#[test]
fn perfect_west_coast_day_maxes_the_coarse_score() {
    // 1.5 m at 10 s with 6 m/s easterly wind on a west-facing beach
    let score = coarse_score(Some(1.5), Some(10.0), Some(6.0), Some(90.0), Some(WEST_FACING));
    assert_eq!(score, 10.0);
}

#[test]
fn strong_onshore_wind_zeroes_only_the_wind_bucket() {
    // same swell, 15 m/s straight onshore: 3 + 3 + 0
    let score = coarse_score(
        Some(1.5),
        Some(10.0),
        Some(15.0),
        Some(270.0),
        Some(WEST_FACING),
    );
    assert_eq!(score, 6.0);
}

#[test]
fn any_missing_reading_scores_exactly_zero() {
    for missing in 0..5 {
        let inputs: Vec<Option<f64>> = (0..5)
            .map(|i| if i == missing { None } else { Some(5.0) })
            .collect();
        let score = coarse_score(inputs[0], inputs[1], inputs[2], inputs[3], inputs[4]);
        assert_eq!(score, 0.0);
    }
}

#[test]
fn coarse_score_never_exceeds_ten_or_panics_on_junk() {
    let score = coarse_score(
        Some(f64::MAX),
        Some(-10.0),
        Some(0.0),
        Some(-720.0),
        Some(WEST_FACING),
    );
    assert!((0.0..=10.0).contains(&score));
}

#[test]
fn coarse_bucket_bounds_are_inclusive_as_documented() {
    // height exactly 2.0 is still optimal, 3.0 is still acceptable
    let at_two = coarse_score(Some(2.0), Some(10.0), Some(6.0), Some(90.0), Some(WEST_FACING));
    let at_three = coarse_score(Some(3.0), Some(10.0), Some(6.0), Some(90.0), Some(WEST_FACING));
    assert_eq!(at_two, 10.0);
    assert_eq!(at_three, 9.0);
}

#[test]
fn centered_conditions_score_near_perfect() {
    let sample = ConditionSample {
        wave_height: Some(1.4),
        wave_period: Some(10.0),
        wave_direction: Some(270.0),
        wind_speed: Some(8.0),
        wind_direction: Some(90.0),
        air_temperature: Some(18.0),
        ..ConditionSample::default()
    };
    let score = weighted_score(&sample, &bore_profile(), dawn());
    assert!(score >= 95.0);
    assert_eq!(RatingCategory::from_weighted(score), RatingCategory::Excellent);
}

#[test]
fn dangerous_wave_height_collapses_the_height_component() {
    let sample = ConditionSample {
        wave_height: Some(6.0),
        wave_period: Some(10.0),
        wave_direction: Some(270.0),
        wind_speed: Some(8.0),
        wind_direction: Some(90.0),
        air_temperature: Some(18.0),
        ..ConditionSample::default()
    };
    let safe = ConditionSample {
        wave_height: Some(1.4),
        ..sample.clone()
    };
    let dangerous_score = weighted_score(&sample, &bore_profile(), dawn());
    let safe_score = weighted_score(&safe, &bore_profile(), dawn());
    // the 0.30-weighted component drops from 100 to 10
    assert!((safe_score - dangerous_score - 27.0).abs() < 1e-9);
}

#[test]
fn empty_sample_scores_with_neutral_defaults() {
    let score = weighted_score(&ConditionSample::default(), &bore_profile(), dawn());
    assert!(score > 0.0);
    assert!(score < 95.0);
}

#[test]
fn forecast_target_time_drives_the_time_bonus() {
    let sample = ConditionSample {
        wave_height: Some(1.4),
        wave_period: Some(10.0),
        wave_direction: Some(270.0),
        wind_speed: Some(8.0),
        wind_direction: Some(90.0),
        air_temperature: Some(18.0),
        ..ConditionSample::default()
    };
    let profile = bore_profile();
    let night = Utc.with_ymd_and_hms(2026, 10, 15, 23, 0, 0).unwrap();
    assert!(weighted_score(&sample, &profile, dawn()) > weighted_score(&sample, &profile, night));
}

#[test]
fn wraparound_swell_sector_scores_inside_and_decays_outside() {
    // a north-facing profile whose swell sector crosses north
    let profile = SpotProfile {
        wave_height_min: 0.8,
        wave_height_max: 2.0,
        wave_direction_min: 330.0,
        wave_direction_max: 30.0,
        wind_direction_min: 150.0,
        wind_direction_max: 210.0,
        max_wind_speed: 12.0,
    };
    let inside = ConditionSample {
        wave_height: Some(1.4),
        wave_period: Some(10.0),
        wave_direction: Some(350.0),
        wind_speed: Some(8.0),
        wind_direction: Some(180.0),
        air_temperature: Some(18.0),
        ..ConditionSample::default()
    };
    let outside = ConditionSample {
        wave_direction: Some(90.0),
        ..inside.clone()
    };
    assert!(
        weighted_score(&inside, &profile, dawn()) > weighted_score(&outside, &profile, dawn())
    );
}
