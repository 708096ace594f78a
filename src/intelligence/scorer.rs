// ABOUTME: Condition scoring engine with a coarse 0-10 model and a weighted 0-100 model
// ABOUTME: Both models are fail-soft pure functions of their inputs and never panic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Surfcast Contributors

//! Surf condition scorers.
//!
//! Two models with deliberately separate thresholds:
//!
//! - [`coarse_score`]: additive 0-10 bucket score over raw readings, no spot
//!   profile involved beyond the orientation. Any missing input yields 0.0.
//! - [`weighted_score`]: 0-100 composite of six weighted sub-scores evaluated
//!   against a [`SpotProfile`]. Missing fields substitute neutral defaults so
//!   the ranking stays total.

use chrono::{DateTime, Timelike, Utc};

use crate::constants::{
    profile_rules, temperature, time_of_day, wave_height, wave_period, weighted_defaults, weights,
    wind, COARSE_SCORE_MAX,
};
use crate::intelligence::geometry::is_offshore;
use crate::intelligence::profiles::direction_range_score;
use crate::models::SpotProfile;

/// Coarse additive 0-10 condition score.
///
/// Requires all five inputs; any absent input returns exactly `0.0` so a
/// spot without data never outranks one with data. Negative readings clamp to
/// zero before bucketing, angles normalize into [0, 360).
#[must_use]
pub fn coarse_score(
    wave_height_m: Option<f64>,
    wave_period_s: Option<f64>,
    wind_speed_ms: Option<f64>,
    wind_direction_deg: Option<f64>,
    spot_orientation_deg: Option<f64>,
) -> f64 {
    let (Some(height), Some(period), Some(speed), Some(wind_dir), Some(orientation)) = (
        wave_height_m,
        wave_period_s,
        wind_speed_ms,
        wind_direction_deg,
        spot_orientation_deg,
    ) else {
        return 0.0;
    };
    let height = height.max(0.0);
    let period = period.max(0.0);
    let speed = speed.max(0.0);

    let score = coarse_height_score(height)
        + coarse_period_score(period)
        + coarse_wind_score(speed, wind_dir, orientation);
    score.min(COARSE_SCORE_MAX)
}

fn coarse_height_score(height: f64) -> f64 {
    if (wave_height::OPTIMAL_MIN..=wave_height::OPTIMAL_MAX).contains(&height) {
        wave_height::OPTIMAL_SCORE
    } else if (wave_height::ACCEPTABLE_MIN..wave_height::OPTIMAL_MIN).contains(&height)
        || (height > wave_height::OPTIMAL_MAX && height <= wave_height::ACCEPTABLE_MAX)
    {
        wave_height::ACCEPTABLE_SCORE
    } else {
        wave_height::MARGINAL_SCORE
    }
}

fn coarse_period_score(period: f64) -> f64 {
    if (wave_period::OPTIMAL_MIN..=wave_period::OPTIMAL_MAX).contains(&period) {
        wave_period::OPTIMAL_SCORE
    } else if (wave_period::ACCEPTABLE_MIN..wave_period::OPTIMAL_MIN).contains(&period)
        || (period > wave_period::OPTIMAL_MAX && period <= wave_period::ACCEPTABLE_MAX)
    {
        wave_period::ACCEPTABLE_SCORE
    } else {
        wave_period::MARGINAL_SCORE
    }
}

fn coarse_wind_score(speed: f64, wind_direction: f64, orientation: f64) -> f64 {
    // blown out trumps direction; 15 m/s itself already counts
    if speed >= wind::BLOWN_OUT_SPEED {
        return wind::BLOWN_OUT_SCORE;
    }
    let offshore = is_offshore(Some(wind_direction), Some(orientation));
    if offshore && speed <= wind::OFFSHORE_MAX_SPEED {
        wind::OFFSHORE_SCORE
    } else if !offshore && speed <= wind::ONSHORE_LIGHT_MAX_SPEED {
        wind::ONSHORE_LIGHT_SCORE
    } else {
        wind::MODERATE_SCORE
    }
}

/// Inputs to the weighted model after default substitution
#[derive(Debug, Clone, Copy)]
struct WeightedInputs {
    wave_height: f64,
    wave_direction: f64,
    wind_speed: f64,
    wind_direction: f64,
    wave_period: f64,
    air_temperature: f64,
}

impl WeightedInputs {
    fn from_sample(sample: &crate::models::ConditionSample) -> Self {
        Self {
            wave_height: sample.wave_height.unwrap_or(weighted_defaults::WAVE_HEIGHT),
            wave_direction: sample
                .wave_direction
                .unwrap_or(weighted_defaults::WAVE_DIRECTION),
            wind_speed: sample.wind_speed.unwrap_or(weighted_defaults::WIND_SPEED),
            wind_direction: sample
                .wind_direction
                .unwrap_or(weighted_defaults::WIND_DIRECTION),
            wave_period: sample.wave_period.unwrap_or(weighted_defaults::WAVE_PERIOD),
            air_temperature: sample
                .air_temperature
                .unwrap_or(weighted_defaults::AIR_TEMPERATURE),
        }
    }
}

/// Weighted 0-100 condition score against a spot profile.
///
/// The time-of-day bonus is keyed on `at`, the forecast or evaluation target
/// time, so a dawn-patrol forecast scores the same whenever it is computed.
/// Missing sample fields substitute the documented neutral defaults.
#[must_use]
pub fn weighted_score(
    sample: &crate::models::ConditionSample,
    profile: &SpotProfile,
    at: DateTime<Utc>,
) -> f64 {
    let inputs = WeightedInputs::from_sample(sample);

    let height = wave_height_range_score(inputs.wave_height, profile);
    let wave_dir = direction_range_score(
        inputs.wave_direction,
        profile.wave_direction_min,
        profile.wave_direction_max,
    );
    let wind = wind_score(inputs.wind_speed, inputs.wind_direction, profile);
    let period = period_score(inputs.wave_period);
    let temp = temperature_score(inputs.air_temperature);
    let tod = time_of_day_score(at);

    let total = height * weights::WAVE_HEIGHT
        + wave_dir * weights::WAVE_DIRECTION
        + wind * weights::WIND
        + period * weights::WAVE_PERIOD
        + temp * weights::TEMPERATURE
        + tod * weights::TIME_OF_DAY;
    total.clamp(0.0, 100.0)
}

/// Wave height against the profile's optimal band, 0-100.
///
/// Absolute limits override the profile: under 0.3 m nothing breaks, over
/// 5.0 m the spot is dangerous regardless of what the profile tolerates.
fn wave_height_range_score(height: f64, profile: &SpotProfile) -> f64 {
    if height < profile_rules::ABSOLUTE_MIN_WAVE_HEIGHT {
        return 0.0;
    }
    if height > profile_rules::ABSOLUTE_MAX_WAVE_HEIGHT {
        return profile_rules::DANGEROUS_HEIGHT_SCORE;
    }
    if profile.wave_height_in_range(height) {
        return 100.0;
    }
    if height < profile.wave_height_min {
        (profile_rules::BELOW_RANGE_SCALE * (height / profile.wave_height_min)).max(0.0)
    } else {
        let excess = height - profile.wave_height_max;
        (100.0 - excess * profile_rules::ABOVE_RANGE_DECAY_PER_M)
            .max(profile_rules::ABOVE_RANGE_FLOOR)
    }
}

/// Combined wind sub-score: 70% speed, 30% direction
fn wind_score(speed: f64, direction: f64, profile: &SpotProfile) -> f64 {
    let speed_score = if speed > profile.max_wind_speed {
        let excess = speed - profile.max_wind_speed;
        (profile_rules::OVER_LIMIT_BASE - excess * profile_rules::OVER_LIMIT_DECAY).max(0.0)
    } else {
        (100.0 - (speed - profile_rules::IDEAL_WIND_SPEED).abs()
            * profile_rules::SPEED_DEVIATION_PENALTY)
            .clamp(0.0, 100.0)
    };
    let direction_score = direction_range_score(
        direction,
        profile.wind_direction_min,
        profile.wind_direction_max,
    );
    speed_score * weights::WIND_SPEED_FRACTION + direction_score * weights::WIND_DIRECTION_FRACTION
}

fn period_score(period: f64) -> f64 {
    if (profile_rules::IDEAL_PERIOD_MIN..=profile_rules::IDEAL_PERIOD_MAX).contains(&period) {
        100.0
    } else if period < profile_rules::IDEAL_PERIOD_MIN {
        let deficit = profile_rules::IDEAL_PERIOD_MIN - period;
        (100.0 - deficit * profile_rules::BELOW_PERIOD_DECAY).max(profile_rules::BELOW_PERIOD_FLOOR)
    } else {
        let excess = period - profile_rules::IDEAL_PERIOD_MAX;
        (100.0 - excess * profile_rules::ABOVE_PERIOD_DECAY).max(profile_rules::ABOVE_PERIOD_FLOOR)
    }
}

fn temperature_score(temp: f64) -> f64 {
    if temp >= temperature::BONUS_THRESHOLD {
        100.0
    } else {
        (temp * temperature::DEGREE_SCALE).max(0.0)
    }
}

/// Time-of-day bonus from the evaluation target time, not wall-clock now
fn time_of_day_score(at: DateTime<Utc>) -> f64 {
    match at.hour() {
        6..=9 => time_of_day::EARLY_MORNING_SCORE,
        10..=16 => time_of_day::DAYTIME_SCORE,
        17..=19 => time_of_day::EVENING_SCORE,
        _ => time_of_day::NIGHT_SCORE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConditionSample;
    use chrono::TimeZone;

    fn centered_profile() -> SpotProfile {
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

    #[test]
    fn coarse_missing_input_scores_zero() {
        let orientation = Some(270.0);
        assert_eq!(coarse_score(None, Some(10.0), Some(4.0), Some(90.0), orientation), 0.0);
        assert_eq!(coarse_score(Some(1.5), None, Some(4.0), Some(90.0), orientation), 0.0);
        assert_eq!(coarse_score(Some(1.5), Some(10.0), None, Some(90.0), orientation), 0.0);
        assert_eq!(coarse_score(Some(1.5), Some(10.0), Some(4.0), None, orientation), 0.0);
        assert_eq!(coarse_score(Some(1.5), Some(10.0), Some(4.0), Some(90.0), None), 0.0);
    }

    #[test]
    fn coarse_perfect_day_hits_the_ceiling() {
        // optimal height, optimal period, light offshore wind at a
        // west-facing spot
        let score = coarse_score(Some(1.5), Some(10.0), Some(6.0), Some(90.0), Some(270.0));
        assert_eq!(score, 10.0);
    }

    #[test]
    fn coarse_blown_out_wind_zeroes_the_wind_component() {
        // 15 m/s straight onshore: 3 + 3 + 0
        let score = coarse_score(Some(1.5), Some(10.0), Some(15.0), Some(270.0), Some(270.0));
        assert_eq!(score, 6.0);
    }

    #[test]
    fn coarse_blown_out_applies_even_offshore() {
        let score = coarse_score(Some(1.5), Some(10.0), Some(16.0), Some(90.0), Some(270.0));
        assert_eq!(score, 6.0);
    }

    #[test]
    fn coarse_height_buckets() {
        assert_eq!(coarse_height_score(0.8), 3.0);
        assert_eq!(coarse_height_score(2.0), 3.0);
        assert_eq!(coarse_height_score(0.5), 2.0);
        assert_eq!(coarse_height_score(0.79), 2.0);
        assert_eq!(coarse_height_score(3.0), 2.0);
        assert_eq!(coarse_height_score(0.2), 0.5);
        assert_eq!(coarse_height_score(3.5), 0.5);
    }

    #[test]
    fn coarse_period_buckets() {
        assert_eq!(coarse_period_score(8.0), 3.0);
        assert_eq!(coarse_period_score(15.0), 3.0);
        assert_eq!(coarse_period_score(6.0), 2.0);
        assert_eq!(coarse_period_score(20.0), 2.0);
        assert_eq!(coarse_period_score(5.0), 1.0);
        assert_eq!(coarse_period_score(25.0), 1.0);
    }

    #[test]
    fn coarse_negative_readings_clamp_to_zero() {
        // clamped to flat sea, light onshore calm
        let score = coarse_score(Some(-1.0), Some(-5.0), Some(-3.0), Some(270.0), Some(270.0));
        assert_eq!(score, 0.5 + 1.0 + 2.0);
    }

    #[test]
    fn weighted_centered_conditions_score_high() {
        let sample = ConditionSample {
            wave_height: Some(1.4),
            wave_period: Some(10.0),
            wave_direction: Some(270.0),
            wind_speed: Some(8.0),
            wind_direction: Some(90.0),
            air_temperature: Some(18.0),
            ..ConditionSample::default()
        };
        let dawn = Utc.with_ymd_and_hms(2026, 6, 15, 7, 0, 0).unwrap();
        let score = weighted_score(&sample, &centered_profile(), dawn);
        assert!((score - 100.0).abs() < 1e-9);

        let noon = Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap();
        let score = weighted_score(&sample, &centered_profile(), noon);
        assert!(score >= 95.0);
    }

    #[test]
    fn weighted_time_of_day_uses_target_time() {
        let sample = ConditionSample {
            wave_height: Some(1.4),
            wave_period: Some(10.0),
            wave_direction: Some(270.0),
            wind_speed: Some(8.0),
            wind_direction: Some(90.0),
            air_temperature: Some(18.0),
            ..ConditionSample::default()
        };
        let profile = centered_profile();
        let dawn = Utc.with_ymd_and_hms(2026, 6, 15, 7, 0, 0).unwrap();
        let night = Utc.with_ymd_and_hms(2026, 6, 15, 2, 0, 0).unwrap();
        let dawn_score = weighted_score(&sample, &profile, dawn);
        let night_score = weighted_score(&sample, &profile, night);
        // identical conditions, 3.5-point swing from the 0.05-weighted bonus
        assert!((dawn_score - night_score - 3.5).abs() < 1e-9);
    }

    #[test]
    fn weighted_empty_sample_uses_defaults_and_stays_in_range() {
        let at = Utc.with_ymd_and_hms(2026, 6, 15, 7, 0, 0).unwrap();
        let score = weighted_score(&ConditionSample::default(), &centered_profile(), at);
        assert!(score > 0.0);
        assert!(score <= 100.0);
    }

    #[test]
    fn height_below_absolute_minimum_is_unsurfable() {
        assert_eq!(wave_height_range_score(0.2, &centered_profile()), 0.0);
    }

    #[test]
    fn height_above_absolute_maximum_is_dangerous() {
        assert_eq!(wave_height_range_score(5.5, &centered_profile()), 10.0);
    }

    #[test]
    fn height_below_range_scales_with_the_ratio() {
        // 0.4 / 0.8 * 70
        assert!((wave_height_range_score(0.4, &centered_profile()) - 35.0).abs() < 1e-9);
    }

    #[test]
    fn height_above_range_decays_to_a_floor() {
        // 1 m over: 100 - 30
        assert!((wave_height_range_score(3.0, &centered_profile()) - 70.0).abs() < 1e-9);
        // far over but under the danger limit floors at 20
        assert_eq!(wave_height_range_score(4.9, &centered_profile()), 20.0);
    }

    #[test]
    fn wind_over_the_spot_limit_collapses() {
        let profile = centered_profile();
        // 14 m/s is 2 over the 12 m/s limit: speed part 30, direction 100
        let score = wind_score(14.0, 90.0, &profile);
        assert!((score - (30.0 * 0.7 + 100.0 * 0.3)).abs() < 1e-9);
        // far over the limit floors the speed part at 0
        let score = wind_score(20.0, 90.0, &profile);
        assert!((score - 30.0).abs() < 1e-9);
    }

    #[test]
    fn wind_at_ideal_speed_in_sector_is_perfect() {
        assert!((wind_score(8.0, 90.0, &centered_profile()) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn period_bands() {
        assert_eq!(period_score(7.0), 100.0);
        assert_eq!(period_score(14.0), 100.0);
        assert!((period_score(5.0) - 70.0).abs() < 1e-9);
        assert_eq!(period_score(1.0), 30.0);
        assert!((period_score(16.0) - 80.0).abs() < 1e-9);
        assert_eq!(period_score(25.0), 60.0);
    }

    #[test]
    fn temperature_bonus_saturates_at_the_threshold() {
        assert_eq!(temperature_score(15.0), 100.0);
        assert_eq!(temperature_score(20.0), 100.0);
        assert!((temperature_score(12.0) - 60.0).abs() < 1e-9);
        assert_eq!(temperature_score(-5.0), 0.0);
    }

    #[test]
    fn time_of_day_buckets() {
        let hour = |h| Utc.with_ymd_and_hms(2026, 6, 15, h, 0, 0).unwrap();
        assert_eq!(time_of_day_score(hour(7)), 100.0);
        assert_eq!(time_of_day_score(hour(12)), 70.0);
        assert_eq!(time_of_day_score(hour(18)), 85.0);
        assert_eq!(time_of_day_score(hour(23)), 30.0);
        assert_eq!(time_of_day_score(hour(2)), 30.0);
    }
}
