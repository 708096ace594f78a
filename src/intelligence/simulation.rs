// ABOUTME: Deterministic pseudo-forecast generator keyed on day-of-year and spot orientation
// ABOUTME: Produces labeled simulated condition samples plus the seasonal surf factor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Surfcast Contributors

//! Simulated conditions.
//!
//! A deterministic sinusoid model: the same spot and date always produce the
//! same sample, so rankings built on it are reproducible and testable. The
//! seasonal factor follows a yearly sinusoid peaking around midsummer.
//! Samples are tagged `"simulated"` and the recommender labels any ranking
//! built from them; simulation is never silently substituted for live data.

use chrono::{DateTime, Datelike, Utc};
use std::f64::consts::PI;

use crate::constants::simulation as sim;
use crate::models::{ConditionSample, SurfSpot};

/// Source tag carried by every simulated sample
pub const SOURCE_TAG: &str = "simulated";

/// Seasonal surf quality factor for a date, rounded to 2 decimals.
///
/// `0.7 + 0.3 * sin((doy - 80) * 2π / 365)`: roughly 0.4 around the winter
/// solstice, 1.0 around midsummer.
#[must_use]
pub fn seasonal_factor(date: DateTime<Utc>) -> f64 {
    let doy = f64::from(date.ordinal());
    let factor = sim::SEASONAL_BASE
        + sim::SEASONAL_AMPLITUDE
            * ((doy - sim::SEASONAL_PHASE_DAYS) * 2.0 * PI / sim::DAYS_PER_YEAR).sin();
    round_to(factor, 2)
}

/// Synthesize a condition sample for a spot on a date.
///
/// Wave height is modulated by both the seasonal factor and the spot-category
/// factor; wind direction swings around the spot's landward bearing so
/// simulated days lean offshore.
#[must_use]
pub fn simulate_conditions(spot: &SurfSpot, date: DateTime<Utc>) -> ConditionSample {
    let doy = f64::from(date.ordinal());
    let seasonal = seasonal_factor(date);
    let spot_factor = spot.category.factor();

    let wave_height = (sim::WAVE_HEIGHT_BASE * seasonal * spot_factor
        + sim::WAVE_HEIGHT_WOBBLE * (doy * sim::WAVE_HEIGHT_FREQ).sin())
    .clamp(sim::WAVE_HEIGHT_MIN, sim::WAVE_HEIGHT_MAX);
    let wave_period = (sim::WAVE_PERIOD_BASE
        + sim::WAVE_PERIOD_AMPLITUDE * (doy * sim::WAVE_PERIOD_FREQ).sin())
    .clamp(sim::WAVE_PERIOD_MIN, sim::WAVE_PERIOD_MAX);
    let wind_speed = (sim::WIND_SPEED_BASE
        + sim::WIND_SPEED_AMPLITUDE * (doy * sim::WIND_SPEED_FREQ).sin())
    .clamp(sim::WIND_SPEED_MIN, sim::WIND_SPEED_MAX);
    let wind_direction = (spot.orientation
        + 180.0
        + sim::WIND_DIRECTION_AMPLITUDE * (doy * sim::WIND_DIRECTION_FREQ).sin())
    .rem_euclid(360.0);
    let wave_direction = (spot.orientation
        + sim::WAVE_DIRECTION_AMPLITUDE * (doy * sim::WAVE_DIRECTION_FREQ).sin())
    .rem_euclid(360.0);
    let air_temperature = (sim::AIR_TEMP_BASE
        + sim::AIR_TEMP_AMPLITUDE
            * ((doy - sim::SEASONAL_PHASE_DAYS) * 2.0 * PI / sim::DAYS_PER_YEAR).sin())
    .max(sim::AIR_TEMP_MIN);
    let tide_height = sim::TIDE_BASE + sim::TIDE_AMPLITUDE * (doy * sim::TIDE_FREQ).sin();

    ConditionSample {
        wave_height: Some(round_to(wave_height, 1)),
        wave_period: Some(round_to(wave_period, 1)),
        wave_direction: Some(wave_direction.round()),
        wind_speed: Some(round_to(wind_speed, 1)),
        wind_direction: Some(wind_direction.round()),
        air_temperature: Some(air_temperature),
        tide_height: Some(tide_height),
        observed_at: Some(date),
        sources: vec![SOURCE_TAG.to_owned()],
        ..ConditionSample::default()
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
