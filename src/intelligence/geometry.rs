// ABOUTME: Circular-angle math shared by every directional scoring computation
// ABOUTME: Angular difference, offshore-wind test and swell component projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Surfcast Contributors

//! Pure circular-angle utilities.
//!
//! Everything here is a total function: absent inputs produce the documented
//! fallback instead of an error, and out-of-domain angles are normalized into
//! [0, 360) before use. Safe to call concurrently; no shared state.

use crate::constants::wind;
use crate::models::{ConditionSample, DerivedFeatures};

/// Normalize an angle in degrees into [0, 360)
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    angle.rem_euclid(360.0)
}

/// Shortest angular difference between two bearings, folded into [0, 180]
#[must_use]
pub fn angular_difference(a: f64, b: f64) -> f64 {
    let a = normalize_degrees(a);
    let b = normalize_degrees(b);
    let diff = (a - b).abs();
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Whether the wind blows offshore for a spot facing `spot_orientation`.
///
/// A break's orientation is the bearing it faces looking out to sea, so
/// offshore wind blows *from* the landward side: within 90 degrees of
/// `orientation + 180`. A west-facing spot (270) has offshore wind from the
/// east (90). Absent inputs yield `false`; this never fails.
#[must_use]
pub fn is_offshore(wind_direction: Option<f64>, spot_orientation: Option<f64>) -> bool {
    match (wind_direction, spot_orientation) {
        (Some(wind_dir), Some(orientation)) => {
            let landward = normalize_degrees(orientation + 180.0);
            angular_difference(wind_dir, landward) <= wind::OFFSHORE_TOLERANCE_DEG
        }
        _ => false,
    }
}

/// Portion of the wave height that projects onto the spot's facing axis.
///
/// `height * cos(angular_difference(wave_direction, orientation))`. The sign
/// is meaningful: positive means the swell is broadly aligned with the facing
/// axis, negative means it approaches from behind or the side. Absent inputs
/// yield `0.0`.
#[must_use]
pub fn swell_component(
    wave_height: Option<f64>,
    wave_direction: Option<f64>,
    spot_orientation: Option<f64>,
) -> f64 {
    match (wave_height, wave_direction, spot_orientation) {
        (Some(height), Some(direction), Some(orientation)) => {
            let height = height.max(0.0);
            let angle = angular_difference(direction, orientation).to_radians();
            height * angle.cos()
        }
        _ => 0.0,
    }
}

impl DerivedFeatures {
    /// Compute the derived features for a sample at a spot.
    ///
    /// Pure function of its inputs; compute once per sample, never mutate.
    #[must_use]
    pub fn from_sample(sample: &ConditionSample, spot_orientation: f64) -> Self {
        let swell_angle_difference = sample
            .wave_direction
            .map(|dir| angular_difference(dir, spot_orientation));
        Self {
            offshore_wind: is_offshore(sample.wind_direction, Some(spot_orientation)),
            swell_angle_difference,
            swell_component: swell_component(
                sample.wave_height,
                sample.wave_direction,
                Some(spot_orientation),
            ),
        }
    }
}
