// ABOUTME: Per-spot preference profiles and directional range-membership scoring
// ABOUTME: Carries the built-in Jaeren reference spots and the orientation fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Surfcast Contributors

//! Spot preference profiles.
//!
//! A [`SpotProfile`] records what a break wants: its optimal wave height band,
//! the swell sector it picks up, the offshore wind sector and the wind speed
//! it can tolerate. The weighted scorer reads these directly. Spots without an
//! explicit profile fall back to [`SpotProfile::for_orientation`].

use crate::constants::profile_rules;
use crate::intelligence::geometry::normalize_degrees;
use crate::models::{SpotCategory, SpotProfile};

impl SpotProfile {
    /// Derive a generic profile from a spot's orientation.
    ///
    /// The swell sector is the facing bearing plus/minus 30 degrees, the
    /// offshore wind sector the landward bearing plus/minus 30 degrees, with a
    /// 0.8-2.0 m band and a 12 m/s wind limit. Used when a spot carries no
    /// explicit profile so the recommender stays total.
    #[must_use]
    pub fn for_orientation(orientation: f64) -> Self {
        let facing = normalize_degrees(orientation);
        let landward = normalize_degrees(orientation + 180.0);
        Self {
            wave_height_min: 0.8,
            wave_height_max: 2.0,
            wave_direction_min: normalize_degrees(facing - 30.0),
            wave_direction_max: normalize_degrees(facing + 30.0),
            wind_direction_min: normalize_degrees(landward - 30.0),
            wind_direction_max: normalize_degrees(landward + 30.0),
            max_wind_speed: 12.0,
        }
    }

    /// Whether a direction falls inside this profile's swell sector
    #[must_use]
    pub fn wave_direction_in_range(&self, direction: f64) -> bool {
        direction_in_range(direction, self.wave_direction_min, self.wave_direction_max)
    }

    /// Whether a direction falls inside this profile's offshore wind sector
    #[must_use]
    pub fn wind_direction_in_range(&self, direction: f64) -> bool {
        direction_in_range(direction, self.wind_direction_min, self.wind_direction_max)
    }

    /// Whether a wave height falls inside this profile's optimal band
    #[must_use]
    pub fn wave_height_in_range(&self, height: f64) -> bool {
        height >= self.wave_height_min && height <= self.wave_height_max
    }
}

/// Whether `direction` sits inside the possibly-wrapping sector [min, max].
///
/// A sector with `max < min` wraps across north, e.g. 340..30.
#[must_use]
pub fn direction_in_range(direction: f64, min: f64, max: f64) -> bool {
    let direction = normalize_degrees(direction);
    if max < min {
        direction >= min || direction <= max
    } else {
        direction >= min && direction <= max
    }
}

/// Score a direction against a possibly-wrapping sector, 0-100.
///
/// 100 inside the sector, otherwise a linear falloff of 2 points per degree of
/// distance to the nearest sector edge, floored at 0.
#[must_use]
pub fn direction_range_score(direction: f64, min: f64, max: f64) -> f64 {
    let direction = normalize_degrees(direction);
    if direction_in_range(direction, min, max) {
        return 100.0;
    }
    let dist_to_min = circular_distance(direction, min);
    let dist_to_max = circular_distance(direction, max);
    let nearest = dist_to_min.min(dist_to_max);
    (100.0 - nearest * profile_rules::DIRECTION_DECAY_PER_DEG).max(0.0)
}

/// Shortest distance between two bearings on the circle, [0, 180]
fn circular_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs();
    diff.min(360.0 - diff)
}

/// Built-in preference profiles for the Jæren reference spots.
///
/// (name, category, profile) triples; the seed data and the tests share them.
#[must_use]
pub fn reference_profiles() -> Vec<(&'static str, SpotCategory, SpotProfile)> {
    vec![
        (
            "Bore",
            SpotCategory::BeachBreak,
            SpotProfile {
                wave_height_min: 0.8,
                wave_height_max: 2.0,
                wave_direction_min: 240.0,
                wave_direction_max: 300.0,
                wind_direction_min: 60.0,
                wind_direction_max: 120.0,
                max_wind_speed: 12.0,
            },
        ),
        (
            "Orre",
            SpotCategory::BeachBreak,
            SpotProfile {
                wave_height_min: 1.0,
                wave_height_max: 3.0,
                wave_direction_min: 250.0,
                wave_direction_max: 310.0,
                wind_direction_min: 70.0,
                wind_direction_max: 130.0,
                max_wind_speed: 15.0,
            },
        ),
        (
            "Hellestø",
            SpotCategory::BeachBreak,
            SpotProfile {
                wave_height_min: 0.5,
                wave_height_max: 1.8,
                wave_direction_min: 220.0,
                wave_direction_max: 290.0,
                wind_direction_min: 40.0,
                wind_direction_max: 100.0,
                max_wind_speed: 10.0,
            },
        ),
        (
            "Sola Strand",
            SpotCategory::BeachBreak,
            SpotProfile {
                wave_height_min: 0.6,
                wave_height_max: 2.2,
                wave_direction_min: 240.0,
                wave_direction_max: 300.0,
                wind_direction_min: 50.0,
                wind_direction_max: 110.0,
                max_wind_speed: 12.0,
            },
        ),
        (
            "Reve",
            SpotCategory::ReefBreak,
            SpotProfile {
                wave_height_min: 1.2,
                wave_height_max: 4.0,
                wave_direction_min: 260.0,
                wave_direction_max: 320.0,
                wind_direction_min: 80.0,
                wind_direction_max: 140.0,
                max_wind_speed: 18.0,
            },
        ),
        (
            "Sirevåg",
            SpotCategory::ProtectedBay,
            SpotProfile {
                wave_height_min: 0.8,
                wave_height_max: 2.5,
                wave_direction_min: 280.0,
                wave_direction_max: 340.0,
                wind_direction_min: 90.0,
                wind_direction_max: 150.0,
                max_wind_speed: 14.0,
            },
        ),
    ]
}

/// Look up a reference profile by spot name
#[must_use]
pub fn reference_profile(name: &str) -> Option<SpotProfile> {
    reference_profiles()
        .into_iter()
        .find(|(spot, _, _)| *spot == name)
        .map(|(_, _, profile)| profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_sector_membership() {
        assert!(direction_in_range(270.0, 240.0, 300.0));
        assert!(direction_in_range(240.0, 240.0, 300.0));
        assert!(direction_in_range(300.0, 240.0, 300.0));
        assert!(!direction_in_range(310.0, 240.0, 300.0));
    }

    #[test]
    fn wrapping_sector_membership() {
        // sector crossing north: 340..30
        assert!(direction_in_range(350.0, 340.0, 30.0));
        assert!(direction_in_range(10.0, 340.0, 30.0));
        assert!(!direction_in_range(180.0, 340.0, 30.0));
    }

    #[test]
    fn score_is_full_inside_and_decays_outside() {
        assert_eq!(direction_range_score(270.0, 240.0, 300.0), 100.0);
        // 10 degrees outside the upper edge
        assert_eq!(direction_range_score(310.0, 240.0, 300.0), 80.0);
        // far away floors at 0
        assert_eq!(direction_range_score(120.0, 240.0, 300.0), 0.0);
    }

    #[test]
    fn score_handles_wraparound_distance() {
        // 350 is 10 degrees short of a 0..60 sector across north
        assert_eq!(direction_range_score(350.0, 0.0, 60.0), 80.0);
    }

    #[test]
    fn orientation_fallback_points_wind_sector_landward() {
        let profile = SpotProfile::for_orientation(270.0);
        assert!(profile.wave_direction_in_range(270.0));
        assert!(profile.wind_direction_in_range(90.0));
        assert!(!profile.wind_direction_in_range(270.0));
        assert!(profile.wave_height_in_range(1.2));
    }

    #[test]
    fn orientation_fallback_wraps_sector_edges() {
        // north-facing spot: swell sector 330..30 wraps
        let profile = SpotProfile::for_orientation(0.0);
        assert!(profile.wave_direction_in_range(350.0));
        assert!(profile.wave_direction_in_range(10.0));
    }

    #[test]
    fn reference_table_covers_all_six_spots() {
        let profiles = reference_profiles();
        assert_eq!(profiles.len(), 6);
        assert!(reference_profile("Bore").is_some());
        assert!(reference_profile("Sirevåg").is_some());
        assert!(reference_profile("Mavericks").is_none());
    }
}
