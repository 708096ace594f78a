// ABOUTME: Core data models for surf spots, condition samples and logged sessions
// ABOUTME: Defines SurfSpot, ConditionSample, SurfSession and the scoring result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Surfcast Contributors

//! # Data Models
//!
//! Core data structures shared by the scoring engine, the recommender, the
//! condition providers and the SQLite store.
//!
//! ## Design Principles
//!
//! - **Provider Agnostic**: a [`ConditionSample`] looks the same whether it
//!   came from a live forecast source, a merged hybrid source or a simulation
//! - **Fail-Soft**: every environmental field is optional; the scorers define
//!   a fallback for absence instead of rejecting the sample
//! - **Serializable**: all models serialize to JSON for any presentation layer
//! - **Type Safe**: spot categories and rating labels are enums, not strings

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Kind of surf break, assigned at data-entry time.
///
/// Replaces the original free-text keyword matching: the category is an
/// explicit field on the spot, and [`SpotCategory::from_description`] exists
/// only as a data-entry helper for importing legacy descriptions.
#[non_exhaustive]
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpotCategory {
    /// Sand-bottom break, works on most swells
    BeachBreak,
    /// Rock or coral bottom, needs specific swell and tide
    ReefBreak,
    /// Wave wrapping around a headland
    PointBreak,
    /// Sheltered bay, works when everything else is blown out
    ProtectedBay,
    /// Anything else
    #[default]
    Other,
}

impl SpotCategory {
    /// Reliability multiplier applied by the coarse recommender.
    ///
    /// Beach breaks work on most swells, reef and point breaks need specific
    /// conditions, protected bays work more often than exposed spots.
    #[must_use]
    pub const fn factor(&self) -> f64 {
        match self {
            Self::BeachBreak => 1.2,
            Self::ReefBreak => 0.8,
            Self::PointBreak => 0.9,
            Self::ProtectedBay => 1.1,
            Self::Other => 1.0,
        }
    }

    /// Classify a legacy free-text description.
    ///
    /// Data-entry helper only; scoring always reads the stored category.
    #[must_use]
    pub fn from_description(description: &str) -> Self {
        let lower = description.to_lowercase();
        if lower.contains("beach break") {
            Self::BeachBreak
        } else if lower.contains("reef break") {
            Self::ReefBreak
        } else if lower.contains("point break") {
            Self::PointBreak
        } else if lower.contains("protected") || lower.contains("bay") {
            Self::ProtectedBay
        } else {
            Self::Other
        }
    }
}

impl Display for SpotCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::BeachBreak => "beach_break",
            Self::ReefBreak => "reef_break",
            Self::PointBreak => "point_break",
            Self::ProtectedBay => "protected_bay",
            Self::Other => "other",
        };
        write!(f, "{name}")
    }
}

impl FromStr for SpotCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beach_break" => Ok(Self::BeachBreak),
            "reef_break" => Ok(Self::ReefBreak),
            "point_break" => Ok(Self::PointBreak),
            "protected_bay" => Ok(Self::ProtectedBay),
            "other" => Ok(Self::Other),
            unknown => Err(AppError::invalid_input(format!(
                "unknown spot category: {unknown}"
            ))),
        }
    }
}

/// Per-spot optimal condition ranges used by the weighted scorer.
///
/// Direction ranges may wrap across north (for example min 340, max 30);
/// the range-membership scoring handles the wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotProfile {
    /// Lower bound of the optimal wave height band (m)
    pub wave_height_min: f64,
    /// Upper bound of the optimal wave height band (m)
    pub wave_height_max: f64,
    /// Start of the optimal swell direction sector (deg)
    pub wave_direction_min: f64,
    /// End of the optimal swell direction sector (deg)
    pub wave_direction_max: f64,
    /// Start of the offshore wind sector (deg)
    pub wind_direction_min: f64,
    /// End of the offshore wind sector (deg)
    pub wind_direction_max: f64,
    /// Maximum tolerable wind speed for this spot (m/s)
    pub max_wind_speed: f64,
}

/// Static reference data for a surf break
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfSpot {
    /// Database id (0 until persisted)
    pub id: i64,
    /// Unique spot name, e.g. "Bore"
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Compass bearing the break faces, degrees in [0, 360).
    /// Reference axis for every angular computation on this spot.
    pub orientation: f64,
    /// Free-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Kind of break, set at data-entry time
    pub category: SpotCategory,
    /// Optional explicit preference profile; spots without one are scored
    /// against an orientation-derived fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<SpotProfile>,
    /// When the spot was registered
    pub created_at: DateTime<Utc>,
}

/// Point-in-time environmental snapshot.
///
/// Every field is optional: upstream forecast sources routinely omit
/// measurements, and the scorers degrade to defined fallbacks rather than
/// erroring. Directions are the direction waves/wind travel *from*.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionSample {
    /// Significant wave height (m, >= 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wave_height: Option<f64>,
    /// Peak wave period (s, > 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wave_period: Option<f64>,
    /// Direction waves travel from (deg, [0, 360))
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wave_direction: Option<f64>,
    /// Wind speed (m/s, >= 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
    /// Direction wind blows from (deg, [0, 360))
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<f64>,
    /// Wind gust speed (m/s)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_gust: Option<f64>,
    /// Air temperature (C)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub air_temperature: Option<f64>,
    /// Sea water temperature (C)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_temperature: Option<f64>,
    /// Relative humidity (%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    /// Air pressure at sea level (hPa)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    /// Precipitation amount (mm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precipitation: Option<f64>,
    /// Tide height (m)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tide_height: Option<f64>,
    /// Timestamp of the observation/forecast entry the provider selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<DateTime<Utc>>,
    /// Which sources produced this sample, e.g. `["yr", "stormglass"]`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
}

impl ConditionSample {
    /// Record a source tag if it is not already present
    pub fn tag_source(&mut self, source: &str) {
        if !self.sources.iter().any(|s| s == source) {
            self.sources.push(source.to_owned());
        }
    }
}

/// Quantities derived from a sample and a spot orientation.
///
/// Pure functions of their inputs; computed once per sample, never cached or
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedFeatures {
    /// True when the wind blows from land toward the sea for this spot
    pub offshore_wind: bool,
    /// Folded angle between swell direction and spot orientation, [0, 180]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swell_angle_difference: Option<f64>,
    /// Wave height projected onto the spot's facing axis (signed, m)
    pub swell_component: f64,
}

/// Ordinal surf quality label for a weighted score
#[non_exhaustive]
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RatingCategory {
    /// Below 35
    VeryPoor,
    /// 35 to 49
    Poor,
    /// 50 to 64
    Fair,
    /// 65 to 79
    Good,
    /// 80 and above
    Excellent,
}

impl RatingCategory {
    /// Map a weighted 0-100 score to its category
    #[must_use]
    pub fn from_weighted(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 65.0 {
            Self::Good
        } else if score >= 50.0 {
            Self::Fair
        } else if score >= 35.0 {
            Self::Poor
        } else {
            Self::VeryPoor
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::VeryPoor => "Very Poor",
        }
    }
}

impl Display for RatingCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Score with its category and a short human-readable justification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Numeric score; range depends on which scorer produced it
    pub score: f64,
    /// Ordinal quality label
    pub category: RatingCategory,
    /// At most three short reasons, fixed order: wind, wave height, period,
    /// category
    pub rationale: Vec<String>,
}

/// Season of the year, derived from a session timestamp
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    /// December through February
    Winter,
    /// March through May
    Spring,
    /// June through August
    Summer,
    /// September through November
    Autumn,
}

impl Season {
    /// Derive the season from a timestamp
    #[must_use]
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        match at.month() {
            12 | 1 | 2 => Self::Winter,
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            _ => Self::Autumn,
        }
    }

    /// Lowercase label used in exports
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Winter => "winter",
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
        }
    }
}

/// Coarse time-of-day bucket, derived from a session timestamp
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    /// 05:00 to 11:59
    Morning,
    /// 12:00 to 17:59
    Afternoon,
    /// Everything else
    Evening,
}

impl TimeOfDay {
    /// Derive the bucket from a timestamp
    #[must_use]
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        match at.hour() {
            5..=11 => Self::Morning,
            12..=17 => Self::Afternoon,
            _ => Self::Evening,
        }
    }

    /// Lowercase label used in exports
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
        }
    }
}

/// A logged surf session: user rating plus the conditions at the time.
///
/// Created once when the session is logged; immutable afterwards except for
/// the free-text notes. Read-only input to the historical performance
/// aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfSession {
    /// Database id (0 until persisted)
    pub id: i64,
    /// Spot the session took place at
    pub spot_id: i64,
    /// When the session started
    pub date_time: DateTime<Utc>,
    /// Session length in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i64>,
    /// User rating, 1 (terrible) to 5 (all-time)
    pub rating: i32,
    /// Board used, e.g. "longboard"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_type: Option<String>,
    /// Free-text notes; the only field editable after creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Environmental snapshot captured when the session was logged
    pub conditions: ConditionSample,
    /// Features derived from the snapshot and the spot orientation
    pub derived: DerivedFeatures,
    /// Season the session fell in
    pub season: Season,
    /// Weekday, 0 = Monday through 6 = Sunday
    pub weekday: u8,
    /// Time-of-day bucket
    pub time_of_day: TimeOfDay,
    /// Coarse surf score computed at logging time, when inputs were complete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surf_score: Option<f64>,
    /// When the record was created
    pub created_at: DateTime<Utc>,
}
