// ABOUTME: Spot ranking engine over measured or simulated condition samples
// ABOUTME: Produces ordered recommendations with scores, rationale phrases and a basis label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Surfcast Contributors

//! Spot recommendations.
//!
//! [`SpotRecommender`] is a plain value type; construct one wherever a ranking
//! is needed. Two modes:
//!
//! - **Measured**: one shared [`ConditionSample`] scored per spot with the
//!   weighted model against each spot's profile (or the orientation-derived
//!   fallback).
//! - **Simulated**: a deterministic pseudo-forecast per spot, scored with the
//!   coarse model and adjusted by the spot-category and seasonal factors.
//!   The output carries [`RecommendationBasis::Simulated`] so a caller can
//!   never mistake it for live data.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{rating, wave_height, COARSE_SCORE_MAX};
use crate::errors::{AppError, AppResult};
use crate::intelligence::geometry::is_offshore;
use crate::intelligence::scorer::{coarse_score, weighted_score};
use crate::intelligence::simulation;
use crate::models::{ConditionSample, RatingCategory, ScoreResult, SpotProfile, SurfSpot};

/// What a recommendation's score was computed from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecommendationBasis {
    /// Scored from a caller-supplied sample, weighted model, 0-100
    Measured,
    /// Scored from a synthesized pseudo-forecast, coarse model, 0-10
    Simulated {
        /// Seasonal factor that was multiplied into the score
        seasonal_factor: f64,
    },
}

/// One ranked spot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotRecommendation {
    /// Database id of the spot
    pub spot_id: i64,
    /// Spot name
    pub spot_name: String,
    /// Score; 0-100 for measured, 0-10 for simulated
    pub score: f64,
    /// Ordinal quality label
    pub category: RatingCategory,
    /// At most three short reasons, fixed order: wind, height, period, label
    pub rationale: Vec<String>,
    /// Whether the score came from measured or simulated conditions
    pub basis: RecommendationBasis,
    /// The sample the score was computed from
    pub conditions: ConditionSample,
}

/// Ranks surf spots for a target time
#[derive(Debug, Clone, Copy, Default)]
pub struct SpotRecommender;

impl SpotRecommender {
    /// Create a recommender
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Rank spots against a measured condition sample.
    ///
    /// Every spot gets a weighted score against its profile, or against
    /// [`SpotProfile::for_orientation`] when it carries none. Descending by
    /// score; ties keep the input order; truncated to `limit`.
    #[must_use]
    pub fn recommend(
        &self,
        sample: &ConditionSample,
        spots: &[SurfSpot],
        at: DateTime<Utc>,
        limit: usize,
    ) -> Vec<SpotRecommendation> {
        let mut recommendations: Vec<SpotRecommendation> = spots
            .iter()
            .map(|spot| self.score_spot(spot, sample, at))
            .collect();
        sort_descending(&mut recommendations);
        recommendations.truncate(limit);
        debug!(
            spots = spots.len(),
            returned = recommendations.len(),
            "ranked spots against measured conditions"
        );
        recommendations
    }

    /// Rank spots for a date using the deterministic pseudo-forecast.
    ///
    /// Per spot: simulate conditions, coarse-score them, multiply by the
    /// spot-category factor and the seasonal factor, clamp into [0, 10].
    #[must_use]
    pub fn recommend_simulated(
        &self,
        spots: &[SurfSpot],
        date: DateTime<Utc>,
        limit: usize,
    ) -> Vec<SpotRecommendation> {
        let seasonal = simulation::seasonal_factor(date);
        let mut recommendations: Vec<SpotRecommendation> = spots
            .iter()
            .map(|spot| {
                let conditions = simulation::simulate_conditions(spot, date);
                let base = coarse_score(
                    conditions.wave_height,
                    conditions.wave_period,
                    conditions.wind_speed,
                    conditions.wind_direction,
                    Some(spot.orientation),
                );
                let score = round_one_decimal(base * spot.category.factor() * seasonal)
                    .clamp(0.0, COARSE_SCORE_MAX);
                let category = RatingCategory::from_weighted(score * 10.0);
                let rationale = build_rationale(&conditions, spot.orientation, category);
                SpotRecommendation {
                    spot_id: spot.id,
                    spot_name: spot.name.clone(),
                    score,
                    category,
                    rationale,
                    basis: RecommendationBasis::Simulated {
                        seasonal_factor: seasonal,
                    },
                    conditions,
                }
            })
            .collect();
        sort_descending(&mut recommendations);
        recommendations.truncate(limit);
        debug!(
            spots = spots.len(),
            returned = recommendations.len(),
            seasonal_factor = seasonal,
            "ranked spots against simulated conditions"
        );
        recommendations
    }

    /// Score a single spot by name against a measured sample.
    ///
    /// # Errors
    ///
    /// Returns a `ResourceNotFound` error when no spot carries that name.
    pub fn score_spot_by_name(
        &self,
        spot_name: &str,
        spots: &[SurfSpot],
        sample: &ConditionSample,
        at: DateTime<Utc>,
    ) -> AppResult<ScoreResult> {
        let spot = spots
            .iter()
            .find(|spot| spot.name == spot_name)
            .ok_or_else(|| AppError::not_found(format!("spot '{spot_name}' is not registered")))?;
        let recommendation = self.score_spot(spot, sample, at);
        Ok(ScoreResult {
            score: recommendation.score,
            category: recommendation.category,
            rationale: recommendation.rationale,
        })
    }

    fn score_spot(
        &self,
        spot: &SurfSpot,
        sample: &ConditionSample,
        at: DateTime<Utc>,
    ) -> SpotRecommendation {
        let profile = spot
            .profile
            .unwrap_or_else(|| SpotProfile::for_orientation(spot.orientation));
        let score = weighted_score(sample, &profile, at);
        let category = RatingCategory::from_weighted(score);
        let rationale = build_rationale(sample, spot.orientation, category);
        SpotRecommendation {
            spot_id: spot.id,
            spot_name: spot.name.clone(),
            score,
            category,
            rationale,
            basis: RecommendationBasis::Measured,
            conditions: sample.clone(),
        }
    }
}

fn sort_descending(recommendations: &mut [SpotRecommendation]) {
    // stable sort keeps input order on ties
    recommendations.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Build at most three rationale phrases in fixed order: wind, wave height,
/// wave period, then the overall quality label.
fn build_rationale(
    sample: &ConditionSample,
    spot_orientation: f64,
    category: RatingCategory,
) -> Vec<String> {
    let mut phrases = Vec::new();
    if is_offshore(sample.wind_direction, Some(spot_orientation)) {
        phrases.push("offshore wind".to_owned());
    }
    if let Some(height) = sample.wave_height {
        if (wave_height::OPTIMAL_MIN..=wave_height::OPTIMAL_MAX).contains(&height) {
            phrases.push("ideal wave height".to_owned());
        }
    }
    if let Some(period) = sample.wave_period {
        if period >= rating::LONG_PERIOD_MIN {
            phrases.push("long-period swell".to_owned());
        }
    }
    phrases.push(format!("{} conditions", category.as_str().to_lowercase()));
    phrases.truncate(rating::MAX_RATIONALE_PHRASES);
    phrases
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SpotCategory;
    use chrono::TimeZone;

    fn spot(id: i64, name: &str, orientation: f64, category: SpotCategory) -> SurfSpot {
        SurfSpot {
            id,
            name: name.to_owned(),
            latitude: 58.8,
            longitude: 5.55,
            orientation,
            description: None,
            category,
            profile: None,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn good_sample() -> ConditionSample {
        ConditionSample {
            wave_height: Some(1.4),
            wave_period: Some(10.0),
            wave_direction: Some(270.0),
            wind_speed: Some(6.0),
            wind_direction: Some(90.0),
            air_temperature: Some(16.0),
            ..ConditionSample::default()
        }
    }

    #[test]
    fn measured_ranking_is_descending_and_truncated() {
        // the west-facing spots fit the westerly swell, the north-facing
        // one does not
        let spots = vec![
            spot(1, "Bore", 270.0, SpotCategory::BeachBreak),
            spot(2, "Nordsida", 0.0, SpotCategory::Other),
            spot(3, "Orre", 280.0, SpotCategory::BeachBreak),
        ];
        let at = Utc.with_ymd_and_hms(2026, 10, 15, 7, 0, 0).unwrap();
        let ranked = SpotRecommender::new().recommend(&good_sample(), &spots, at, 2);
        assert_eq!(ranked.len(), 2);
        assert!(ranked[0].score >= ranked[1].score);
        assert!(ranked.iter().all(|r| r.spot_name != "Nordsida"));
        assert!(ranked.iter().all(|r| r.basis == RecommendationBasis::Measured));
    }

    #[test]
    fn measured_ties_keep_input_order() {
        let spots = vec![
            spot(1, "First", 270.0, SpotCategory::BeachBreak),
            spot(2, "Second", 270.0, SpotCategory::BeachBreak),
        ];
        let at = Utc.with_ymd_and_hms(2026, 10, 15, 7, 0, 0).unwrap();
        let ranked = SpotRecommender::new().recommend(&good_sample(), &spots, at, 10);
        assert_eq!(ranked[0].spot_name, "First");
        assert_eq!(ranked[1].spot_name, "Second");
    }

    #[test]
    fn simulated_ranking_is_labeled_and_bounded() {
        let spots = vec![
            spot(1, "Bore", 270.0, SpotCategory::BeachBreak),
            spot(2, "Reve", 290.0, SpotCategory::ReefBreak),
        ];
        let date = Utc.with_ymd_and_hms(2026, 10, 15, 7, 0, 0).unwrap();
        let ranked = SpotRecommender::new().recommend_simulated(&spots, date, 10);
        assert_eq!(ranked.len(), 2);
        let expected_seasonal = simulation::seasonal_factor(date);
        for recommendation in &ranked {
            assert!((0.0..=10.0).contains(&recommendation.score));
            assert_eq!(
                recommendation.basis,
                RecommendationBasis::Simulated {
                    seasonal_factor: expected_seasonal
                }
            );
            assert_eq!(recommendation.conditions.sources, vec!["simulated"]);
        }
    }

    #[test]
    fn simulated_ranking_is_deterministic() {
        let spots = vec![spot(1, "Bore", 270.0, SpotCategory::BeachBreak)];
        let date = Utc.with_ymd_and_hms(2026, 4, 2, 7, 0, 0).unwrap();
        let recommender = SpotRecommender::new();
        assert_eq!(
            recommender.recommend_simulated(&spots, date, 10),
            recommender.recommend_simulated(&spots, date, 10)
        );
    }

    #[test]
    fn unknown_spot_name_is_a_not_found_error() {
        let spots = vec![spot(1, "Bore", 270.0, SpotCategory::BeachBreak)];
        let at = Utc.with_ymd_and_hms(2026, 10, 15, 7, 0, 0).unwrap();
        let error = SpotRecommender::new()
            .score_spot_by_name("Atlantis", &spots, &good_sample(), at)
            .unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::ResourceNotFound);
    }

    #[test]
    fn rationale_is_ordered_and_capped_at_three() {
        // offshore wind, ideal height and long period all apply, so the
        // quality label is pushed out by the cap
        let rationale = build_rationale(&good_sample(), 270.0, RatingCategory::Excellent);
        assert_eq!(
            rationale,
            vec!["offshore wind", "ideal wave height", "long-period swell"]
        );
    }

    #[test]
    fn rationale_always_ends_with_the_quality_label_when_room_remains() {
        let sample = ConditionSample {
            wave_height: Some(0.3),
            wave_period: Some(5.0),
            wind_direction: Some(270.0),
            ..ConditionSample::default()
        };
        let rationale = build_rationale(&sample, 270.0, RatingCategory::Poor);
        assert_eq!(rationale, vec!["poor conditions"]);
    }
}
