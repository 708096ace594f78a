// ABOUTME: Historical performance aggregation over logged surf sessions
// ABOUTME: Computes per-spot totals, average rating and score, and the success rate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Surfcast Contributors

//! Historical spot performance.
//!
//! Read-only aggregation over logged sessions. A spot with no sessions yields
//! a zeroed summary rather than an error so dashboards can render every spot
//! uniformly.

use serde::{Deserialize, Serialize};

use crate::constants::history;
use crate::models::SurfSession;

/// Aggregated session history for one spot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotPerformance {
    /// Spot name
    pub spot_name: String,
    /// Number of logged sessions
    pub total_sessions: usize,
    /// Mean user rating, one decimal; 0.0 with no sessions
    pub average_rating: f64,
    /// Mean coarse surf score over sessions that recorded one, one decimal
    pub average_score: f64,
    /// Share of sessions rated 4 or better, percent, one decimal
    pub success_rate: f64,
}

/// Summarize the sessions logged at a spot.
///
/// `sessions` must already be filtered to the spot; the name is carried
/// through for display. Sessions without a recorded surf score still count
/// toward the total and the success rate.
#[must_use]
pub fn spot_performance(spot_name: &str, sessions: &[SurfSession]) -> SpotPerformance {
    if sessions.is_empty() {
        return SpotPerformance {
            spot_name: spot_name.to_owned(),
            total_sessions: 0,
            average_rating: 0.0,
            average_score: 0.0,
            success_rate: 0.0,
        };
    }

    let total = sessions.len();
    let rating_sum: i32 = sessions.iter().map(|s| s.rating).sum();
    let average_rating = round_one_decimal(f64::from(rating_sum) / total as f64);

    let scores: Vec<f64> = sessions.iter().filter_map(|s| s.surf_score).collect();
    let average_score = if scores.is_empty() {
        0.0
    } else {
        round_one_decimal(scores.iter().sum::<f64>() / scores.len() as f64)
    };

    let successful = sessions
        .iter()
        .filter(|s| s.rating >= history::SUCCESS_RATING_MIN)
        .count();
    let success_rate = round_one_decimal(successful as f64 / total as f64 * 100.0);

    SpotPerformance {
        spot_name: spot_name.to_owned(),
        total_sessions: total,
        average_rating,
        average_score,
        success_rate,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConditionSample, DerivedFeatures, Season, TimeOfDay};
    use chrono::{TimeZone, Utc};

    fn session(rating: i32, surf_score: Option<f64>) -> SurfSession {
        let at = Utc.with_ymd_and_hms(2026, 10, 15, 7, 0, 0).unwrap();
        SurfSession {
            id: 0,
            spot_id: 1,
            date_time: at,
            duration_minutes: Some(90),
            rating,
            board_type: None,
            notes: None,
            conditions: ConditionSample::default(),
            derived: DerivedFeatures {
                offshore_wind: false,
                swell_angle_difference: None,
                swell_component: 0.0,
            },
            season: Season::Autumn,
            weekday: 3,
            time_of_day: TimeOfDay::Morning,
            surf_score,
            created_at: at,
        }
    }

    #[test]
    fn empty_history_yields_a_zeroed_summary() {
        let summary = spot_performance("Bore", &[]);
        assert_eq!(summary.spot_name, "Bore");
        assert_eq!(summary.total_sessions, 0);
        assert_eq!(summary.average_rating, 0.0);
        assert_eq!(summary.average_score, 0.0);
        assert_eq!(summary.success_rate, 0.0);
    }

    #[test]
    fn averages_and_success_rate_round_to_one_decimal() {
        let sessions = vec![
            session(5, Some(8.0)),
            session(4, Some(6.5)),
            session(2, Some(3.0)),
        ];
        let summary = spot_performance("Orre", &sessions);
        assert_eq!(summary.total_sessions, 3);
        // (5 + 4 + 2) / 3 = 3.666...
        assert_eq!(summary.average_rating, 3.7);
        // (8.0 + 6.5 + 3.0) / 3 = 5.833...
        assert_eq!(summary.average_score, 5.8);
        // 2 of 3 rated >= 4
        assert_eq!(summary.success_rate, 66.7);
    }

    #[test]
    fn sessions_without_scores_still_count_toward_the_rate() {
        let sessions = vec![session(4, None), session(1, None)];
        let summary = spot_performance("Reve", &sessions);
        assert_eq!(summary.total_sessions, 2);
        assert_eq!(summary.average_score, 0.0);
        assert_eq!(summary.success_rate, 50.0);
    }
}
