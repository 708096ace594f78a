// ABOUTME: Core analytics surface: geometry, scorers, profiles, recommender and history
// ABOUTME: Everything here is synchronous and pure; async stays at the provider boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Surfcast Contributors

//! # Surf Intelligence
//!
//! The analytical core of the crate: circular-angle geometry, the coarse and
//! weighted condition scorers, spot preference profiles, the recommendation
//! engine, the deterministic conditions simulation and the historical
//! performance aggregator.
//!
//! All of it is synchronous, fail-soft and free of shared state. Condition
//! samples come in from the [`crate::providers`] boundary; nothing in this
//! module performs I/O.

pub mod geometry;
pub mod performance;
pub mod profiles;
pub mod recommendation_engine;
pub mod scorer;
pub mod simulation;

pub use performance::{spot_performance, SpotPerformance};
pub use recommendation_engine::{RecommendationBasis, SpotRecommendation, SpotRecommender};
pub use scorer::{coarse_score, weighted_score};
