// ABOUTME: Main library entry point for the surfcast recommendation engine
// ABOUTME: Wires scoring, profiles, recommendations, providers, persistence and export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Surfcast Contributors

#![deny(unsafe_code)]

//! # Surfcast
//!
//! A surf spot recommendation engine for the Jæren coast: condition scoring,
//! per-spot preference profiles, ranked recommendations over measured or
//! simulated conditions, session logging with historical performance
//! aggregation, and a CSV export of the session history.
//!
//! ## Features
//!
//! - **Two scoring models**: a coarse 0-10 bucket score for quick ranking and
//!   a weighted 0-100 model evaluated against per-spot preference profiles
//! - **Provider boundary**: condition data enters through the async
//!   [`providers::ConditionProvider`] trait; a synthetic provider and a
//!   field-wise hybrid merge ship with the crate
//! - **Deterministic simulation**: a sinusoid pseudo-forecast keyed on
//!   day-of-year for reproducible what-if rankings, always labeled as such
//! - **Session history**: SQLite persistence via `sqlx` and a flat CSV export
//!   for downstream analysis
//!
//! ## Example
//!
//! ```rust,no_run
//! use surfcast::config::ServerConfig;
//! use surfcast::database::Database;
//! use surfcast::errors::AppResult;
//! use surfcast::intelligence::SpotRecommender;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     config.logging.init().map_err(surfcast::errors::AppError::from)?;
//!
//!     let db = Database::new(&config.database_url).await?;
//!     db.seed_reference_spots().await?;
//!
//!     let spots = db.list_spots().await?;
//!     let ranked = SpotRecommender::new().recommend_simulated(&spots, chrono::Utc::now(), 3);
//!     for recommendation in ranked {
//!         println!("{}: {}", recommendation.spot_name, recommendation.score);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod database;
pub mod errors;
pub mod export;
pub mod intelligence;
pub mod logging;
pub mod models;
pub mod providers;
