// ABOUTME: Synthetic condition provider serving preloaded timestamped samples
// ABOUTME: Used for development and tests; no network access, deterministic output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Surfcast Contributors

// RwLock poisoning is converted to an internal AppError so it propagates
// through the normal error path

//! # Synthetic Condition Provider
//!
//! Serves preloaded, timestamped condition samples with nearest-time
//! selection. Unlike a live forecast source it needs no credentials and no
//! network, which makes it the provider of choice for development, CI and
//! demonstrations. All access goes through an `RwLock`, so one instance can
//! be shared across tasks.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock};

use crate::errors::{AppError, AppResult};
use crate::models::ConditionSample;
use crate::providers::core::{select_nearest, ConditionProvider};

/// Provider name used for sample tagging
pub const PROVIDER_NAME: &str = "synthetic";

/// Synthetic condition provider backed by an in-memory sample series
pub struct SyntheticConditionProvider {
    samples: Arc<RwLock<Vec<ConditionSample>>>,
}

impl SyntheticConditionProvider {
    /// Create a provider with no preloaded samples
    #[must_use]
    pub fn new() -> Self {
        Self::with_samples(Vec::new())
    }

    /// Create a provider preloaded with timestamped samples
    #[must_use]
    pub fn with_samples(samples: Vec<ConditionSample>) -> Self {
        Self {
            samples: Arc::new(RwLock::new(samples)),
        }
    }

    /// Add a sample to the series.
    ///
    /// # Errors
    ///
    /// Returns an internal error when the sample lock is poisoned.
    pub fn push_sample(&self, sample: ConditionSample) -> AppResult<()> {
        let mut samples = self
            .samples
            .write()
            .map_err(|_| AppError::internal("synthetic sample lock poisoned"))?;
        samples.push(sample);
        Ok(())
    }
}

impl Default for SyntheticConditionProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConditionProvider for SyntheticConditionProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn fetch_conditions(
        &self,
        _latitude: f64,
        _longitude: f64,
        target_time: DateTime<Utc>,
    ) -> AppResult<ConditionSample> {
        let samples = self
            .samples
            .read()
            .map_err(|_| AppError::internal("synthetic sample lock poisoned"))?;
        let mut sample = select_nearest(&samples, target_time)
            .cloned()
            .unwrap_or_default();
        sample.tag_source(PROVIDER_NAME);
        Ok(sample)
    }
}
