// ABOUTME: Hybrid condition provider merging several sources field-wise in priority order
// ABOUTME: Fills a missing wave period from the height-based estimate table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Surfcast Contributors

//! # Hybrid Condition Provider
//!
//! Wraps an ordered list of providers and merges their samples field by
//! field: for each field the first provider that reports a value wins.
//! A provider that fails entirely is logged and skipped, so one flaky
//! upstream never takes the merged feed down; only when every source fails
//! does the fetch itself fail. If no source reports a wave period, a
//! height-based estimate is substituted and tagged `"estimated"`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::warn;

use crate::constants::period_estimate;
use crate::errors::{AppError, AppResult};
use crate::models::ConditionSample;
use crate::providers::core::ConditionProvider;

/// Provider name used for sample tagging
pub const PROVIDER_NAME: &str = "hybrid";

/// Merges samples from an ordered list of providers
pub struct HybridConditionProvider {
    providers: Vec<Arc<dyn ConditionProvider>>,
}

impl HybridConditionProvider {
    /// Create a hybrid over providers in priority order, highest first
    #[must_use]
    pub fn new(providers: Vec<Arc<dyn ConditionProvider>>) -> Self {
        Self { providers }
    }
}

/// Estimate a wave period from the wave height.
///
/// Bigger seas usually carry longer periods; the buckets reproduce the
/// reference estimate table. `None` when the height itself is absent.
#[must_use]
pub fn estimate_wave_period(wave_height: Option<f64>) -> Option<f64> {
    let height = wave_height?;
    for (bound, period) in period_estimate::BUCKETS {
        if height < bound {
            return Some(period);
        }
    }
    Some(period_estimate::LARGE_SEA_PERIOD)
}

macro_rules! merge_field {
    ($merged:expr, $sample:expr, $($field:ident),+) => {
        $(
            if $merged.$field.is_none() {
                $merged.$field = $sample.$field;
            }
        )+
    };
}

#[async_trait]
impl ConditionProvider for HybridConditionProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn fetch_conditions(
        &self,
        latitude: f64,
        longitude: f64,
        target_time: DateTime<Utc>,
    ) -> AppResult<ConditionSample> {
        let mut merged = ConditionSample::default();
        let mut failures = 0;
        for provider in &self.providers {
            match provider
                .fetch_conditions(latitude, longitude, target_time)
                .await
            {
                Ok(sample) => {
                    merge_field!(
                        merged,
                        sample,
                        wave_height,
                        wave_period,
                        wave_direction,
                        wind_speed,
                        wind_direction,
                        wind_gust,
                        air_temperature,
                        water_temperature,
                        humidity,
                        pressure,
                        precipitation,
                        tide_height,
                        observed_at
                    );
                    for source in &sample.sources {
                        merged.tag_source(source);
                    }
                }
                Err(error) => {
                    warn!(
                        provider = provider.name(),
                        error = %error,
                        "condition provider failed, continuing with remaining sources"
                    );
                    failures += 1;
                }
            }
        }
        if !self.providers.is_empty() && failures == self.providers.len() {
            return Err(AppError::external_service_unavailable(
                "every condition source failed",
            ));
        }

        if merged.wave_period.is_none() {
            if let Some(period) = estimate_wave_period(merged.wave_height) {
                merged.wave_period = Some(period);
                merged.tag_source(period_estimate::SOURCE_TAG);
            }
        }
        Ok(merged)
    }
}
