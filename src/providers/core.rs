// ABOUTME: Core provider trait for unified access to surf condition data sources
// ABOUTME: Defines the ConditionProvider contract and nearest-sample selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Surfcast Contributors

//! # Condition Provider Contract
//!
//! Every source of condition data, live forecast feeds, merged hybrids or the
//! synthetic test provider, implements [`ConditionProvider`]. The contract is
//! deliberately narrow:
//!
//! - Providers return a [`ConditionSample`] with absent fields rather than
//!   erroring on partial data; `AppError` is reserved for transport and
//!   configuration failures.
//! - When a provider holds a series of timestamped entries it selects the one
//!   nearest the requested target time ([`select_nearest`]).
//! - Every provider tags the samples it produces with its [`name`].
//!
//! No HTTP client implementations live in this crate; callers plug their own
//! providers in behind this trait.
//!
//! [`name`]: ConditionProvider::name

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::AppResult;
use crate::models::ConditionSample;

/// A source of surf condition samples
#[async_trait]
pub trait ConditionProvider: Send + Sync {
    /// Short stable source name used for sample tagging, e.g. `"synthetic"`
    fn name(&self) -> &'static str;

    /// Fetch the condition sample nearest `target_time` for a location.
    ///
    /// # Errors
    ///
    /// Returns an error for transport or configuration failures; partial data
    /// is returned as a sample with absent fields instead.
    async fn fetch_conditions(
        &self,
        latitude: f64,
        longitude: f64,
        target_time: DateTime<Utc>,
    ) -> AppResult<ConditionSample>;
}

/// Select the sample whose `observed_at` is nearest `target`.
///
/// Samples without a timestamp are skipped; `None` when nothing qualifies.
#[must_use]
pub fn select_nearest(
    samples: &[ConditionSample],
    target: DateTime<Utc>,
) -> Option<&ConditionSample> {
    samples
        .iter()
        .filter(|sample| sample.observed_at.is_some())
        .min_by_key(|sample| {
            sample
                .observed_at
                .map_or(i64::MAX, |at| (at - target).num_seconds().abs())
        })
}
