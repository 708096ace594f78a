// ABOUTME: Provider boundary: the ConditionProvider trait and shipped implementations
// ABOUTME: Synthetic samples for development plus the field-wise hybrid merge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Surfcast Contributors

//! # Condition Providers
//!
//! The async boundary between the scoring core and the outside world. See
//! [`core::ConditionProvider`] for the contract; the crate ships a synthetic
//! provider for development and a hybrid that merges several sources.

pub mod core;
pub mod hybrid;
pub mod synthetic_provider;

pub use core::{select_nearest, ConditionProvider};
pub use hybrid::HybridConditionProvider;
pub use synthetic_provider::SyntheticConditionProvider;
