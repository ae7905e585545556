//! High-level API for summary statistics.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the one-shot
//! [`compute_statistics`] function and a fluent builder producing a reusable
//! [`StatisticsCalculator`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults (median included).
//! * **Validated**: Configuration mistakes surface when `.build()` is called.
//! * **Type-Safe**: Generic over [`Sample`] so integers and floats share one API.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`StatisticsBuilder`] via `Statistics::new()`.
//! 2. Chain configuration methods (`.include_median()`, `.require_finite()`).
//! 3. Call `.build()` to get a calculator, then `.compute(&data)`.

// External dependencies
use core::marker::PhantomData;

// Internal dependencies
use crate::engine::executor::{StatsConfig, StatsExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::output::Summary;
pub use crate::primitives::errors::StatsError;
pub use crate::primitives::sample::Sample;

// ============================================================================
// One-shot API
// ============================================================================

/// Summarize `data` with mean, min, max and, if requested, the median.
///
/// Returns `None` for empty input, whatever `include_median` says. The input
/// slice is never reordered.
pub fn compute_statistics<T: Sample>(data: &[T], include_median: bool) -> Option<Summary<T>> {
    let config = StatsConfig {
        include_median,
        ..StatsConfig::default()
    };
    StatsExecutor::run(data, &config)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a [`StatisticsCalculator`].
#[derive(Debug, Clone)]
pub struct StatisticsBuilder<T> {
    /// Compute the median (default: true).
    pub include_median: Option<bool>,

    /// Reject NaN and infinite input in `try_compute` (default: false).
    pub require_finite: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    _sample: PhantomData<T>,
}

impl<T: Sample> Default for StatisticsBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sample> StatisticsBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            include_median: None,
            require_finite: None,
            duplicate_param: None,
            _sample: PhantomData,
        }
    }

    /// Choose whether the median is computed.
    pub fn include_median(mut self, include: bool) -> Self {
        if self.include_median.is_some() {
            self.duplicate_param = Some("include_median");
        }
        self.include_median = Some(include);
        self
    }

    /// Skip the median (and its sorted copy).
    pub fn exclude_median(self) -> Self {
        self.include_median(false)
    }

    /// Reject NaN and infinite values in [`StatisticsCalculator::try_compute`].
    pub fn require_finite(mut self) -> Self {
        if self.require_finite.is_some() {
            self.duplicate_param = Some("require_finite");
        }
        self.require_finite = Some(true);
        self
    }

    /// Validate the configuration and build a calculator.
    pub fn build(self) -> Result<StatisticsCalculator<T>, StatsError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = StatsConfig::default();
        Ok(StatisticsCalculator {
            config: StatsConfig {
                include_median: self.include_median.unwrap_or(defaults.include_median),
                require_finite: self.require_finite.unwrap_or(defaults.require_finite),
            },
            _sample: PhantomData,
        })
    }
}

// ============================================================================
// Calculator
// ============================================================================

/// A validated, reusable summary calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticsCalculator<T> {
    config: StatsConfig,
    _sample: PhantomData<T>,
}

impl<T: Sample> StatisticsCalculator<T> {
    /// Summarize `data`, or return `None` when it is empty.
    ///
    /// Finiteness is not checked here, even if it was required.
    pub fn compute(&self, data: &[T]) -> Option<Summary<T>> {
        StatsExecutor::run(data, &self.config)
    }

    /// Summarize `data`, rejecting non-finite values if the builder required it.
    pub fn try_compute(&self, data: &[T]) -> Result<Option<Summary<T>>, StatsError> {
        StatsExecutor::run_checked(data, &self.config)
    }

    /// Whether this calculator computes the median.
    pub fn includes_median(&self) -> bool {
        self.config.include_median
    }

    /// Whether this calculator rejects non-finite values in `try_compute`.
    pub fn requires_finite(&self) -> bool {
        self.config.require_finite
    }
}
