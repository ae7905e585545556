//! Execution of a statistics summary.
//!
//! ## Purpose
//!
//! [`StatsExecutor`] turns a validated configuration and a slice into a
//! [`Summary`]. It applies the empty-input policy once, up front, so the
//! math layer is only ever asked about non-empty data.
//!
//! ## Key concepts
//!
//! * **Empty input** yields `None` regardless of configuration.
//! * **Median** is only computed (and its sorted copy only allocated) when requested.
//! * **Finiteness** is only checked on the validating path.

// Internal dependencies
use crate::engine::output::Summary;
use crate::engine::validator::Validator;
use crate::math::median::median;
use crate::math::moments::{extrema, mean};
use crate::primitives::errors::StatsError;
use crate::primitives::sample::Sample;

// ============================================================================
// Configuration
// ============================================================================

/// Resolved configuration for a summary run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsConfig {
    /// Compute the median.
    pub include_median: bool,

    /// Reject NaN and infinite input on the validating path.
    pub require_finite: bool,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            include_median: true,
            require_finite: false,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless summary executor.
pub struct StatsExecutor;

impl StatsExecutor {
    /// Summarize `data`, or return `None` when it is empty.
    pub fn run<T: Sample>(data: &[T], config: &StatsConfig) -> Option<Summary<T>> {
        let (min, max) = extrema(data)?;
        let mean = mean(data)?;
        let median = if config.include_median {
            median(data)
        } else {
            None
        };

        Some(Summary {
            mean,
            min,
            max,
            median,
        })
    }

    /// Like [`run`](Self::run), but validates input first when required.
    pub fn run_checked<T: Sample>(
        data: &[T],
        config: &StatsConfig,
    ) -> Result<Option<Summary<T>>, StatsError> {
        if config.require_finite {
            Validator::validate_finite(data)?;
        }
        Ok(Self::run(data, config))
    }
}
