//! Output record for a statistics summary.
//!
//! ## Purpose
//!
//! This module defines [`Summary`], the record returned for non-empty input.
//! A new record is built on every call; nothing is cached or shared.
//!
//! ## Invariants
//!
//! * `min <= max` for comparable input.
//! * For finite input, `min <= mean <= max` and `min <= median <= max`.
//! * `median` is `Some` exactly when it was requested.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::sample::Sample;

// ============================================================================
// Result Structure
// ============================================================================

/// Summary statistics of a non-empty numeric sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary<T: Sample> {
    /// Arithmetic mean.
    pub mean: T::Real,

    /// Smallest element.
    pub min: T,

    /// Largest element.
    pub max: T,

    /// Middle value of the sorted input, when requested.
    pub median: Option<T::Real>,
}

impl<T: Sample> Summary<T> {
    /// Check if the median was computed.
    pub fn has_median(&self) -> bool {
        self.median.is_some()
    }

    /// Spread between the largest and smallest element.
    pub fn range(&self) -> T::Real {
        self.max.to_real() - self.min.to_real()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T> Display for Summary<T>
where
    T: Sample + Display,
    T::Real: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  {:<8} {:>12.6}", "Mean", self.mean)?;
        writeln!(f, "  {:<8} {:>12}", "Min", self.min)?;
        writeln!(f, "  {:<8} {:>12}", "Max", self.max)?;
        if let Some(median) = self.median {
            writeln!(f, "  {:<8} {:>12.6}", "Median", median)?;
        }
        Ok(())
    }
}
