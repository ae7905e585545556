//! Input validation for statistics configuration and data.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Side-effect free**: Validation never reorders or copies input.
//!
//! ## Non-goals
//!
//! * Empty input is not validated here; it is a defined `None` outcome.
//! * This module does not correct or filter invalid input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// Internal dependencies
use crate::primitives::errors::StatsError;
use crate::primitives::sample::Sample;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for statistics configuration and input data.
pub struct Validator;

impl Validator {
    /// Validate that every element of `data` is finite.
    pub fn validate_finite<T: Sample>(data: &[T]) -> Result<(), StatsError> {
        for (i, &val) in data.iter().enumerate() {
            if !val.is_finite_sample() {
                return Err(StatsError::InvalidNumericValue(format!(
                    "data[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Report a parameter recorded as set more than once by a builder.
    pub fn validate_no_duplicates(duplicate: Option<&'static str>) -> Result<(), StatsError> {
        if let Some(parameter) = duplicate {
            return Err(StatsError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
