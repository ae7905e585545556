//! Error types for statistics configuration and validation.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while configuring
//! a calculator or validating its input. Empty input is deliberately absent:
//! it is an ordinary outcome reported as `None`, not an error.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending parameter name or value.
//! * **Deferred**: Builder errors are recorded while chaining and reported by `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for statistics operations.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    /// Input contains NaN or infinite values while finiteness was required.
    InvalidNumericValue(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for StatsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for StatsError {}
