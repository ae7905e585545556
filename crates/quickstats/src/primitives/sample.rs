//! Numeric input abstraction.
//!
//! ## Purpose
//!
//! Summaries accept integers as well as floats. `min` and `max` keep the
//! input type, while `mean` and `median` need a floating-point companion
//! type. [`Sample`] ties the two together so callers never spell out the
//! output type.
//!
//! ## Key concepts
//!
//! * Integers (and `f64`) average in `f64`.
//! * `f32` averages in `f32`, keeping the caller's precision.
//!
//! ## Invariants
//!
//! * `to_real` is total: every sample maps to some `Real` value.
//! * Integer samples are always finite.

// External dependencies
use num_traits::{Float, ToPrimitive};

// ============================================================================
// Sample Trait
// ============================================================================

/// A numeric value that can be summarized.
pub trait Sample: Copy + PartialOrd + ToPrimitive {
    /// Floating-point type in which mean and median are expressed.
    type Real: Float;

    /// Convert the sample into its floating-point companion type.
    fn to_real(self) -> Self::Real;

    /// Whether the sample is a finite number (always true for integers).
    fn is_finite_sample(self) -> bool;
}

macro_rules! impl_integer_sample {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sample for $t {
                type Real = f64;

                #[inline]
                fn to_real(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn is_finite_sample(self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_integer_sample!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Sample for f32 {
    type Real = f32;

    #[inline]
    fn to_real(self) -> f32 {
        self
    }

    #[inline]
    fn is_finite_sample(self) -> bool {
        Float::is_finite(self)
    }
}

impl Sample for f64 {
    type Real = f64;

    #[inline]
    fn to_real(self) -> f64 {
        self
    }

    #[inline]
    fn is_finite_sample(self) -> bool {
        Float::is_finite(self)
    }
}
