//! Arithmetic mean and extrema.
//!
//! Summation happens in the sample's `Real` type, so integer input cannot
//! overflow while accumulating.

// External dependencies
use num_traits::{NumCast, One, Zero};

// Internal dependencies
use crate::primitives::sample::Sample;

/// Arithmetic mean: sum of all elements divided by their count.
#[inline]
pub fn mean<T: Sample>(data: &[T]) -> Option<T::Real> {
    if data.is_empty() {
        return None;
    }

    let n: T::Real = NumCast::from(data.len()).unwrap_or_else(T::Real::one);
    let mut sum = T::Real::zero();
    for &val in data {
        sum = sum + val.to_real();
    }
    Some(sum / n)
}

/// Minimum and maximum in a single pass.
///
/// Ties keep the first occurrence. Values that do not compare (NaN) never
/// replace the current candidate.
#[inline]
pub fn extrema<T: Sample>(data: &[T]) -> Option<(T, T)> {
    let (&first, rest) = data.split_first()?;

    let mut min = first;
    let mut max = first;
    for &val in rest {
        if val < min {
            min = val;
        }
        if val > max {
            max = val;
        }
    }
    Some((min, max))
}
