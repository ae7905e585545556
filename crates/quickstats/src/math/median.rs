//! Median estimation.
//!
//! ## Purpose
//!
//! The median is the middle value of the ascending input. For an even count
//! it is the average of the two middle values.
//!
//! ## Key concepts
//!
//! * For `n` sorted values, odd `n` selects index `n / 2`.
//! * Even `n` averages indices `n / 2 - 1` and `n / 2`.
//! * The caller's slice is left untouched; [`median`] sorts a copy.

// External dependencies
use num_traits::One;

// Internal dependencies
use crate::primitives::sample::Sample;
use crate::primitives::sorting::sorted_copy;

/// Median of an already ascending slice.
#[inline]
pub fn median_of_sorted<T: Sample>(sorted: &[T]) -> Option<T::Real> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }

    let mid = n / 2;
    if n.is_multiple_of(2) {
        // Even length: average of two middle values
        let lower = sorted[mid - 1].to_real();
        let upper = sorted[mid].to_real();
        let two = T::Real::one() + T::Real::one();
        Some((lower + upper) / two)
    } else {
        Some(sorted[mid].to_real())
    }
}

/// Median of unsorted input, computed on a sorted copy.
#[inline]
pub fn median<T: Sample>(data: &[T]) -> Option<T::Real> {
    if data.is_empty() {
        return None;
    }
    median_of_sorted(&sorted_copy(data))
}
