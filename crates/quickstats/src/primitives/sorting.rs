//! Sorting utilities for summary input.
//!
//! ## Purpose
//!
//! The median needs the input in ascending order, but the caller's slice must
//! not be reordered. This module produces an owned, sorted copy.
//!
//! ## Design notes
//!
//! * **Stability**: Uses stable sorting so equal values keep their relative order.
//! * **Robustness**: Incomparable pairs (NaN) compare as equal instead of panicking.
//! * **Efficiency**: Already sorted input skips the sort entirely.
//!
//! ## Invariants
//!
//! * The returned vector is a permutation of the input.
//! * The input slice is never mutated.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;

// ============================================================================
// Sorting Functions
// ============================================================================

/// Return an ascending copy of `data`.
///
/// 1. Checks if data is already sorted (fast path).
/// 2. Copies the slice.
/// 3. Performs a stable sort on the copy.
#[inline]
pub fn sorted_copy<T: Copy + PartialOrd>(data: &[T]) -> Vec<T> {
    let mut sorted = data.to_vec();

    // Fast path: check if data is already sorted
    if is_sorted(data) {
        return sorted;
    }

    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Check whether `data` is in non-decreasing order.
#[inline]
pub fn is_sorted<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
