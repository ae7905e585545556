#![cfg(feature = "dev")]
//! Tests for mean and extrema.
//!
//! ## Test Organization
//!
//! 1. **Mean** - Arithmetic mean over integers and floats
//! 2. **Extrema** - Single-pass min/max
//! 3. **Edge Cases** - Empty input, NaN handling

use approx::assert_relative_eq;

use quickstats::internals::math::moments::{extrema, mean};

// ============================================================================
// Mean Tests
// ============================================================================

/// Test mean of integers.
///
/// Verifies floating-point division.
#[test]
fn test_mean_integers() {
    // 7 / 2 = 3.5, not 3
    assert_eq!(mean(&[3, 4]), Some(3.5));
}

/// Test mean of floats.
#[test]
fn test_mean_floats() {
    let m = mean(&[0.1f64, 0.2, 0.3]).unwrap();
    assert_relative_eq!(m, 0.2, epsilon = 1e-12);
}

/// Test mean of symmetric data.
#[test]
fn test_mean_symmetric() {
    assert_eq!(mean(&[-2, -1, 0, 1, 2]), Some(0.0));
}

/// Test mean of large unsigned values.
///
/// Verifies that accumulation happens outside the input type.
#[test]
fn test_mean_no_overflow() {
    let m = mean(&[u64::MAX, u64::MAX]).unwrap();
    assert_relative_eq!(m, u64::MAX as f64, max_relative = 1e-12);
}

// ============================================================================
// Extrema Tests
// ============================================================================

/// Test extrema of unsorted input.
#[test]
fn test_extrema_basic() {
    assert_eq!(extrema(&[3, 9, -2, 5]), Some((-2, 9)));
}

/// Test extrema of a single element.
#[test]
fn test_extrema_single() {
    assert_eq!(extrema(&[42.0]), Some((42.0, 42.0)));
}

/// Test extrema with extreme float values.
#[test]
fn test_extrema_extreme_values() {
    let data = [f64::MAX, f64::MIN, 0.0, f64::MIN_POSITIVE];
    assert_eq!(extrema(&data), Some((f64::MIN, f64::MAX)));
}

// ============================================================================
// Edge Cases Tests
// ============================================================================

/// Test empty input.
#[test]
fn test_moments_empty() {
    let empty: [i16; 0] = [];
    assert_eq!(mean(&empty), None);
    assert_eq!(extrema(&empty), None);
}

/// Test that NaN after the first element never becomes an extreme.
#[test]
fn test_extrema_skips_later_nan() {
    assert_eq!(extrema(&[2.0, f64::NAN, 1.0, 3.0]), Some((1.0, 3.0)));
}

/// Test mean over every family of real types.
///
/// Verifies that the count cast and accumulator work for f32 and f64 reals.
#[test]
fn test_mean_real_types() {
    let f32_mean: f32 = mean(&[1.0f32, 2.0]).unwrap();
    let int_mean: f64 = mean(&[1i8, 2]).unwrap();

    assert_relative_eq!(f32_mean, 1.5f32, epsilon = 1e-6);
    assert_relative_eq!(int_mean, 1.5, epsilon = 1e-12);
}
