#![cfg(feature = "dev")]
//! Tests for the summary output record.
//!
//! ## Test Organization
//!
//! 1. **Query Methods** - has_median, range
//! 2. **Display** - Human-readable formatting

use approx::assert_relative_eq;
use std::fmt::Write;

use quickstats::internals::engine::output::Summary;

fn sample_summary(median: Option<f64>) -> Summary<i32> {
    Summary {
        mean: 2.0,
        min: 1,
        max: 3,
        median,
    }
}

// ============================================================================
// Query Method Tests
// ============================================================================

/// Test has_median.
#[test]
fn test_has_median() {
    assert!(sample_summary(Some(2.0)).has_median());
    assert!(!sample_summary(None).has_median());
}

/// Test range for integer and float summaries.
#[test]
fn test_range() {
    assert_relative_eq!(sample_summary(None).range(), 2.0, epsilon = 1e-12);

    let floats = Summary::<f64> {
        mean: 0.0,
        min: -1.5,
        max: 2.25,
        median: None,
    };
    assert_relative_eq!(floats.range(), 3.75, epsilon = 1e-12);
}

/// Test range when extremes span the whole integer domain.
#[test]
fn test_range_no_overflow() {
    let wide = Summary::<i64> {
        mean: 0.0,
        min: i64::MIN,
        max: i64::MAX,
        median: None,
    };
    assert!(wide.range() > 0.0);
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test Display with a median.
#[test]
fn test_display_with_median() {
    let mut out = String::new();
    write!(out, "{}", sample_summary(Some(2.0))).unwrap();

    assert!(out.starts_with("Summary:"));
    assert!(out.contains("Mean"));
    assert!(out.contains("2.000000"));
    assert!(out.contains("Min"));
    assert!(out.contains("Max"));
    assert!(out.contains("Median"));
}

/// Test Display without a median.
#[test]
fn test_display_without_median() {
    let out = format!("{}", sample_summary(None));

    assert!(!out.contains("Median"));
    assert_eq!(out.lines().count(), 4);
}
