//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure statistical functions behind a summary:
//! - Arithmetic mean and extrema
//! - Median of sorted or unsorted input
//!
//! Each function reports empty input as `None` and never mutates its input.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Mean and extrema.
pub mod moments;

/// Median estimation.
pub mod median;
