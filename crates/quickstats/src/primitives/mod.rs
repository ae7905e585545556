//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the numeric input abstraction, sorting utilities and
//! the shared error type used throughout the crate. It has zero internal
//! dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Numeric sample abstraction.
pub mod sample;

/// Sorting utilities.
pub mod sorting;

/// Shared error types.
pub mod errors;
