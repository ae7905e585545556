//! # quickstats — summary statistics for numeric slices
//!
//! Computes the mean, minimum, maximum and (optionally) median of a slice of
//! integers or floats, without reordering the caller's data.
//!
//! ## Quick Start
//!
//! ```rust
//! use quickstats::prelude::*;
//!
//! let data = vec![1, 2, 3, 4];
//!
//! let summary = compute_statistics(&data, true).expect("non-empty input");
//!
//! assert_eq!(summary.mean, 2.5);
//! assert_eq!(summary.min, 1);
//! assert_eq!(summary.max, 4);
//! assert_eq!(summary.median, Some(2.5));
//! ```
//!
//! ### Builder
//!
//! ```rust
//! use quickstats::prelude::*;
//!
//! let data = vec![3.0, 1.0, 2.0];
//!
//! let stats = Statistics::new()
//!     .exclude_median()   // Skip the sorted copy
//!     .require_finite()   // Reject NaN/Inf in try_compute
//!     .build()?;
//!
//! let summary = stats.try_compute(&data)?.expect("non-empty input");
//! assert_eq!(summary.median, None);
//!
//! println!("{}", summary);
//! # Result::<(), StatsError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Mean         2.000000
//!   Min                 1
//!   Max                 3
//! ```
//!
//! ### Empty Input
//!
//! Empty input is not an error. It is reported as `None`:
//!
//! ```rust
//! use quickstats::prelude::*;
//!
//! let empty: [f64; 0] = [];
//! assert!(compute_statistics(&empty, true).is_none());
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency. The
//! median needs `alloc` for its sorted copy.
//!
//! ```toml
//! [dependencies]
//! quickstats = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure statistical functions.
mod math;

// Layer 3: Engine - orchestration and validation.
mod engine;

// High-level API.
mod api;

pub use crate::api::{
    Sample, StatisticsBuilder, StatisticsCalculator, StatsError, Summary, compute_statistics,
};

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        Sample, StatisticsBuilder as Statistics, StatisticsCalculator, StatsError, Summary,
        compute_statistics,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
