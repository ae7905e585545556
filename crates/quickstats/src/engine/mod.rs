//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer coordinates the math layer into a complete summary. It owns
//! the empty-input policy, input validation and the output record.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Summary execution.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for summaries.
pub mod output;
