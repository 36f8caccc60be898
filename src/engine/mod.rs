//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a conditioning run: it validates configuration,
//! sequences the outlier filter with the final interpolation or piecewise
//! stage, and assembles the result.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Configuration and input validation.
pub mod validator;

/// Conditioning orchestration.
pub mod executor;

/// Result types.
pub mod output;
