//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the sample representation, point-set helpers and the
//! shared error type used throughout the crate. It has zero internal
//! dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Samples, validity maps and point counts.
pub mod sample;

/// Shared error types.
pub mod errors;
