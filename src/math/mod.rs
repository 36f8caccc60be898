//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the fitting
//! algorithms:
//! - 3×3 determinants and linear solves (Cramer's rule)
//! - Quadratic polynomial coefficients and evaluation
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Determinants and 3×3 linear systems.
pub mod linalg;

/// Quadratic coefficients.
pub mod polynomial;
