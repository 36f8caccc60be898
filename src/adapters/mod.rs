//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer adapts conditioned sequences to the outside world. It currently
//! provides the fixed-capacity framing used when uploading a path to a motion
//! controller and reading it back.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Controller upload framing.
pub mod upload;
