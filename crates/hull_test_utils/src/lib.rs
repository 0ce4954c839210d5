//! # Hullbound Test Utilities
//!
//! Shared testing utilities for all crates:
//! - A valid content set to mutate in tests
//! - Temporary content directory helpers
//! - Property-based testing re-export

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;

pub use fixtures::ContentFixture;

/// Re-export proptest for convenience.
pub use proptest;
