//! # Hullbound Content Tools
//!
//! Command-line tools for content authors:
//! - Content directory validation
//! - Save payload checking

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod loader;
pub mod validate;

/// Content directory shipped with this crate.
pub const DEFAULT_CONTENT_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/data");
