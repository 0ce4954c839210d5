//! # Hullbound Core
//!
//! Content model and integrity rules for Hullbound game data.
//!
//! This crate contains **only** pure logic:
//! - No file IO
//! - No process exit
//! - No global state
//!
//! Loading JSON from disk and reporting results lives in `hull_tools`.
//!
//! ## Crate Structure
//!
//! - [`data`] - Creature, move, item and encounter definitions
//! - [`checks`] - Cross-reference checks over loaded content
//! - [`save`] - Save payload contract and migration
//! - [`error`] - Invariant violation type

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod checks;
pub mod data;
pub mod error;
pub mod save;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::data::{
        CreatureData, CreatureFile, EncounterEntry, EncounterFile, EncounterTables, ItemData,
        ItemFile, MoveData, MoveFile, SceneTable, Weight,
    };
    pub use crate::error::{InvariantViolation, Result};
}
