//! Move data structures.

use serde::{Deserialize, Serialize};

/// Data-driven move definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoveData {
    /// Unique string identifier referenced from creature move lists.
    pub id: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Elemental type of the move.
    #[serde(default, rename = "type")]
    pub move_type: Option<String>,

    /// Base damage.
    #[serde(default)]
    pub power: Option<u32>,
}

/// Top-level shape of `moves.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveFile {
    /// All move definitions in file order.
    pub moves: Vec<MoveData>,
}
