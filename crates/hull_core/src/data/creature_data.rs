//! Creature data structures.

use serde::{Deserialize, Serialize};

/// Data-driven creature definition.
///
/// Only `id`, `moves` and `evolves_to` take part in validation. The display
/// fields are carried so the same type can back tooling that reads the
/// content files.
///
/// # Example JSON
///
/// ```json
/// {
///     "id": "sprat",
///     "name": "Sprat",
///     "types": ["water"],
///     "base_hp": 18,
///     "moves": ["splash_jab", "tide_pull"],
///     "evolves_to": "sprawler"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatureData {
    /// Unique string identifier, referenced by encounters and evolutions.
    pub id: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Elemental types used by battle damage multipliers.
    #[serde(default)]
    pub types: Vec<String>,

    /// Base hit points before level scaling.
    #[serde(default)]
    pub base_hp: Option<u32>,

    /// Move IDs this creature knows, in slot order.
    #[serde(default)]
    pub moves: Vec<String>,

    /// Creature ID this one evolves into. `None` or empty for final forms.
    #[serde(default)]
    pub evolves_to: Option<String>,
}

impl CreatureData {
    /// The next evolution stage, if any.
    ///
    /// An empty string is treated the same as a missing or `null` target.
    #[must_use]
    pub fn next_stage(&self) -> Option<&str> {
        self.evolves_to.as_deref().filter(|id| !id.is_empty())
    }

    /// Check if this creature evolves further.
    #[must_use]
    pub fn evolves(&self) -> bool {
        self.next_stage().is_some()
    }

    /// Check if this creature knows a specific move.
    #[must_use]
    pub fn knows_move(&self, move_id: &str) -> bool {
        self.moves.iter().any(|m| m == move_id)
    }
}

/// Top-level shape of `creatures.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatureFile {
    /// All creature definitions in file order.
    pub creatures: Vec<CreatureData>,
}
