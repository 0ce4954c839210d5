//! Item data structures.

use serde::{Deserialize, Serialize};

/// Data-driven item definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemData {
    /// Unique string identifier.
    pub id: String,

    /// Display name.
    #[serde(default)]
    pub name: String,
}

/// Top-level shape of `items.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemFile {
    /// All item definitions in file order.
    pub items: Vec<ItemData>,
}
