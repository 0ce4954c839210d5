//! Data structures for game content.
//!
//! Pure data types deserialized from the JSON content files. This module
//! contains no IO; loading is handled by `hull_tools`.

mod creature_data;
mod encounter_data;
mod item_data;
mod move_data;

pub use creature_data::{CreatureData, CreatureFile};
pub use encounter_data::{EncounterEntry, EncounterFile, EncounterTables, SceneTable, Weight};
pub use item_data::{ItemData, ItemFile};
pub use move_data::{MoveData, MoveFile};
