//! Test fixtures and helpers.
//!
//! A complete, valid content set that tests break one rule at a time.

use std::io;
use std::path::Path;

use hull_core::checks::REQUIRED_ITEMS;
use hull_core::data::{
    CreatureData, CreatureFile, EncounterEntry, EncounterFile, EncounterTables, ItemData,
    ItemFile, MoveData, MoveFile, Weight,
};
use serde::Serialize;
use tempfile::TempDir;

/// Creature rows: id, moves, evolves_to.
///
/// Three three-stage lines, two two-stage lines and two single forms.
const CREATURES: [(&str, &[&str], Option<&str>); 15] = [
    ("sprat", &["splash_jab", "tackle"], Some("sprawler")),
    ("sprawler", &["splash_jab", "tide_pull"], Some("leviathrawl")),
    ("leviathrawl", &["tide_pull", "anchor_drop"], None),
    ("gullet", &["peck"], Some("gullwing")),
    ("gullwing", &["peck", "gust"], Some("stormgull")),
    ("stormgull", &["gust", "anchor_drop"], None),
    ("chipling", &["vinegar_spray", "tackle"], Some("chipjack")),
    ("chipjack", &["vinegar_spray", "batter_slam"], Some("fryking")),
    ("fryking", &["batter_slam"], None),
    ("fogwisp", &["fog_veil"], Some("fogwraith")),
    ("fogwraith", &["fog_veil", "haunt"], None),
    ("siltmole", &["silt_toss", "tackle"], Some("siltdigger")),
    ("siltdigger", &["silt_toss", "burrow"], None),
    ("bollard", &["anchor_drop"], None),
    ("conecat", &["cone_bonk", "tackle"], None),
];

const MOVES: [&str; 13] = [
    "tackle",
    "splash_jab",
    "tide_pull",
    "peck",
    "gust",
    "vinegar_spray",
    "batter_slam",
    "fog_veil",
    "haunt",
    "silt_toss",
    "burrow",
    "anchor_drop",
    "cone_bonk",
];

/// Scene rows: scene, [(creature, min_level, max_level, weight)].
const ENCOUNTERS: [(&str, &[(&str, i32, i32, i64)]); 4] = [
    (
        "StartTown_West",
        &[("sprat", 2, 4, 40), ("gullet", 2, 3, 40), ("conecat", 3, 4, 20)],
    ),
    (
        "Marina_East",
        &[("gullet", 4, 6, 50), ("sprawler", 8, 10, 10), ("bollard", 5, 7, 40)],
    ),
    ("Fog_Lane", &[("fogwisp", 6, 9, 70), ("chipling", 5, 8, 30)]),
    ("Silt_Flats", &[("siltmole", 7, 10, 100)]),
];

/// A full content set, one field per content file.
#[derive(Debug, Clone)]
pub struct ContentFixture {
    /// Contents of `creatures.json`.
    pub creatures: CreatureFile,
    /// Contents of `moves.json`.
    pub moves: MoveFile,
    /// Contents of `items.json`.
    pub items: ItemFile,
    /// Contents of `encounters.json`.
    pub encounters: EncounterFile,
}

impl ContentFixture {
    /// A content set that passes every check.
    #[must_use]
    pub fn valid() -> Self {
        let creatures = CREATURES
            .iter()
            .map(|(id, moves, evolves_to)| CreatureData {
                id: (*id).to_string(),
                name: title_case(id),
                types: vec![],
                base_hp: Some(20),
                moves: moves.iter().map(|m| (*m).to_string()).collect(),
                evolves_to: evolves_to.map(str::to_string),
            })
            .collect();

        let moves = MOVES
            .iter()
            .map(|id| MoveData {
                id: (*id).to_string(),
                name: title_case(id),
                move_type: None,
                power: Some(10),
            })
            .collect();

        let items = REQUIRED_ITEMS
            .iter()
            .chain(["harbour_tonic"].iter())
            .map(|id| ItemData {
                id: (*id).to_string(),
                name: title_case(id),
            })
            .collect();

        let mut tables = EncounterTables::new();
        for (scene, rows) in ENCOUNTERS {
            let entries = rows
                .iter()
                .map(|(creature, min_level, max_level, weight)| EncounterEntry {
                    creature: (*creature).to_string(),
                    min_level: *min_level,
                    max_level: *max_level,
                    weight: Weight::Int(*weight),
                })
                .collect();
            tables.insert(scene, entries);
        }

        Self {
            creatures: CreatureFile { creatures },
            moves: MoveFile { moves },
            items: ItemFile { items },
            encounters: EncounterFile { tables },
        }
    }

    /// Find a creature by ID.
    pub fn creature_mut(&mut self, id: &str) -> Option<&mut CreatureData> {
        self.creatures.creatures.iter_mut().find(|c| c.id == id)
    }

    /// Remove an item by ID.
    pub fn remove_item(&mut self, id: &str) {
        self.items.items.retain(|i| i.id != id);
    }

    /// Get mutable entries for a scene.
    pub fn scene_mut(&mut self, scene: &str) -> Option<&mut Vec<EncounterEntry>> {
        self.encounters.tables.get_mut(scene)
    }

    /// Write all four content files into `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if any file cannot be written.
    pub fn write_to(&self, dir: &Path) -> io::Result<()> {
        write_json(&dir.join("creatures.json"), &self.creatures)?;
        write_json(&dir.join("moves.json"), &self.moves)?;
        write_json(&dir.join("items.json"), &self.items)?;
        write_json(&dir.join("encounters.json"), &self.encounters)?;
        Ok(())
    }

    /// Write the content set into a fresh temporary directory.
    ///
    /// # Panics
    ///
    /// Panics if the directory or files cannot be created.
    #[must_use]
    pub fn write_temp(&self) -> TempDir {
        let dir = tempfile::tempdir().expect("create temp content dir");
        self.write_to(dir.path()).expect("write content fixture");
        dir
    }
}

/// Serialize a value as pretty JSON into `path`.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    std::fs::write(path, text)
}

fn title_case(id: &str) -> String {
    id.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
