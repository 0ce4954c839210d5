//! Encounter table data structures.
//!
//! Tables are keyed by scene name. Scene order follows the document so that
//! validation reports the first failing scene as it appears in the file.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Spawn weight of an encounter entry.
///
/// Content authors have written weights as integers, floats, numeric
/// strings and booleans, so any JSON value is accepted here and coerced with
/// [`Weight::to_int`]. Values that do not coerce are reported per entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Weight {
    /// Plain integer weight.
    Int(i64),
    /// Float weight, truncated toward zero.
    Float(f64),
    /// String weight, parsed as a base-10 integer.
    Text(String),
    /// Boolean weight, `true` as 1 and `false` as 0.
    Bool(bool),
    /// Any other JSON value. Never coerces.
    Other(serde_json::Value),
}

impl Weight {
    /// Coerce to an integer weight.
    ///
    /// Returns `None` for non-finite floats, strings that are not integers
    /// and null, array or object values.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            Self::Float(_) => None,
            Self::Text(s) => s.trim().parse().ok(),
            Self::Bool(b) => Some(i64::from(*b)),
            Self::Other(_) => None,
        }
    }
}

impl From<i64> for Weight {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Other(v) => write!(f, "{v}"),
        }
    }
}

/// One weighted spawn entry in a scene's encounter table.
///
/// # Example JSON
///
/// ```json
/// { "creature": "sprat", "min_level": 2, "max_level": 4, "weight": 40 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterEntry {
    /// Creature ID that spawns.
    pub creature: String,

    /// Lowest spawn level (inclusive).
    pub min_level: i32,

    /// Highest spawn level (inclusive).
    pub max_level: i32,

    /// Relative spawn weight within the scene.
    pub weight: Weight,
}

impl EncounterEntry {
    /// Check that the level range is not inverted.
    #[must_use]
    pub fn has_valid_level_range(&self) -> bool {
        self.min_level <= self.max_level
    }
}

/// All entries for a single scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneTable {
    /// Scene name, e.g. `StartTown_West`.
    pub scene: String,

    /// Weighted entries in file order.
    pub entries: Vec<EncounterEntry>,
}

/// Encounter tables for every scene, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncounterTables {
    scenes: Vec<SceneTable>,
}

impl EncounterTables {
    /// Create an empty set of tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entries for a scene.
    ///
    /// A replaced scene keeps its original position.
    pub fn insert(&mut self, scene: impl Into<String>, entries: Vec<EncounterEntry>) {
        let scene = scene.into();
        match self.scenes.iter_mut().find(|s| s.scene == scene) {
            Some(existing) => existing.entries = entries,
            None => self.scenes.push(SceneTable { scene, entries }),
        }
    }

    /// Get the entries for a scene.
    #[must_use]
    pub fn get(&self, scene: &str) -> Option<&[EncounterEntry]> {
        self.scenes
            .iter()
            .find(|s| s.scene == scene)
            .map(|s| s.entries.as_slice())
    }

    /// Get mutable entries for a scene.
    pub fn get_mut(&mut self, scene: &str) -> Option<&mut Vec<EncounterEntry>> {
        self.scenes
            .iter_mut()
            .find(|s| s.scene == scene)
            .map(|s| &mut s.entries)
    }

    /// Iterate scenes in document order.
    pub fn iter(&self) -> impl Iterator<Item = &SceneTable> {
        self.scenes.iter()
    }

    /// Number of scenes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Check if there are no scenes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

impl Serialize for EncounterTables {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.scenes.len()))?;
        for table in &self.scenes {
            map.serialize_entry(&table.scene, &table.entries)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for EncounterTables {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TablesVisitor;

        impl<'de> Visitor<'de> for TablesVisitor {
            type Value = EncounterTables;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of scene names to encounter entry lists")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut tables = EncounterTables::new();
                while let Some((scene, entries)) =
                    access.next_entry::<String, Vec<EncounterEntry>>()?
                {
                    tables.insert(scene, entries);
                }
                Ok(tables)
            }
        }

        deserializer.deserialize_map(TablesVisitor)
    }
}

/// Top-level shape of `encounters.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncounterFile {
    /// Per-scene encounter tables.
    pub tables: EncounterTables,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_weight_coercion() {
        assert_eq!(Weight::Int(7).to_int(), Some(7));
        assert_eq!(Weight::Float(2.9).to_int(), Some(2));
        assert_eq!(Weight::Float(-0.5).to_int(), Some(0));
        assert_eq!(Weight::Float(f64::NAN).to_int(), None);
        assert_eq!(Weight::Text(" 12 ".to_string()).to_int(), Some(12));
        assert_eq!(Weight::Text("lots".to_string()).to_int(), None);
        assert_eq!(Weight::Bool(true).to_int(), Some(1));
        assert_eq!(Weight::Bool(false).to_int(), Some(0));
        assert_eq!(Weight::Other(serde_json::Value::Null).to_int(), None);
    }

    #[test]
    fn test_weight_deserializes_mixed_forms() {
        let weights: Vec<Weight> = serde_json::from_str(r#"[5, 1.5, "3"]"#).unwrap();
        assert_eq!(weights[0], Weight::Int(5));
        assert_eq!(weights[1], Weight::Float(1.5));
        assert_eq!(weights[2], Weight::Text("3".to_string()));

        let weights: Vec<Weight> = serde_json::from_str(r#"[true, null, [1], {}]"#).unwrap();
        assert_eq!(weights[0], Weight::Bool(true));
        assert_eq!(weights[1], Weight::Other(serde_json::Value::Null));
        assert!(weights[2..].iter().all(|w| w.to_int().is_none()));
    }

    #[test]
    fn test_tables_keep_document_order() {
        let json = r#"{
            "Zeta_Pier": [{"creature": "gull", "min_level": 1, "max_level": 2, "weight": 1}],
            "Alpha_Dock": [{"creature": "sprat", "min_level": 3, "max_level": 3, "weight": 2}]
        }"#;
        let tables: EncounterTables = serde_json::from_str(json).unwrap();

        let scenes: Vec<&str> = tables.iter().map(|t| t.scene.as_str()).collect();
        assert_eq!(scenes, ["Zeta_Pier", "Alpha_Dock"]);
        assert_eq!(tables.get("Alpha_Dock").unwrap()[0].creature, "sprat");
        assert!(tables.get("Nowhere").is_none());
    }

    #[test]
    fn test_tables_serialize_back_in_order() {
        let mut tables = EncounterTables::new();
        tables.insert("B", vec![]);
        tables.insert("A", vec![]);
        let json = serde_json::to_string(&tables).unwrap();
        assert_eq!(json, r#"{"B":[],"A":[]}"#);
    }

    #[test]
    fn test_level_range() {
        let mut entry = EncounterEntry {
            creature: "gull".to_string(),
            min_level: 5,
            max_level: 5,
            weight: Weight::Int(1),
        };
        assert!(entry.has_valid_level_range());

        entry.min_level = 6;
        assert!(!entry.has_valid_level_range());
    }

    proptest! {
        #[test]
        fn prop_integer_strings_coerce_like_integers(n in any::<i64>()) {
            prop_assert_eq!(Weight::Text(n.to_string()).to_int(), Some(n));
            prop_assert_eq!(Weight::Int(n).to_int(), Some(n));
        }
    }
}
