//! Error types for content validation.

use thiserror::Error;

/// Result type alias using [`InvariantViolation`].
pub type Result<T> = std::result::Result<T, InvariantViolation>;

/// A content invariant that does not hold.
///
/// Each variant names the offending creature, scene or key set so the
/// message alone is enough to find the bad record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Wrong number of creature records.
    #[error("Expected {expected} creatures, got {actual}")]
    CreatureCount {
        /// Required creature count.
        expected: usize,
        /// Creatures found.
        actual: usize,
    },

    /// A creature has an empty move list.
    #[error("Creature has no moves: {0}")]
    CreatureWithoutMoves(String),

    /// A creature references a move that does not exist.
    #[error("Missing move id '{move_id}' used by {creature}")]
    UnknownMove {
        /// Creature holding the reference.
        creature: String,
        /// Unresolved move ID.
        move_id: String,
    },

    /// Required item IDs are absent from the item set.
    #[error("Missing required items: {}", format_id_list(.0))]
    MissingRequiredItems(Vec<String>),

    /// An encounter entry references a creature that does not exist.
    #[error("Encounter creature missing: {scene}/{creature}")]
    UnknownEncounterCreature {
        /// Scene holding the entry.
        scene: String,
        /// Unresolved creature ID.
        creature: String,
    },

    /// An encounter entry has `min_level > max_level`.
    #[error(
        "Encounter level range invalid: {scene}/{creature} \
         (min_level {min_level} > max_level {max_level})"
    )]
    InvalidLevelRange {
        /// Scene holding the entry.
        scene: String,
        /// Creature of the entry.
        creature: String,
        /// Lower bound as written.
        min_level: i32,
        /// Upper bound as written.
        max_level: i32,
    },

    /// An encounter weight could not be read as an integer.
    #[error("Encounter weight is not an integer: {scene}/{creature} ({weight})")]
    InvalidWeight {
        /// Scene holding the entry.
        scene: String,
        /// Creature of the entry.
        creature: String,
        /// Weight as written.
        weight: String,
    },

    /// A scene's weights do not sum to a positive total.
    #[error("Encounter weights total <= 0 for {scene}")]
    NonPositiveWeightTotal {
        /// Offending scene.
        scene: String,
        /// Computed total.
        total: i64,
    },

    /// Too few creatures start a three-stage evolution line.
    #[error("Expected at least {expected} multi-stage lines, got {actual}")]
    TooFewEvolutionLines {
        /// Required number of lines.
        expected: usize,
        /// Lines found.
        actual: usize,
    },

    /// The save schema key set has the wrong size.
    #[error("Expected {expected} save schema keys, got {actual}")]
    SaveSchemaShape {
        /// Required key count.
        expected: usize,
        /// Keys declared.
        actual: usize,
    },

    /// A save payload lacks required top-level keys.
    #[error("Save payload missing required keys: {}", format_id_list(.0))]
    MissingSaveKeys(Vec<String>),

    /// A save payload was written by a newer game version.
    #[error("Unsupported save version {found} (newest known is {supported})")]
    UnsupportedSaveVersion {
        /// Version in the payload, as written.
        found: String,
        /// Newest version this build understands.
        supported: i32,
    },
}

/// Render IDs as `['a', 'b']`.
fn format_id_list(ids: &[String]) -> String {
    let quoted: Vec<String> = ids.iter().map(|id| format!("'{id}'")).collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creature_count_message() {
        let err = InvariantViolation::CreatureCount {
            expected: 15,
            actual: 14,
        };
        assert_eq!(err.to_string(), "Expected 15 creatures, got 14");
    }

    #[test]
    fn test_missing_items_message_lists_ids() {
        let err = InvariantViolation::MissingRequiredItems(vec![
            "dock_rope".to_string(),
            "founders_key".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Missing required items: ['dock_rope', 'founders_key']"
        );
    }

    #[test]
    fn test_level_range_message_names_scene_and_entry() {
        let err = InvariantViolation::InvalidLevelRange {
            scene: "Marina_East".to_string(),
            creature: "gull".to_string(),
            min_level: 10,
            max_level: 5,
        };
        assert_eq!(
            err.to_string(),
            "Encounter level range invalid: Marina_East/gull (min_level 10 > max_level 5)"
        );
    }
}
