//! Cross-reference checks over loaded content.
//!
//! Every check is fail-fast: the first violated rule is returned and the
//! remaining records are not inspected. Iteration follows file order, so the
//! reported violation is the first one a reader would find in the file.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::data::{CreatureData, EncounterEntry, EncounterTables, ItemData, MoveData};
use crate::error::{InvariantViolation, Result};
use crate::save::REQUIRED_SAVE_KEYS;

/// Number of creatures the content set must define.
pub const EXPECTED_CREATURE_COUNT: usize = 15;

/// Item IDs that quests and shops reference directly.
pub const REQUIRED_ITEMS: [&str; 11] = [
    "chip_spice",
    "pattie_bun",
    "fog_lantern",
    "dock_rope",
    "fair_token",
    "marina_pass",
    "founders_key",
    "silt_vial",
    "traffic_cone",
    "hull_fc_scarf",
    "hull_kr_badge",
];

/// Minimum number of creatures that start a three-stage evolution line.
pub const MIN_EVOLUTION_LINES: usize = 3;

/// Number of top-level keys in the save payload contract.
pub const EXPECTED_SAVE_KEY_COUNT: usize = 8;

/// Check creature count, creature move references and required items.
///
/// # Errors
///
/// Returns the first violation found, in this order: creature count, a
/// creature with no moves, an unknown move, missing required items.
pub fn check_creatures_moves_items(
    creatures: &[CreatureData],
    moves: &[MoveData],
    items: &[ItemData],
) -> Result<()> {
    if creatures.len() != EXPECTED_CREATURE_COUNT {
        return Err(InvariantViolation::CreatureCount {
            expected: EXPECTED_CREATURE_COUNT,
            actual: creatures.len(),
        });
    }

    let move_ids: HashSet<&str> = moves.iter().map(|m| m.id.as_str()).collect();
    for creature in creatures {
        if creature.moves.is_empty() {
            return Err(InvariantViolation::CreatureWithoutMoves(creature.id.clone()));
        }
        if let Some(unknown) = creature
            .moves
            .iter()
            .find(|m| !move_ids.contains(m.as_str()))
        {
            return Err(InvariantViolation::UnknownMove {
                creature: creature.id.clone(),
                move_id: unknown.clone(),
            });
        }
    }

    let missing = missing_required_items(items);
    if !missing.is_empty() {
        return Err(InvariantViolation::MissingRequiredItems(missing));
    }

    Ok(())
}

/// Required item IDs absent from `items`, sorted.
#[must_use]
pub fn missing_required_items(items: &[ItemData]) -> Vec<String> {
    let item_ids: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
    let missing: BTreeSet<&str> = REQUIRED_ITEMS
        .iter()
        .copied()
        .filter(|id| !item_ids.contains(id))
        .collect();
    missing.into_iter().map(str::to_string).collect()
}

/// Check every encounter entry and every scene's weight total.
///
/// # Errors
///
/// Returns the first entry that references an unknown creature, has an
/// inverted level range or an unreadable weight. If a scene's entries all
/// pass but its weights sum to zero or less, that scene is reported.
pub fn check_encounter_tables(creatures: &[CreatureData], tables: &EncounterTables) -> Result<()> {
    let creature_ids: HashSet<&str> = creatures.iter().map(|c| c.id.as_str()).collect();

    for table in tables.iter() {
        let total = scene_weight_total(&table.scene, &table.entries, &creature_ids)?;
        tracing::debug!("Scene {} weight total {}", table.scene, total);
        if total <= 0 {
            return Err(InvariantViolation::NonPositiveWeightTotal {
                scene: table.scene.clone(),
                total,
            });
        }
    }

    Ok(())
}

/// Validate a scene's entries and sum their weights.
fn scene_weight_total(
    scene: &str,
    entries: &[EncounterEntry],
    creature_ids: &HashSet<&str>,
) -> Result<i64> {
    let mut total: i64 = 0;
    for entry in entries {
        if !creature_ids.contains(entry.creature.as_str()) {
            return Err(InvariantViolation::UnknownEncounterCreature {
                scene: scene.to_string(),
                creature: entry.creature.clone(),
            });
        }
        if !entry.has_valid_level_range() {
            return Err(InvariantViolation::InvalidLevelRange {
                scene: scene.to_string(),
                creature: entry.creature.clone(),
                min_level: entry.min_level,
                max_level: entry.max_level,
            });
        }
        let weight = entry
            .weight
            .to_int()
            .ok_or_else(|| InvariantViolation::InvalidWeight {
                scene: scene.to_string(),
                creature: entry.creature.clone(),
                weight: entry.weight.to_string(),
            })?;
        total = total.saturating_add(weight);
    }
    Ok(total)
}

/// Count creatures whose next stage evolves again.
///
/// A line `a -> b -> c` counts once (for `a`); `a -> b -> c -> d` counts
/// twice (for `a` and `b`). Evolution targets that do not resolve are
/// ignored here.
#[must_use]
pub fn count_evolution_lines(creatures: &[CreatureData]) -> usize {
    let by_id: HashMap<&str, &CreatureData> =
        creatures.iter().map(|c| (c.id.as_str(), c)).collect();

    creatures
        .iter()
        .filter_map(CreatureData::next_stage)
        .filter(|next| by_id.get(next).is_some_and(|c| c.evolves()))
        .count()
}

/// Check that enough multi-stage evolution lines exist.
///
/// # Errors
///
/// Returns [`InvariantViolation::TooFewEvolutionLines`] when fewer than
/// [`MIN_EVOLUTION_LINES`] are found.
pub fn check_evolution_lines(creatures: &[CreatureData]) -> Result<usize> {
    let lines = count_evolution_lines(creatures);
    if lines < MIN_EVOLUTION_LINES {
        return Err(InvariantViolation::TooFewEvolutionLines {
            expected: MIN_EVOLUTION_LINES,
            actual: lines,
        });
    }
    Ok(lines)
}

/// Check that the save payload contract declares eight distinct keys.
///
/// This only inspects [`REQUIRED_SAVE_KEYS`]; it cannot fail unless that
/// constant is edited. Real payloads are checked by
/// [`crate::save::validate_save`].
///
/// # Errors
///
/// Returns [`InvariantViolation::SaveSchemaShape`] if the key set size differs.
pub fn check_save_schema_shape() -> Result<()> {
    let keys: BTreeSet<&str> = REQUIRED_SAVE_KEYS.iter().copied().collect();
    if keys.len() != EXPECTED_SAVE_KEY_COUNT {
        return Err(InvariantViolation::SaveSchemaShape {
            expected: EXPECTED_SAVE_KEY_COUNT,
            actual: keys.len(),
        });
    }
    Ok(())
}
