//! Content directory validation.
//!
//! Runs the integrity checks from [`hull_core::checks`] against the JSON
//! files in a content directory. Documents are reloaded by each check so the
//! checks stay independent of one another.

use std::path::{Path, PathBuf};

use hull_core::checks;
use hull_core::data::{CreatureData, CreatureFile, EncounterFile, ItemFile, MoveFile};
use hull_core::error::InvariantViolation;
use hull_core::save;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::loader::{load_json_file, ContentDir, DataLoadError};

/// File holding creature definitions.
pub const CREATURES_FILE: &str = "creatures.json";
/// File holding move definitions.
pub const MOVES_FILE: &str = "moves.json";
/// File holding item definitions.
pub const ITEMS_FILE: &str = "items.json";
/// File holding per-scene encounter tables.
pub const ENCOUNTERS_FILE: &str = "encounters.json";

/// Line printed when every check passes.
pub const SUCCESS_MESSAGE: &str = "All validation checks passed.";

/// Errors that stop a validation run.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A content file could not be loaded.
    #[error(transparent)]
    Load(#[from] DataLoadError),

    /// A content invariant does not hold.
    #[error("{path}: {violation}")]
    Invariant {
        /// File or directory the rule was checked against.
        path: String,
        /// The violated rule.
        #[source]
        violation: InvariantViolation,
    },
}

impl ValidationError {
    /// The violated rule, if this is not a load failure.
    #[must_use]
    pub fn violation(&self) -> Option<&InvariantViolation> {
        match self {
            Self::Invariant { violation, .. } => Some(violation),
            Self::Load(_) => None,
        }
    }
}

/// Result type for validation runs.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Checks a content directory against the content rules.
#[derive(Debug, Clone)]
pub struct ContentValidator {
    content: ContentDir,
}

impl ContentValidator {
    /// Create a validator for the given content directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            content: ContentDir::new(root),
        }
    }

    /// Directory being validated.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.content.root()
    }

    /// Load one named document from the content directory.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Load`] if the file is missing or malformed.
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> ValidationResult<T> {
        Ok(self.content.load(name)?)
    }

    fn load_creatures(&self) -> ValidationResult<Vec<CreatureData>> {
        Ok(self.load::<CreatureFile>(CREATURES_FILE)?.creatures)
    }

    /// Attach the file a rule was checked against.
    fn violation_in(&self, name: &str, violation: InvariantViolation) -> ValidationError {
        ValidationError::Invariant {
            path: self.content.path_of(name).display().to_string(),
            violation,
        }
    }

    /// Check creature count, move references and required items.
    ///
    /// # Errors
    ///
    /// Returns the first load failure or violated rule.
    pub fn check_creatures_moves_items(&self) -> ValidationResult<()> {
        let creatures = self.load_creatures()?;
        let moves = self.load::<MoveFile>(MOVES_FILE)?.moves;
        let items = self.load::<ItemFile>(ITEMS_FILE)?.items;

        checks::check_creatures_moves_items(&creatures, &moves, &items).map_err(|v| {
            let file = match v {
                InvariantViolation::MissingRequiredItems(_) => ITEMS_FILE,
                _ => CREATURES_FILE,
            };
            self.violation_in(file, v)
        })?;

        tracing::info!(
            "Creatures, moves and items OK ({} creatures, {} moves, {} items)",
            creatures.len(),
            moves.len(),
            items.len()
        );
        Ok(())
    }

    /// Check creature references, level ranges and weights of every scene.
    ///
    /// # Errors
    ///
    /// Returns the first load failure or violated rule.
    pub fn check_encounter_tables(&self) -> ValidationResult<()> {
        let creatures = self.load_creatures()?;
        let tables = self.load::<EncounterFile>(ENCOUNTERS_FILE)?.tables;

        checks::check_encounter_tables(&creatures, &tables)
            .map_err(|v| self.violation_in(ENCOUNTERS_FILE, v))?;

        tracing::info!("Encounter tables OK ({} scenes)", tables.len());
        Ok(())
    }

    /// Check evolution lines and the save payload key contract.
    ///
    /// The save part only inspects the compiled-in key list; use
    /// [`check_save_file`] to validate a real payload.
    ///
    /// # Errors
    ///
    /// Returns the first load failure or violated rule.
    pub fn check_evolution_lines_and_save_schema_shape(&self) -> ValidationResult<()> {
        let creatures = self.load_creatures()?;

        let lines = checks::check_evolution_lines(&creatures)
            .map_err(|v| self.violation_in(CREATURES_FILE, v))?;
        checks::check_save_schema_shape().map_err(|v| ValidationError::Invariant {
            path: "save schema".to_string(),
            violation: v,
        })?;

        tracing::info!("Evolution lines OK ({lines} multi-stage lines)");
        Ok(())
    }

    /// Run every check in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first load failure or violated rule.
    pub fn run_all(&self) -> ValidationResult<()> {
        tracing::info!("Validating content in {}", self.root().display());
        self.check_creatures_moves_items()?;
        self.check_encounter_tables()?;
        self.check_evolution_lines_and_save_schema_shape()?;
        Ok(())
    }
}

/// Validate all content files in a directory.
///
/// # Errors
///
/// Returns the first load failure or violated rule.
pub fn validate_data_directory(path: &Path) -> ValidationResult<()> {
    ContentValidator::new(path).run_all()
}

/// Migrate and validate a save payload file.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded, was written by a newer
/// version, or lacks required keys after migration.
pub fn check_save_file(path: &Path) -> ValidationResult<()> {
    let payload: serde_json::Value = load_json_file(path)?;
    let version = save::save_version(&payload);
    let migrated = save::migrate_save(&payload);

    save::validate_save(&migrated).map_err(|v| ValidationError::Invariant {
        path: path.display().to_string(),
        violation: v,
    })?;

    tracing::info!(
        "Save file OK (version {version}, current {})",
        save::SAVE_VERSION
    );
    Ok(())
}
