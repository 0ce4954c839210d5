//! JSON content loading.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur while loading a content file.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// Failed to open or read the file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        /// Path to the file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// File is not valid JSON or does not have the expected shape.
    #[error("Failed to parse JSON file '{path}': {source}")]
    ParseError {
        /// Path to the file.
        path: String,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for data loading operations.
pub type DataLoadResult<T> = Result<T, DataLoadError>;

/// Load and deserialize a JSON file.
///
/// The file handle is dropped before this returns, whether or not parsing
/// succeeds.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed.
pub fn load_json_file<T: DeserializeOwned>(path: &Path) -> DataLoadResult<T> {
    let path_str = path.display().to_string();

    let file = File::open(path).map_err(|e| DataLoadError::IoError {
        path: path_str.clone(),
        source: e,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        if e.is_io() {
            DataLoadError::IoError {
                path: path_str,
                source: e.into(),
            }
        } else {
            DataLoadError::ParseError {
                path: path_str,
                source: e,
            }
        }
    })
}

/// A directory of JSON content files.
#[derive(Debug, Clone)]
pub struct ContentDir {
    root: PathBuf,
}

impl ContentDir {
    /// Create a content directory rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory that holds the content files.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of a named content file.
    #[must_use]
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Load a named content file, e.g. `creatures.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed.
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> DataLoadResult<T> {
        let data = load_json_file(&self.path_of(name))?;
        tracing::debug!("Loaded {} from {}", name, self.root.display());
        Ok(data)
    }
}
