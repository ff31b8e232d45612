//! Catalog metadata and bundle handling.
//!
//! A catalog is the top-level container that ties the director dataset to
//! its identity and bookkeeping metadata. On disk a catalog bundle is a
//! directory with a `meta/catalog.json` file; reports derived from it land
//! under `reports/`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::director::Director;

/// Top-level catalog file (`catalog.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Schema version.
    pub version: String,

    /// Human-readable catalog name.
    pub name: String,

    /// Unique catalog identifier (UUID).
    pub id: String,

    /// Creation timestamp (ISO 8601).
    pub created_at: String,

    /// Last modified timestamp (ISO 8601).
    pub modified_at: String,

    /// The director dataset, in catalog order.
    #[serde(default)]
    pub directors: Vec<Director>,
}

impl Catalog {
    /// Create a new empty catalog with defaults.
    pub fn new(name: impl Into<String>) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            version: "1.0".to_string(),
            name: name.into(),
            id: uuid_v4(),
            created_at: now.clone(),
            modified_at: now,
            directors: vec![],
        }
    }

    /// Number of directors in the catalog.
    pub fn director_count(&self) -> usize {
        self.directors.len()
    }

    /// Total number of movies across all directors.
    pub fn movie_count(&self) -> usize {
        self.directors.iter().map(|d| d.movies.len()).sum()
    }
}

/// The complete in-memory representation of a loaded catalog bundle.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    /// Filesystem path to the bundle directory.
    pub root: PathBuf,

    /// Catalog metadata and dataset.
    pub catalog: Catalog,
}

impl LoadedCatalog {
    /// Load a catalog bundle from a directory.
    pub fn load(root: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let root = root.as_ref().to_path_buf();

        let catalog_path = root.join("meta").join("catalog.json");
        let catalog_json =
            std::fs::read_to_string(&catalog_path).map_err(|e| CatalogError::IoError {
                path: catalog_path.clone(),
                source: e,
            })?;

        let catalog: Catalog =
            serde_json::from_str(&catalog_json).map_err(|e| CatalogError::ParseError {
                path: catalog_path,
                source: e,
            })?;

        Ok(Self { root, catalog })
    }

    /// Save the catalog to disk.
    pub fn save(&self) -> Result<(), CatalogError> {
        let meta_dir = self.root.join("meta");
        std::fs::create_dir_all(&meta_dir).map_err(|e| CatalogError::IoError {
            path: meta_dir.clone(),
            source: e,
        })?;

        let catalog_path = meta_dir.join("catalog.json");
        let catalog_json =
            serde_json::to_string_pretty(&self.catalog).map_err(|e| CatalogError::ParseError {
                path: catalog_path.clone(),
                source: e,
            })?;
        std::fs::write(&catalog_path, catalog_json).map_err(|e| CatalogError::IoError {
            path: catalog_path,
            source: e,
        })?;

        Ok(())
    }

    /// Create a new catalog bundle on disk with the standard directory
    /// structure.
    pub fn create(root: impl AsRef<Path>, name: impl Into<String>) -> Result<Self, CatalogError> {
        let root = root.as_ref().to_path_buf();

        for subdir in &["meta", "reports"] {
            std::fs::create_dir_all(root.join(subdir)).map_err(|e| CatalogError::IoError {
                path: root.join(subdir),
                source: e,
            })?;
        }

        let loaded = Self {
            root,
            catalog: Catalog::new(name),
        };
        loaded.save()?;
        Ok(loaded)
    }

    /// Validate the dataset, returning human-readable problems.
    ///
    /// An empty result means the catalog is safe to feed to the reporting
    /// pipeline. Problems are reported, not fixed.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = vec![];

        for (i, director) in self.catalog.directors.iter().enumerate() {
            if director.name.trim().is_empty() {
                problems.push(format!("Director #{i} has an empty name"));
            }
            if director.movies.is_empty() {
                problems.push(format!(
                    "Director '{}' has no movies",
                    display_name(&director.name, i)
                ));
            }
            for (k, movie) in director.movies.iter().enumerate() {
                if movie.title.trim().is_empty() {
                    problems.push(format!(
                        "Director '{}' movie #{k} has an empty title",
                        display_name(&director.name, i)
                    ));
                }
                if movie.studio.trim().is_empty() {
                    problems.push(format!(
                        "Movie '{}' has no studio; it will be grouped as unknown",
                        movie.title
                    ));
                }
            }
        }

        problems
    }
}

fn display_name(name: &str, index: usize) -> String {
    if name.trim().is_empty() {
        format!("#{index}")
    } else {
        name.to_string()
    }
}

/// Errors that can occur when working with catalog bundles.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid catalog: {message}")]
    ValidationError { message: String },
}

/// Generate a simple UUID v4 without external dependency.
fn uuid_v4() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!(
        "{:08x}-{:04x}-4{:03x}-{:04x}-{:012x}",
        (seed & 0xFFFFFFFF) as u32,
        ((seed >> 32) & 0xFFFF) as u16,
        ((seed >> 48) & 0x0FFF) as u16,
        (((seed >> 60) & 0x3F) | 0x80) as u16 | (((seed >> 66) & 0x3FF) as u16) << 6,
        (seed >> 76) & 0xFFFFFFFFFFFF,
    )
}
