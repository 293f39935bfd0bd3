//! Storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name of the default key/value store.
const DEFAULT_STORE_FILE: &str = "local-storage.json";

/// Raw storage configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Path of the JSON key/value store (default: `<data_dir>/blog-composer/local-storage.json`)
    pub path: Option<PathBuf>,
}

impl FileStorageConfig {
    /// Resolve the store path, falling back to the platform data directory.
    pub fn resolve_path(&self) -> Option<PathBuf> {
        self.path.clone().or_else(|| {
            dirs::data_dir().map(|d| d.join("blog-composer").join(DEFAULT_STORE_FILE))
        })
    }
}
