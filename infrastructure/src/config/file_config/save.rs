//! Save configuration from TOML (`[save]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw save sink configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSaveConfig {
    /// Log saved drafts through the diagnostic log
    pub log: bool,
    /// Append saved drafts to this JSONL file
    pub jsonl_path: Option<PathBuf>,
}

impl Default for FileSaveConfig {
    fn default() -> Self {
        Self {
            log: true,
            jsonl_path: None,
        }
    }
}
