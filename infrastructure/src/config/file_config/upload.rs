//! Upload configuration from TOML (`[upload]` section)

use serde::{Deserialize, Serialize};

/// Raw image upload configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileUploadConfig {
    /// Upload endpoint (imgbb-compatible)
    pub endpoint: String,
    /// Direct API key. Prefer the env var.
    pub image_api_key: Option<String>,
    /// Environment variable name for the API key (default: "IMGBB_API_KEY").
    pub api_key_env: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FileUploadConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.imgbb.com/1/upload".to_string(),
            image_api_key: None,
            api_key_env: "IMGBB_API_KEY".to_string(),
            timeout_secs: 30,
        }
    }
}

impl FileUploadConfig {
    /// Resolve the API key: the configured value first, then the environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.image_api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                std::env::var(&self.api_key_env)
                    .ok()
                    .filter(|k| !k.trim().is_empty())
            })
    }
}
