//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod editor;
mod logging;
mod repl;
mod save;
mod storage;
mod upload;

pub use editor::FileEditorConfig;
pub use logging::FileLoggingConfig;
pub use repl::FileReplConfig;
pub use save::FileSaveConfig;
pub use storage::FileStorageConfig;
pub use upload::FileUploadConfig;

use composer_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Key/value store settings
    pub storage: FileStorageConfig,
    /// Image upload settings
    pub upload: FileUploadConfig,
    /// Editor surface settings
    pub editor: FileEditorConfig,
    /// Save sink settings
    pub save: FileSaveConfig,
    /// Log output settings
    pub logging: FileLoggingConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration, returning all detected issues.
    ///
    /// Checks:
    /// 1. Upload endpoint is a non-empty http(s) URL
    /// 2. Upload timeout is non-zero
    /// 3. Editor lists and height, when overridden, are non-empty/non-zero
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Endpoint
        let endpoint = self.upload.endpoint.trim();
        if endpoint.is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::EmptyValue {
                    field: "upload.endpoint".to_string(),
                },
                message: "upload.endpoint must not be empty".to_string(),
            });
        } else if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidValue {
                    field: "upload.endpoint".to_string(),
                    value: endpoint.to_string(),
                },
                message: format!("upload.endpoint '{}' is not an http(s) URL", endpoint),
            });
        }

        // 2. Timeout
        if self.upload.timeout_secs == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::InvalidValue {
                    field: "upload.timeout_secs".to_string(),
                    value: "0".to_string(),
                },
                message: "upload.timeout_secs is 0, every upload will time out".to_string(),
            });
        }

        // 3. Editor overrides
        for (field, empty) in [
            (
                "editor.fonts",
                self.editor.fonts.as_ref().is_some_and(Vec::is_empty),
            ),
            (
                "editor.font_sizes",
                self.editor.font_sizes.as_ref().is_some_and(Vec::is_empty),
            ),
            (
                "editor.button_list",
                self.editor
                    .button_list
                    .as_ref()
                    .is_some_and(|groups| groups.iter().all(Vec::is_empty)),
            ),
        ] {
            if empty {
                issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::EmptyValue {
                        field: field.to_string(),
                    },
                    message: format!("{} is empty", field),
                });
            }
        }

        if self.editor.height == Some(0) {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::InvalidValue {
                    field: "editor.height".to_string(),
                    value: "0".to_string(),
                },
                message: "editor.height is 0".to_string(),
            });
        }

        issues
    }

    /// Report a missing upload credential, if any.
    ///
    /// Separate from [`validate`](Self::validate) because it depends on the
    /// process environment.
    pub fn credential_issue(&self) -> Option<ConfigIssue> {
        if self.upload.resolve_api_key().is_some() {
            return None;
        }
        Some(ConfigIssue {
            severity: Severity::Warning,
            code: ConfigIssueCode::MissingCredential {
                env: self.upload.api_key_env.clone(),
            },
            message: format!(
                "no image API key configured (set upload.image_api_key or ${}); image uploads will fail",
                self.upload.api_key_env
            ),
        })
    }
}
