//! Configuration issues.
//!
//! Loading a configuration never fails on questionable values; instead the
//! loader reports structured issues with a severity, and the binary decides
//! whether to warn or abort.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A field that must not be empty is empty.
    EmptyValue { field: String },
    /// A field holds a value outside its accepted range or format.
    InvalidValue { field: String, value: String },
    /// No API key is available, so image uploads will fail.
    MissingCredential { env: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", level, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_severity() {
        let issue = ConfigIssue {
            severity: Severity::Warning,
            code: ConfigIssueCode::EmptyValue {
                field: "editor.fonts".to_string(),
            },
            message: "editor.fonts is empty".to_string(),
        };
        assert_eq!(issue.to_string(), "warning: editor.fonts is empty");
        assert!(!issue.is_error());
    }
}
