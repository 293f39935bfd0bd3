//! Image host port.
//!
//! Uploads a single image to a remote hosting service and returns its public
//! URL. Adapters make exactly one request per call: no retry, no caching.

use async_trait::async_trait;
use composer_domain::{ImageFile, UploadedImage};
use thiserror::Error;

/// Errors that can occur while uploading an image.
///
/// Callers treat every variant the same way ("upload failed"); the variants
/// exist for diagnostics.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("No image API key configured")]
    MissingApiKey,

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl UploadError {
    /// Check if the failure happened before any response was received
    pub fn is_transport(&self) -> bool {
        matches!(self, UploadError::Network(_))
    }
}

/// Port for uploading images to a remote host.
#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Upload a file and return where it can be fetched from.
    async fn upload(&self, file: &ImageFile) -> Result<UploadedImage, UploadError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let error = UploadError::Status {
            status: 500,
            reason: "Internal Server Error".to_string(),
        };
        assert_eq!(error.to_string(), "HTTP error: 500 Internal Server Error");
        assert!(!error.is_transport());
        assert!(UploadError::Network("refused".to_string()).is_transport());
    }
}
