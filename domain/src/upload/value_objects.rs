//! Image upload value objects

use serde::{Deserialize, Serialize};

/// A file the user picked for insertion into the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// Original file name, used as the inserted image's alt text
    pub name: String,
    /// MIME type, when known
    pub content_type: Option<String>,
    /// Raw file bytes
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Guess a MIME type from the file extension.
    pub fn guess_content_type(name: &str) -> Option<&'static str> {
        let ext = name.rsplit_once('.')?.1.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some("image/png"),
            "jpg" | "jpeg" => Some("image/jpeg"),
            "gif" => Some("image/gif"),
            "webp" => Some("image/webp"),
            "bmp" => Some("image/bmp"),
            "svg" => Some("image/svg+xml"),
            _ => None,
        }
    }
}

/// Result of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    /// Public URL returned by the image host
    pub url: String,
    /// Name of the file that was uploaded
    pub file_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_content_type() {
        assert_eq!(ImageFile::guess_content_type("a.PNG"), Some("image/png"));
        assert_eq!(ImageFile::guess_content_type("photo.jpeg"), Some("image/jpeg"));
        assert_eq!(ImageFile::guess_content_type("notes.txt"), None);
        assert_eq!(ImageFile::guess_content_type("no_extension"), None);
    }

    #[test]
    fn test_builder() {
        let file = ImageFile::new("cat.gif", vec![1, 2, 3]).with_content_type("image/gif");
        assert_eq!(file.len(), 3);
        assert!(!file.is_empty());
        assert_eq!(file.content_type.as_deref(), Some("image/gif"));
    }
}
