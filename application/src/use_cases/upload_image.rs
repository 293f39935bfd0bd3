//! Upload image use case.
//!
//! Bridges the editor surface's "insert image" request to an [`ImageHost`].
//! On success the surface's insertion callback receives the hosted URL and
//! the original file name. On failure the error is logged and the callback
//! is dropped uncalled, leaving the content untouched.
//!
//! Each request is independent: there is no retry, no queue and no way to
//! cancel an upload in flight.

use crate::ports::image_host::ImageHost;
use composer_domain::{ImageFile, UploadedImage};
use std::sync::Arc;
use tracing::{error, info};

/// Callback invoked with `(url, file_name)` once an image is hosted.
pub type InsertImageFn = Box<dyn FnOnce(&str, &str) + Send>;

/// An image insertion request coming from the editor surface.
pub struct UploadRequest {
    /// The file the user picked
    pub file: ImageFile,
    /// Inserts the hosted image into the content
    pub on_resolved: InsertImageFn,
}

impl UploadRequest {
    pub fn new(file: ImageFile, on_resolved: impl FnOnce(&str, &str) + Send + 'static) -> Self {
        Self {
            file,
            on_resolved: Box::new(on_resolved),
        }
    }
}

impl std::fmt::Debug for UploadRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadRequest")
            .field("file", &self.file.name)
            .field("bytes", &self.file.len())
            .finish_non_exhaustive()
    }
}

/// What happened to an upload request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The image was hosted and the insertion callback ran
    Inserted(UploadedImage),
    /// The upload failed; nothing was inserted
    Failed,
}

impl UploadOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, UploadOutcome::Inserted(_))
    }
}

/// Use case for uploading an image and inserting it into the content.
#[derive(Clone)]
pub struct UploadImageUseCase {
    host: Arc<dyn ImageHost>,
}

impl UploadImageUseCase {
    pub fn new(host: Arc<dyn ImageHost>) -> Self {
        Self { host }
    }

    /// Upload the requested file and, on success, run the insertion callback.
    ///
    /// Failures never escape: they are logged and reported as
    /// [`UploadOutcome::Failed`].
    pub async fn execute(&self, request: UploadRequest) -> UploadOutcome {
        let UploadRequest { file, on_resolved } = request;
        info!("Uploading image {} ({} bytes)", file.name, file.len());

        match self.host.upload(&file).await {
            Ok(image) => {
                info!("Image {} hosted at {}", file.name, image.url);
                // Alt text is the name of the file the user picked
                on_resolved(&image.url, &file.name);
                UploadOutcome::Inserted(UploadedImage {
                    url: image.url,
                    file_name: file.name,
                })
            }
            Err(e) => {
                error!("Image upload failed: {}", e);
                UploadOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::image_host::UploadError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Image host returning a canned result and counting calls
    struct MockHost {
        result: fn() -> Result<UploadedImage, UploadError>,
        calls: Mutex<Vec<String>>,
    }

    impl MockHost {
        fn new(result: fn() -> Result<UploadedImage, UploadError>) -> Self {
            Self {
                result,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ImageHost for MockHost {
        async fn upload(&self, file: &ImageFile) -> Result<UploadedImage, UploadError> {
            self.calls.lock().unwrap().push(file.name.clone());
            (self.result)()
        }
    }

    fn recorder() -> (Arc<Mutex<Vec<(String, String)>>>, impl FnOnce(&str, &str) + Send) {
        let inserted = Arc::new(Mutex::new(Vec::new()));
        let sink = inserted.clone();
        let callback = move |url: &str, name: &str| {
            sink.lock().unwrap().push((url.to_string(), name.to_string()));
        };
        (inserted, callback)
    }

    #[tokio::test]
    async fn test_success_invokes_callback_with_url_and_file_name() {
        let host = Arc::new(MockHost::new(|| {
            Ok(UploadedImage {
                url: "https://x/img.png".to_string(),
                file_name: "server-side-name.png".to_string(),
            })
        }));
        let use_case = UploadImageUseCase::new(host.clone());
        let (inserted, callback) = recorder();

        let outcome = use_case
            .execute(UploadRequest::new(
                ImageFile::new("holiday.png", vec![0x89, 0x50]),
                callback,
            ))
            .await;

        assert_eq!(
            *inserted.lock().unwrap(),
            vec![("https://x/img.png".to_string(), "holiday.png".to_string())]
        );
        assert_eq!(
            outcome,
            UploadOutcome::Inserted(UploadedImage {
                url: "https://x/img.png".to_string(),
                file_name: "holiday.png".to_string(),
            })
        );
        assert_eq!(host.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_http_failure_skips_callback() {
        let host = Arc::new(MockHost::new(|| {
            Err(UploadError::Status {
                status: 500,
                reason: "Internal Server Error".to_string(),
            })
        }));
        let use_case = UploadImageUseCase::new(host.clone());
        let (inserted, callback) = recorder();

        let outcome = use_case
            .execute(UploadRequest::new(ImageFile::new("a.png", vec![1]), callback))
            .await;

        assert_eq!(outcome, UploadOutcome::Failed);
        assert!(inserted.lock().unwrap().is_empty());
        assert_eq!(host.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_network_and_parse_failures_collapse_to_failed() {
        let failures: [fn() -> Result<UploadedImage, UploadError>; 3] = [
            || Err(UploadError::Network("connection refused".to_string())),
            || Err(UploadError::MalformedResponse("missing data.url".to_string())),
            || Err(UploadError::MissingApiKey),
        ];

        for result in failures {
            let use_case = UploadImageUseCase::new(Arc::new(MockHost::new(result)));
            let (inserted, callback) = recorder();

            let outcome = use_case
                .execute(UploadRequest::new(ImageFile::new("b.jpg", vec![2]), callback))
                .await;

            assert!(!outcome.is_inserted());
            assert!(inserted.lock().unwrap().is_empty());
        }
    }
}
