//! imgbb-compatible image host.
//!
//! Sends `POST {endpoint}?key={api_key}` with a multipart body whose `image`
//! field carries the file, and reads the hosted URL from `data.url` in the
//! JSON response. Any other response fields are ignored.

use async_trait::async_trait;
use composer_application::ports::image_host::{ImageHost, UploadError};
use composer_domain::{ImageFile, UploadedImage};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Default upload endpoint.
pub const DEFAULT_IMGBB_ENDPOINT: &str = "https://api.imgbb.com/1/upload";

/// Multipart field name carrying the file.
const IMAGE_FIELD: &str = "image";

/// Maximum number of response characters kept for diagnostics.
const MAX_ERROR_BODY: usize = 512;

#[derive(Debug, Deserialize)]
struct UploadResponse {
    data: UploadResponseData,
}

#[derive(Debug, Deserialize)]
struct UploadResponseData {
    url: String,
}

/// Image host speaking the imgbb upload API.
pub struct ImgbbImageHost {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl ImgbbImageHost {
    /// Create a host for `endpoint`. Requests without an API key fail with
    /// [`UploadError::MissingApiKey`] before anything is sent.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, UploadError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("blog-composer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| UploadError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    fn build_form(file: &ImageFile) -> Result<Form, UploadError> {
        let mut part = Part::bytes(file.bytes.clone()).file_name(file.name.clone());
        if let Some(content_type) = &file.content_type {
            part = part.mime_str(content_type).map_err(|e| {
                UploadError::Network(format!("Invalid content type {}: {}", content_type, e))
            })?;
        }
        Ok(Form::new().part(IMAGE_FIELD, part))
    }

    fn parse_response(body: &str) -> Result<String, UploadError> {
        let parsed: UploadResponse = serde_json::from_str(body)
            .map_err(|e| UploadError::MalformedResponse(e.to_string()))?;
        if parsed.data.url.is_empty() {
            return Err(UploadError::MalformedResponse(
                "data.url is empty".to_string(),
            ));
        }
        Ok(parsed.data.url)
    }
}

#[async_trait]
impl ImageHost for ImgbbImageHost {
    async fn upload(&self, file: &ImageFile) -> Result<UploadedImage, UploadError> {
        let api_key = self.api_key.as_deref().ok_or(UploadError::MissingApiKey)?;
        let form = Self::build_form(file)?;

        debug!("POST {} ({} bytes)", self.endpoint, file.len());
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", api_key)])
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Network(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UploadError::Network(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            debug!(
                "Upload rejected: {}",
                body.chars().take(MAX_ERROR_BODY).collect::<String>()
            );
            return Err(UploadError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let url = Self::parse_response(&body)?;
        Ok(UploadedImage {
            url,
            file_name: file.name.clone(),
        })
    }
}
