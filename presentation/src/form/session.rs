//! Form session: the blog form as seen by the terminal front ends.
//!
//! Wraps a [`DraftEditor`] and plays the part of the rich-text surface:
//! every content edit is turned into full markup and reported through
//! [`DraftEditor::on_content_change`]. Image insertion goes through the
//! [`UploadImageUseCase`], whose callback hands the hosted URL back over a
//! oneshot channel.

use crate::form::markup;
use composer_application::{DraftEditor, UploadImageUseCase, UploadOutcome, UploadRequest};
use composer_domain::{Category, DomainError, Draft, DraftSnapshot, EditorOptions, ImageFile};
use std::path::Path;
use thiserror::Error;
use tokio::sync::oneshot;
use tracing::debug;

/// Errors raised by the form before an operation reaches the draft.
#[derive(Error, Debug)]
pub enum FormError {
    #[error(transparent)]
    Category(#[from] DomainError),

    #[error("Image insertion is disabled in the editor toolbar")]
    ImagesDisabled,

    #[error("Image uploads are not configured")]
    NoUploader,

    #[error("Could not read {path}: {source}")]
    ReadImage {
        path: String,
        source: std::io::Error,
    },
}

/// Read an image file from disk for upload.
pub async fn load_image(path: &Path) -> Result<ImageFile, FormError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| FormError::ReadImage {
        path: path.display().to_string(),
        source,
    })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    let mut file = ImageFile::new(name, bytes);
    if let Some(content_type) = ImageFile::guess_content_type(&file.name) {
        file = file.with_content_type(content_type);
    }
    Ok(file)
}

/// The blog form: draft state plus the editing surface around it.
pub struct FormSession {
    editor: DraftEditor,
    uploader: Option<UploadImageUseCase>,
    options: EditorOptions,
}

impl FormSession {
    pub fn new(editor: DraftEditor, options: EditorOptions) -> Self {
        Self {
            editor,
            uploader: None,
            options,
        }
    }

    /// Enable image uploads.
    pub fn with_uploader(mut self, uploader: UploadImageUseCase) -> Self {
        self.uploader = Some(uploader);
        self
    }

    pub fn draft(&self) -> &Draft {
        self.editor.draft()
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn set_title(&mut self, title: &str) {
        self.editor.set_title(title);
    }

    /// Select a category from user input.
    ///
    /// Only the five selectable categories are accepted.
    pub fn select_category(&mut self, input: &str) -> Result<Category, FormError> {
        let category = Category::parse_selection(input)?;
        self.editor.set_category(category);
        Ok(category)
    }

    /// Append a typed line as a paragraph.
    pub fn type_line(&mut self, text: &str) {
        let updated = markup::append_paragraph(&self.editor.draft().content, text);
        self.editor.on_content_change(updated);
    }

    /// Replace the whole content with the given markup.
    pub fn replace_content(&mut self, markup: &str) {
        self.editor.on_content_change(markup);
    }

    /// Upload an image and, if it is hosted, insert it into the content.
    ///
    /// Upload failures are not errors here: they come back as
    /// [`UploadOutcome::Failed`] with the content unchanged.
    pub async fn insert_image(&mut self, file: ImageFile) -> Result<UploadOutcome, FormError> {
        if !self.options.allows_images() {
            return Err(FormError::ImagesDisabled);
        }
        let uploader = self.uploader.as_ref().ok_or(FormError::NoUploader)?;

        let (tx, mut rx) = oneshot::channel::<(String, String)>();
        let request = UploadRequest::new(file, move |url, name| {
            let _ = tx.send((url.to_string(), name.to_string()));
        });
        let outcome = uploader.execute(request).await;

        if let Ok((url, name)) = rx.try_recv() {
            debug!("Inserting image {} into content", name);
            let updated = markup::insert_image(&self.editor.draft().content, &url, &name);
            self.editor.on_content_change(updated);
        }

        Ok(outcome)
    }

    /// Save the draft and start over with a blank one.
    pub fn save(&mut self) -> DraftSnapshot {
        self.editor.save()
    }
}
