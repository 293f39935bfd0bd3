//! Application layer for blog-composer
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    composite_sink::CompositeDraftSink,
    draft_sink::{DraftSink, NoDraftSink},
    image_host::{ImageHost, UploadError},
    key_value_store::{KeyValueStore, StoreError},
};
pub use use_cases::draft_editor::DraftEditor;
pub use use_cases::upload_image::{
    InsertImageFn, UploadImageUseCase, UploadOutcome, UploadRequest,
};
