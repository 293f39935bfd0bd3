//! Infrastructure layer for blog-composer
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod sink;
pub mod storage;
pub mod upload;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileEditorConfig, FileLoggingConfig, FileReplConfig,
    FileSaveConfig, FileStorageConfig, FileUploadConfig,
};
pub use sink::{JsonlDraftSink, TracingDraftSink};
pub use storage::{InMemoryKeyValueStore, JsonFileKeyValueStore};
pub use upload::{DEFAULT_IMGBB_ENDPOINT, ImgbbImageHost};
