//! Configuration file loading for blog-composer
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `BLOG_COMPOSER_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./composer.toml` or `./.composer.toml`
//! 4. Global config: `<config_dir>/blog-composer/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileEditorConfig, FileLoggingConfig, FileReplConfig, FileSaveConfig,
    FileStorageConfig, FileUploadConfig,
};
pub use loader::ConfigLoader;
