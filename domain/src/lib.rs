//! Domain layer for blog-composer
//!
//! This crate contains the draft entities and value objects.
//! It has no dependencies on storage, networking or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Draft**: the title, category and rich-text content being composed
//! - **Category**: the fixed set of blog subject classifications, plus the
//!   `"Category"` placeholder meaning "unset"
//! - **DraftSnapshot**: the immutable record handed over when a draft is saved

pub mod config;
pub mod core;
pub mod draft;
pub mod editor;
pub mod upload;

// Re-export commonly used types
pub use config::validation::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::error::DomainError;
pub use draft::{
    category::Category,
    entities::{Draft, DraftSnapshot},
    keys::{CATEGORY_KEY, CONTENT_KEY, DRAFT_KEYS, TITLE_KEY},
};
pub use editor::options::EditorOptions;
pub use upload::value_objects::{ImageFile, UploadedImage};
