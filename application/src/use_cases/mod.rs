//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod draft_editor;
pub mod upload_image;
