//! Presentation layer for blog-composer
//!
//! This crate contains the CLI definition, the interactive form REPL,
//! the terminal stand-in for the rich-text surface and preview formatting.

pub mod cli;
pub mod form;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use form::repl::FormRepl;
pub use form::session::{FormError, FormSession, load_image};
pub use output::preview::PreviewFormatter;
pub use progress::spinner::UploadSpinner;
