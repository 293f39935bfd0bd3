//! Image host adapters.
//!
//! Provides [`ImgbbImageHost`], which implements the
//! [`ImageHost`](composer_application::ImageHost) port over HTTP.

mod imgbb;

pub use imgbb::{DEFAULT_IMGBB_ENDPOINT, ImgbbImageHost};
