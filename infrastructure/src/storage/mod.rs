//! Key/value store adapters.
//!
//! - [`InMemoryKeyValueStore`]: process-local, used by tests and `--ephemeral`
//! - [`JsonFileKeyValueStore`]: a single JSON object on disk, surviving restarts

mod json_file;
mod memory;

pub use json_file::JsonFileKeyValueStore;
pub use memory::InMemoryKeyValueStore;
