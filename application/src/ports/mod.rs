//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod composite_sink;
pub mod draft_sink;
pub mod image_host;
pub mod key_value_store;
