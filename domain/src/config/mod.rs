//! Configuration value objects shared by every layer.

pub mod validation;
