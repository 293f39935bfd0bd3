//! Editor surface configuration.

pub mod options;
