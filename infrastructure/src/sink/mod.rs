//! Save sinks: where saved drafts are reported.
//!
//! - [`TracingDraftSink`] writes the record to the diagnostic log
//! - [`JsonlDraftSink`] appends one JSON line per saved draft to a file

mod jsonl_sink;
mod tracing_sink;

pub use jsonl_sink::JsonlDraftSink;
pub use tracing_sink::TracingDraftSink;
