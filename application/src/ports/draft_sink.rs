//! Port for handing off saved drafts.
//!
//! Saving a draft does not persist it anywhere durable yet: the snapshot is
//! reported to a sink (a log, a JSONL file) and the draft is cleared. A
//! backend API client would be another implementation of this port.
//!
//! The `publish` method is synchronous and non-fallible; sink failures must
//! not prevent the draft from being cleared.

use composer_domain::DraftSnapshot;

/// Receiver of saved draft snapshots.
pub trait DraftSink: Send + Sync {
    /// Record a saved draft.
    fn publish(&self, snapshot: &DraftSnapshot);
}

/// No-op implementation for tests and when reporting is disabled.
pub struct NoDraftSink;

impl DraftSink for NoDraftSink {
    fn publish(&self, _snapshot: &DraftSnapshot) {}
}
