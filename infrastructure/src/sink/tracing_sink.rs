//! Draft sink that reports saved drafts through `tracing`.

use composer_application::ports::draft_sink::DraftSink;
use composer_domain::DraftSnapshot;
use tracing::info;

/// Logs each saved draft at `info` level under the `composer::save` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDraftSink;

impl TracingDraftSink {
    /// Render a snapshot as the JSON record that gets logged.
    pub fn render(snapshot: &DraftSnapshot) -> String {
        serde_json::to_string(snapshot).unwrap_or_else(|_| {
            format!(
                "{{\"title\":{:?},\"category\":{:?}}}",
                snapshot.title(),
                snapshot.category().as_str()
            )
        })
    }
}

impl DraftSink for TracingDraftSink {
    fn publish(&self, snapshot: &DraftSnapshot) {
        info!(
            target: "composer::save",
            title = snapshot.title(),
            category = snapshot.category().as_str(),
            content_bytes = snapshot.content().len(),
            "Blog data: {}",
            Self::render(snapshot)
        );
    }
}
