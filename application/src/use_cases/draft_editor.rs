//! Draft editor use case.
//!
//! Owns the draft being composed and keeps it in sync with the key/value
//! store:
//!
//! - [`DraftEditor::initialize`] hydrates all three fields from the store
//! - title and category changes stay in memory
//! - [`DraftEditor::on_content_change`] writes through on every call
//! - [`DraftEditor::save`] hands a snapshot to the sink and clears everything
//!
//! Store failures never surface to the caller. Reads fall back to defaults,
//! failed writes are logged.

use crate::ports::draft_sink::DraftSink;
use crate::ports::key_value_store::KeyValueStore;
use composer_domain::{
    CATEGORY_KEY, CONTENT_KEY, Category, DRAFT_KEYS, Draft, DraftSnapshot, TITLE_KEY,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Form state holder for a single blog draft.
pub struct DraftEditor {
    store: Arc<dyn KeyValueStore>,
    sink: Arc<dyn DraftSink>,
    draft: Draft,
}

impl DraftEditor {
    /// Create an editor with a blank draft. Call [`initialize`](Self::initialize)
    /// to hydrate it from the store.
    pub fn new(store: Arc<dyn KeyValueStore>, sink: Arc<dyn DraftSink>) -> Self {
        Self {
            store,
            sink,
            draft: Draft::default(),
        }
    }

    /// Create an editor and hydrate it from the store in one step.
    pub fn open(store: Arc<dyn KeyValueStore>, sink: Arc<dyn DraftSink>) -> Self {
        let mut editor = Self::new(store, sink);
        editor.initialize();
        editor
    }

    /// Load title, category and content from the store.
    ///
    /// Absent or unreadable keys yield the field default. A stored category
    /// outside the known set also yields the placeholder.
    pub fn initialize(&mut self) {
        let title = self.read(TITLE_KEY).unwrap_or_default();
        let content = self.read(CONTENT_KEY).unwrap_or_default();
        let category = match self.read(CATEGORY_KEY) {
            Some(raw) => raw.parse::<Category>().unwrap_or_else(|e| {
                debug!("Ignoring stored category: {}", e);
                Category::default()
            }),
            None => Category::default(),
        };

        self.draft = Draft::new(title, category, content);
        debug!(
            "Draft hydrated (title: {} bytes, category: {}, content: {} bytes)",
            self.draft.title.len(),
            self.draft.category,
            self.draft.content.len()
        );
    }

    /// Current draft state.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.draft.title = value.into();
    }

    pub fn set_category(&mut self, category: Category) {
        self.draft.category = category;
    }

    /// Record new content reported by the editor surface and persist it.
    ///
    /// Every call performs exactly one store write, in call order.
    pub fn on_content_change(&mut self, markup: impl Into<String>) {
        self.draft.content = markup.into();
        if let Err(e) = self.store.set(CONTENT_KEY, &self.draft.content) {
            warn!("Failed to persist draft content: {}", e);
        }
    }

    /// Hand the current draft to the sink, then clear memory and the store.
    ///
    /// Returns the snapshot that was published. After this call the store
    /// holds none of the draft keys and the draft equals its defaults.
    pub fn save(&mut self) -> DraftSnapshot {
        let snapshot = self.draft.snapshot();
        info!(
            "Saving draft '{}' ({})",
            snapshot.title(),
            snapshot.category()
        );
        self.sink.publish(&snapshot);

        for key in DRAFT_KEYS {
            if let Err(e) = self.store.remove(key) {
                warn!("Failed to remove {} from store: {}", key, e);
            }
        }
        self.draft = Draft::default();

        snapshot
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                debug!("Store read for {} failed, using default: {}", key, e);
                None
            }
        }
    }
}
