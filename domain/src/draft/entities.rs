//! Draft entities

use super::category::Category;
use serde::{Deserialize, Serialize};

/// The blog post currently being composed.
///
/// `content` is the markup last reported by the editor surface; it is never
/// validated or rewritten here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub category: Category,
    pub content: String,
}

impl Draft {
    pub fn new(
        title: impl Into<String>,
        category: Category,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category,
            content: content.into(),
        }
    }

    /// Whether every field still holds its default value.
    pub fn is_blank(&self) -> bool {
        self == &Draft::default()
    }

    /// Freeze the current field values into a snapshot.
    pub fn snapshot(&self) -> DraftSnapshot {
        DraftSnapshot {
            title: self.title.clone(),
            category: self.category,
            content: self.content.clone(),
        }
    }
}

/// Immutable record of a draft at the moment it was saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSnapshot {
    title: String,
    category: Category,
    content: String,
}

impl DraftSnapshot {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft_is_blank() {
        let draft = Draft::default();
        assert!(draft.is_blank());
        assert_eq!(draft.title, "");
        assert_eq!(draft.category, Category::Unset);
        assert_eq!(draft.content, "");
    }

    #[test]
    fn test_snapshot_is_detached_from_draft() {
        let mut draft = Draft::new("Rust", Category::Technology, "<p>borrowck</p>");
        let snapshot = draft.snapshot();

        draft.title.push_str(" 2");
        draft.content.clear();

        assert_eq!(snapshot.title(), "Rust");
        assert_eq!(snapshot.category(), Category::Technology);
        assert_eq!(snapshot.content(), "<p>borrowck</p>");
    }

    #[test]
    fn test_snapshot_serializes_as_flat_record() {
        let snapshot = Draft::new("T", Category::Unset, "<p>x</p>").snapshot();
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "T",
                "category": "Category",
                "content": "<p>x</p>"
            })
        );
    }
}
