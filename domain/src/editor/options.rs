//! Editor options value object
//!
//! Describes how the rich-text surface is set up: its height, toolbar
//! layout, font choices and placeholder text. The surface itself is an
//! external collaborator; these options are what the composer hands it.

use serde::{Deserialize, Serialize};

/// Toolbar button groups, in display order.
const DEFAULT_BUTTON_LIST: &[&[&str]] = &[
    &["undo", "redo", "bold", "italic", "underline", "strike"],
    &["list", "outdent", "indent"],
    &["align"],
    &["font", "fontSize", "formatBlock"],
    &["fontColor", "hiliteColor"],
    &["link", "image", "video"],
    &["removeFormat"],
    &["table", "horizontalRule", "subscript", "superscript"],
];

const DEFAULT_FONTS: &[&str] = &[
    "Arial",
    "Comic Sans MS",
    "Courier New",
    "Impact",
    "Georgia",
    "Tahoma",
    "Trebuchet MS",
    "Verdana",
];

const DEFAULT_FONT_SIZES: &[u16] = &[8, 10, 12, 14, 16, 18, 20, 22, 24, 28, 32, 36, 48, 64, 72];

/// Configuration passed to the rich-text editor surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Editor height in pixels (or rows for terminal surfaces)
    pub height: u16,
    /// Toolbar buttons, grouped
    pub button_list: Vec<Vec<String>>,
    /// Font families offered by the font picker
    pub fonts: Vec<String>,
    /// Font sizes offered by the size picker
    pub font_sizes: Vec<u16>,
    /// Text shown while the content is empty
    pub placeholder: String,
}

impl EditorOptions {
    /// Whether the toolbar exposes the given button.
    pub fn has_button(&self, name: &str) -> bool {
        self.button_list.iter().flatten().any(|b| b == name)
    }

    /// Whether image insertion (and therefore uploads) is enabled.
    pub fn allows_images(&self) -> bool {
        self.has_button("image")
    }
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            height: 300,
            button_list: DEFAULT_BUTTON_LIST
                .iter()
                .map(|group| group.iter().map(|b| b.to_string()).collect())
                .collect(),
            fonts: DEFAULT_FONTS.iter().map(|f| f.to_string()).collect(),
            font_sizes: DEFAULT_FONT_SIZES.to_vec(),
            placeholder: "Start writing your blog content here...".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_toolbar_layout() {
        let options = EditorOptions::default();
        assert_eq!(options.height, 300);
        assert_eq!(options.button_list.len(), 8);
        assert_eq!(options.button_list[2], vec!["align".to_string()]);
        assert!(options.has_button("horizontalRule"));
        assert!(!options.has_button("codeView"));
    }

    #[test]
    fn test_default_fonts_and_sizes() {
        let options = EditorOptions::default();
        assert_eq!(options.fonts.first().map(String::as_str), Some("Arial"));
        assert_eq!(options.fonts.len(), 8);
        assert_eq!(options.font_sizes.first(), Some(&8));
        assert_eq!(options.font_sizes.last(), Some(&72));
    }

    #[test]
    fn test_allows_images_follows_toolbar() {
        let mut options = EditorOptions::default();
        assert!(options.allows_images());

        for group in &mut options.button_list {
            group.retain(|b| b != "image");
        }
        assert!(!options.allows_images());
    }
}
