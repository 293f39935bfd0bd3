//! Editor configuration from TOML (`[editor]` section)
//!
//! Every field is optional; unset fields keep the [`EditorOptions`] defaults.

use composer_domain::EditorOptions;
use serde::{Deserialize, Serialize};

/// Raw editor configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEditorConfig {
    pub height: Option<u16>,
    pub placeholder: Option<String>,
    pub fonts: Option<Vec<String>>,
    pub font_sizes: Option<Vec<u16>>,
    pub button_list: Option<Vec<Vec<String>>>,
}

impl FileEditorConfig {
    /// Overlay the configured values on the default options.
    pub fn to_editor_options(&self) -> EditorOptions {
        let defaults = EditorOptions::default();
        EditorOptions {
            height: self.height.unwrap_or(defaults.height),
            button_list: self.button_list.clone().unwrap_or(defaults.button_list),
            fonts: self.fonts.clone().unwrap_or(defaults.fonts),
            font_sizes: self.font_sizes.clone().unwrap_or(defaults.font_sizes),
            placeholder: self.placeholder.clone().unwrap_or(defaults.placeholder),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_section_gives_defaults() {
        assert_eq!(
            FileEditorConfig::default().to_editor_options(),
            EditorOptions::default()
        );
    }

    #[test]
    fn test_partial_override() {
        let toml_str = r#"
[editor]
height = 480
fonts = ["Georgia"]
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        let options = config.editor.to_editor_options();
        assert_eq!(options.height, 480);
        assert_eq!(options.fonts, vec!["Georgia".to_string()]);
        assert_eq!(options.font_sizes, EditorOptions::default().font_sizes);
    }
}
