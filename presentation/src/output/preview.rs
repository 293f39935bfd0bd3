//! Preview formatter for the draft being composed

use crate::output::markup_text::markup_to_text;
use colored::Colorize;
use composer_domain::{Category, Draft, DraftSnapshot, EditorOptions};

/// Formats drafts and editor settings for console display
pub struct PreviewFormatter;

impl PreviewFormatter {
    /// Format the preview: title, category and rendered content
    pub fn format(draft: &Draft, options: &EditorOptions) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("Preview"));
        output.push('\n');

        if draft.title.is_empty() {
            output.push_str(&format!("{}\n", "(untitled)".dimmed()));
        } else {
            output.push_str(&format!("{}\n", draft.title.bold()));
        }
        output.push_str(&format!(
            "{} {}\n\n",
            "Category:".cyan().bold(),
            draft.category
        ));

        let text = markup_to_text(&draft.content);
        if text.is_empty() {
            output.push_str(&format!("{}\n", options.placeholder.dimmed()));
        } else {
            output.push_str(&text);
            output.push('\n');
        }

        output
    }

    /// Format the raw markup, unrendered
    pub fn format_raw(draft: &Draft) -> String {
        draft.content.clone()
    }

    /// Format a saved record as pretty JSON
    pub fn format_json(snapshot: &DraftSnapshot) -> String {
        serde_json::to_string_pretty(snapshot)
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }

    /// Format the confirmation shown after a save
    pub fn format_saved(snapshot: &DraftSnapshot) -> String {
        let title = if snapshot.title().is_empty() {
            "(untitled)"
        } else {
            snapshot.title()
        };
        format!(
            "{} {} [{}], {} bytes of content. Draft cleared.",
            "Saved".green().bold(),
            title,
            snapshot.category(),
            snapshot.content().len()
        )
    }

    /// Format the list of selectable categories
    pub fn format_categories(current: Category) -> String {
        Category::selectable()
            .map(|c| {
                if c == current {
                    format!("  * {}", c.as_str().green())
                } else {
                    format!("    {}", c)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format the editor toolbar and font settings
    pub fn format_options(options: &EditorOptions) -> String {
        let mut output = String::new();
        output.push_str(&Self::section_header("Editor"));
        output.push_str(&format!("\n{} {}\n", "Height:".cyan().bold(), options.height));
        output.push_str(&format!("{}\n", "Toolbar:".cyan().bold()));
        for group in &options.button_list {
            output.push_str(&format!("  [{}]\n", group.join(" ")));
        }
        output.push_str(&format!(
            "{} {}\n",
            "Fonts:".cyan().bold(),
            options.fonts.join(", ")
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Font sizes:".cyan().bold(),
            options
                .font_sizes
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        ));
        output
    }

    fn section_header(title: &str) -> String {
        format!("── {} ──", title).yellow().bold().to_string()
    }
}
