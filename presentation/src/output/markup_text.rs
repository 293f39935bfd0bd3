//! Render content markup as readable terminal text.
//!
//! Block elements start new lines, list items get a `- ` bullet and images
//! are shown as `[image: alt] src`. Scripts and styles are dropped.

use scraper::{ElementRef, Html, Node};

/// Tags whose entire subtree should be ignored
const SKIP_TAGS: [&str; 4] = ["script", "style", "noscript", "svg"];

/// Tags rendered on their own line(s)
const BLOCK_TAGS: [&str; 17] = [
    "p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "li", "ul", "ol", "blockquote", "pre",
    "table", "tr", "figure", "section",
];

/// Convert markup to plain text, one block per line.
pub fn markup_to_text(markup: &str) -> String {
    let fragment = Html::parse_fragment(markup);
    let mut out = String::new();
    collect_text(fragment.root_element(), &mut out);
    clean_lines(&out)
}

/// Recursively collect text from an element
fn collect_text(element: ElementRef, out: &mut String) {
    let tag = element.value().name();
    if SKIP_TAGS.contains(&tag) {
        return;
    }

    match tag {
        "br" => {
            out.push('\n');
            return;
        }
        "hr" => {
            out.push_str("\n---\n");
            return;
        }
        "img" => {
            let alt = element.value().attr("alt").unwrap_or("image");
            let src = element.value().attr("src").unwrap_or("");
            out.push_str(&format!("\n[image: {}] {}\n", alt, src));
            return;
        }
        _ => {}
    }

    let block = BLOCK_TAGS.contains(&tag);
    if block {
        out.push('\n');
    }
    if tag == "li" {
        out.push_str("- ");
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_text(child_el, out);
                }
            }
            _ => {}
        }
    }

    if block {
        out.push('\n');
    }
}

/// Collapse runs of whitespace within lines and drop blank lines
fn clean_lines(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
