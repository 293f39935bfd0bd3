//! Markup edits performed by the terminal editing surface.
//!
//! A browser would host a rich-text widget here. The terminal surface only
//! appends: typed lines become paragraphs and uploaded images become `<img>`
//! elements. Each function returns the complete new markup, which is what the
//! surface reports as a content change.

/// Escape text for inclusion in element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Append a paragraph containing `text`.
pub fn append_paragraph(markup: &str, text: &str) -> String {
    format!("{}<p>{}</p>", markup, escape_html(text))
}

/// Append an image hosted at `url`, using `alt` as its alternative text.
pub fn insert_image(markup: &str, url: &str, alt: &str) -> String {
    format!(
        "{}<p><img src=\"{}\" alt=\"{}\"></p>",
        markup,
        escape_html(url),
        escape_html(alt)
    )
}
