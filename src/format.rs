//! Turns raw backend answers into display markup for bot bubbles.
//!
//! The backend text is HTML-escaped first, so the only markup in the output
//! is what the rules below insert. Rules run in a fixed order: line breaks,
//! tabs, `**bold**` spans, then bare URLs.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

pub const LINE_BREAK: &str = "<br/>";
pub const TAB_EXPANSION: &str = "    ";

static BOLD_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("Invalid bold regex"));

// `<` can only come from inserted markup at this point, so it ends a URL.
static BARE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s<]+").expect("Invalid URL regex"));

pub fn format_response(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let text = escape_html(raw);
    let text = text.replace('\n', LINE_BREAK);
    let text = text.replace('\t', TAB_EXPANSION);
    let text = BOLD_SPAN.replace_all(&text, "<b>$1</b>");
    let text = BARE_URL.replace_all(&text, |caps: &Captures| {
        let url = &caps[0];
        format!(r#"<a href="{url}" target="_blank" rel="noopener noreferrer">{url}</a>"#)
    });
    text.into_owned()
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}
