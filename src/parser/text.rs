//! Cue text cleanup shared by both parsers.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

/// Removes `<...>` markup, then decodes the standard entities.
///
/// `&amp;` is decoded last so `&amp;lt;` stays the literal text `&lt;`.
pub(crate) fn strip_tags_and_decode(text: &str) -> String {
    let stripped = HTML_TAG.replace_all(text, "");
    decode_entities(stripped)
}

fn decode_entities(text: Cow<'_, str>) -> String {
    if !text.contains('&') {
        return text.into_owned();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Joins payload lines with a space, strips markup and collapses whitespace.
pub(crate) fn clean_text(lines: &[&str]) -> String {
    let joined = lines.join(" ");
    strip_tags_and_decode(&joined)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
