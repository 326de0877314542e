//! Text helpers for slide titles and plain text.
//!
//! Handles tag stripping, whitespace collapsing, Unicode composition and
//! shortening of slide content to a single readable line.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Regex to match HTML or SVG tags.
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Regex to collapse all whitespace runs, including line breaks, into one space.
static WHITESPACE_COLLAPSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Default maximum length of a shortened text.
pub const DEFAULT_MAX_LENGTH: usize = 80;

/// Suffix appended to shortened text.
const ELLIPSIS: &str = " …";

/// A few HTML entities that show up in hand written slide markup.
const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&amp;", "&"),
];

/// Remove all tags from a markup string.
pub fn strip_tags(text: &str) -> String {
    let stripped = TAG_REGEX.replace_all(text, " ");
    let mut output = stripped.into_owned();
    for (entity, replacement) in ENTITIES {
        output = output.replace(entity, replacement);
    }
    output
}

/// Collapse whitespace runs into single spaces and trim.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_COLLAPSE_REGEX
        .replace_all(text, " ")
        .trim()
        .to_string()
}

/// Convert markup into a single line of composed (NFC) plain text.
pub fn plain_text(text: &str) -> String {
    let stripped = strip_tags(text);
    let composed: String = stripped.nfc().collect();
    collapse_whitespace(&composed)
}

/// Shorten a text to at most `max_length` characters, cutting at the
/// last space and appending an ellipsis. The ellipsis counts towards the
/// limit.
///
/// Texts of up to `max_length` characters are returned unchanged.
pub fn shorten_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let ellipsis_length = ELLIPSIS.chars().count();
    if max_length < ellipsis_length {
        return text.chars().take(max_length).collect();
    }

    let truncated: String = text.chars().take(max_length - ellipsis_length).collect();
    let cut = match truncated.rfind(' ') {
        Some(index) => &truncated[..index],
        None => truncated.as_str(),
    };

    format!("{}{}", cut.trim_end(), ELLIPSIS)
}

/// Convert text into a short plain text title.
pub fn shorten_plain_text(text: &str) -> String {
    shorten_text(&plain_text(text), DEFAULT_MAX_LENGTH)
}

/// Convert a `snake_case` key into `camelCase`.
///
/// Keys without underscores are returned unchanged.
pub fn snake_to_camel(key: &str) -> String {
    if !key.contains('_') {
        return key.to_string();
    }

    let mut output = String::with_capacity(key.len());
    let mut upper_next = false;

    for c in key.chars() {
        if c == '_' {
            upper_next = !output.is_empty();
        } else if upper_next {
            output.extend(c.to_uppercase());
            upper_next = false;
        } else {
            output.push(c);
        }
    }

    output
}
