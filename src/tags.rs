//! Hashtag extraction.
//!
//! A tag is a `#` followed by one or more ASCII word characters. Tags are
//! derived from task text and never stored independently of it.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"#([A-Za-z0-9_]+)").expect("tag pattern is valid"));

/// Extract the distinct hashtags of `text`, in first-occurrence order, without the `#`.
#[must_use]
pub fn extract_tags(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    TAG_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|tag| seen.insert(*tag))
        .map(str::to_string)
        .collect()
}

/// Split `text` into segments, flagging the ones that are hashtags.
///
/// The concatenation of all segments is `text` again. Used by the list
/// renderer to color tags inline.
#[must_use]
pub fn split_tagged(text: &str) -> Vec<(&str, bool)> {
    let mut segments = Vec::new();
    let mut last = 0;
    for m in TAG_REGEX.find_iter(text) {
        if m.start() > last {
            segments.push((&text[last..m.start()], false));
        }
        segments.push((m.as_str(), true));
        last = m.end();
    }
    if last < text.len() {
        segments.push((&text[last..], false));
    }
    segments
}
