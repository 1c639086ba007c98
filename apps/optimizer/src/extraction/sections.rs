//! Splitting raw document text into sections (blank-line blocks) and entries
//! (sub-blocks starting at a line that begins with an uppercase letter).

use once_cell::sync::Lazy;
use regex::Regex;

static SECTION_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("section break pattern is valid"));

/// Blank-line-delimited blocks of `text`, in document order.
pub fn split_sections(text: &str) -> Vec<&str> {
    SECTION_BREAK.split(text).collect()
}

/// First section whose lowercased content matches `keywords`.
/// Later sections are never considered, even if they match more strongly.
pub fn find_section<'a>(text: &'a str, keywords: &Regex) -> Option<&'a str> {
    split_sections(text)
        .into_iter()
        .find(|section| keywords.is_match(&section.to_lowercase()))
}

/// Splits a section before every line that starts with an ASCII uppercase letter.
/// The first chunk is kept whatever it starts with.
pub fn split_entries(section: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut start = 0;
    for (idx, _) in section.match_indices('\n') {
        let starts_upper = section[idx + 1..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_uppercase());
        if starts_upper {
            entries.push(&section[start..idx]);
            start = idx + 1;
        }
    }
    entries.push(&section[start..]);
    entries
}
