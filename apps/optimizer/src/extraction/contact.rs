use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::ContactInfo;

/// Number of leading lines searched for the candidate's name.
const NAME_SEARCH_LINES: usize = 3;

static NON_NAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z\s]").expect("name filter pattern is valid"));
static TITLE_CASE_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]*$").expect("title case pattern is valid"));

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("email pattern is valid")
});
static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+[0-9]{1,3}[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}")
        .expect("phone pattern is valid")
});
static LINKEDIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"linkedin\.com/in/[\w-]+").expect("linkedin pattern is valid"));

/// Returns the first of the leading lines that reads as a 2-3 word title-case name,
/// with everything but letters and whitespace removed. Empty if none qualifies.
pub fn extract_name(text: &str) -> String {
    for line in text.split('\n').take(NAME_SEARCH_LINES) {
        let cleaned = NON_NAME_CHARS.replace_all(line, "");
        let cleaned = cleaned.trim();
        let words: Vec<&str> = cleaned.split_whitespace().collect();
        if (2..=3).contains(&words.len()) && words.iter().all(|w| TITLE_CASE_WORD.is_match(w)) {
            return cleaned.to_string();
        }
    }
    String::new()
}

/// First email, phone number and LinkedIn profile found anywhere in `text`.
/// `location` is never populated.
pub fn extract_contact_details(text: &str) -> ContactInfo {
    ContactInfo {
        email: first_match(&EMAIL, text),
        phone: first_match(&PHONE, text),
        linkedin: first_match(&LINKEDIN, text),
        location: String::new(),
    }
}

pub(crate) fn first_match(re: &Regex, text: &str) -> String {
    re.find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
