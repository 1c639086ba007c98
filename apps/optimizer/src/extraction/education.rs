use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::extraction::contact::first_match;
use crate::extraction::sections::{find_section, split_entries};
use crate::models::resume::EducationEntry;

/// Matched as plain substrings of the lowercased section text, abbreviations included.
static EDUCATION_KEYWORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"education|university|college|school|bachelor|master|phd|b\.?tech|m\.?tech|b\.?e|m\.?e",
    )
    .expect("education keyword pattern is valid")
});
static DEGREE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:B\.?Tech|M\.?Tech|PhD|Bachelor|Master|B\.?E|M\.?E|B\.?S|M\.?S)[^\n]*")
        .expect("degree pattern is valid")
});
static YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:20|19)[0-9]{2}").expect("year pattern is valid"));
static GPA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:GPA|CGPA):\s*([0-9]+\.[0-9]+)").expect("gpa pattern is valid")
});

/// Education entries from the first keyword-bearing section. Every non-blank
/// entry yields a record, even when none of its fields match.
pub fn extract_education(text: &str) -> Vec<EducationEntry> {
    let Some(section) = find_section(text, &EDUCATION_KEYWORDS) else {
        debug!("No education section found");
        return Vec::new();
    };

    split_entries(section)
        .into_iter()
        .filter(|entry| !entry.trim().is_empty())
        .map(parse_entry)
        .collect()
}

fn parse_entry(entry: &str) -> EducationEntry {
    EducationEntry {
        degree: first_match(&DEGREE, entry).trim().to_string(),
        institution: String::new(),
        year: first_match(&YEAR, entry),
        gpa: GPA
            .captures(entry)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
    }
}
