use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::extraction::sections::{find_section, split_entries};
use crate::models::resume::ExperienceEntry;

/// Responsibility lines must be longer than this after trimming.
const MIN_RESPONSIBILITY_CHARS: usize = 10;

static EXPERIENCE_KEYWORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"experience|work|employment|career").expect("experience keyword pattern is valid")
});
static COMPANY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z\s&]+").expect("company pattern is valid"));
static DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*[\s\-]+[0-9]{4}(?:\s*(?:-|to)\s*(?:Present|(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*[\s\-]+[0-9]{4}))?",
    )
    .expect("duration pattern is valid")
});

/// Roles from the first keyword-bearing section. An entry is kept when it
/// yields a company or a title.
pub fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
    let Some(section) = find_section(text, &EXPERIENCE_KEYWORDS) else {
        debug!("No experience section found");
        return Vec::new();
    };

    split_entries(section)
        .into_iter()
        .filter(|entry| !entry.trim().is_empty())
        .map(parse_entry)
        .filter(|exp| !exp.company.is_empty() || !exp.title.is_empty())
        .collect()
}

fn parse_entry(entry: &str) -> ExperienceEntry {
    let lines: Vec<&str> = entry.split('\n').collect();
    let mut exp = ExperienceEntry::default();

    // Company then title, from the first two lines only.
    for line in lines.iter().take(2) {
        if exp.company.is_empty() {
            if let Some(m) = COMPANY.find(line) {
                exp.company = m.as_str().trim().to_string();
            }
        } else if exp.title.is_empty() {
            exp.title = line.trim().to_string();
        }
    }

    if let Some(m) = DURATION.find(entry) {
        exp.duration = m.as_str().to_string();
    }

    exp.responsibilities = lines
        .iter()
        .skip(2)
        .map(|line| line.trim())
        .filter(|line| line.chars().count() > MIN_RESPONSIBILITY_CHARS)
        .map(String::from)
        .collect();

    exp
}
