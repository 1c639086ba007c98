// Extractor: raw document text -> ResumeRecord.
// Every field defaults to empty on a miss; only document loading can fail.

pub mod contact;
pub mod education;
pub mod experience;
pub mod loader;
pub mod sections;

use std::path::Path;

use tracing::info;

use crate::errors::ExtractionError;
use crate::models::resume::ResumeRecord;

pub use loader::{extension_of, load_document, SUPPORTED_EXTENSIONS};

/// Loads the document at `path` and extracts its fields.
pub fn parse_resume(path: &Path) -> Result<ResumeRecord, ExtractionError> {
    let text = load_document(path)?;
    let record = extract_record(&text);
    info!(
        "Extracted resume: {} education entries, {} experience entries",
        record.education.len(),
        record.experience.len()
    );
    Ok(record)
}

/// Pure extraction over already-loaded text.
pub fn extract_record(text: &str) -> ResumeRecord {
    ResumeRecord {
        name: contact::extract_name(text),
        contact: contact::extract_contact_details(text),
        education: education::extract_education(text),
        experience: experience::extract_experience(text),
    }
}
