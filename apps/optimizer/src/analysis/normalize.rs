//! Normalization and validation gate between the extractor and the scorer.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::models::resume::{ContactInfo, EducationEntry, ExperienceEntry, ResumeRecord};

/// Loosely shaped structured input. Sections may be absent; `validate` decides
/// whether it can be scored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeSubmission {
    #[serde(default)]
    pub name: String,
    pub contact: Option<ContactInfo>,
    pub education: Option<Vec<EducationEntry>>,
    pub experience: Option<Vec<ExperienceEntry>>,
}

impl From<ResumeRecord> for ResumeSubmission {
    fn from(record: ResumeRecord) -> Self {
        Self {
            name: record.name,
            contact: Some(record.contact),
            education: Some(record.education),
            experience: Some(record.experience),
        }
    }
}

/// Trims every field, lowercases the email and drops blank responsibility lines.
pub fn normalize(record: ResumeRecord) -> ResumeRecord {
    ResumeRecord {
        name: record.name.trim().to_string(),
        contact: normalize_contact(record.contact),
        education: record.education.into_iter().map(normalize_education).collect(),
        experience: record
            .experience
            .into_iter()
            .map(normalize_experience)
            .collect(),
    }
}

/// Same as [`normalize`] for a submission, leaving absent sections absent.
pub fn normalize_submission(submission: ResumeSubmission) -> ResumeSubmission {
    ResumeSubmission {
        name: submission.name.trim().to_string(),
        contact: submission.contact.map(normalize_contact),
        education: submission
            .education
            .map(|entries| entries.into_iter().map(normalize_education).collect()),
        experience: submission
            .experience
            .map(|entries| entries.into_iter().map(normalize_experience).collect()),
    }
}

fn normalize_contact(contact: ContactInfo) -> ContactInfo {
    ContactInfo {
        email: contact.email.trim().to_lowercase(),
        phone: contact.phone.trim().to_string(),
        linkedin: contact.linkedin.trim().to_string(),
        location: contact.location.trim().to_string(),
    }
}

fn normalize_education(entry: EducationEntry) -> EducationEntry {
    EducationEntry {
        degree: entry.degree.trim().to_string(),
        institution: entry.institution.trim().to_string(),
        year: entry.year.trim().to_string(),
        gpa: entry.gpa.trim().to_string(),
    }
}

fn normalize_experience(entry: ExperienceEntry) -> ExperienceEntry {
    ExperienceEntry {
        company: entry.company.trim().to_string(),
        title: entry.title.trim().to_string(),
        duration: entry.duration.trim().to_string(),
        responsibilities: entry
            .responsibilities
            .iter()
            .map(|r| r.trim())
            .filter(|r| !r.is_empty())
            .map(String::from)
            .collect(),
    }
}

/// Requires all three sections and a non-empty email and phone.
/// Every missing piece is named, sections first.
pub fn validate(submission: ResumeSubmission) -> Result<ResumeRecord, ValidationError> {
    let ResumeSubmission {
        name,
        contact,
        education,
        experience,
    } = submission;

    let (contact, education, experience) = match (contact, education, experience) {
        (Some(c), Some(ed), Some(ex)) => (c, ed, ex),
        (c, ed, ex) => {
            let missing = [
                ("contact", c.is_none()),
                ("education", ed.is_none()),
                ("experience", ex.is_none()),
            ]
            .into_iter()
            .filter_map(|(section, absent)| absent.then_some(section))
            .collect();
            return Err(ValidationError::MissingSections(missing));
        }
    };

    let missing_fields: Vec<&'static str> = [("email", &contact.email), ("phone", &contact.phone)]
        .into_iter()
        .filter_map(|(field, value)| value.is_empty().then_some(field))
        .collect();
    if !missing_fields.is_empty() {
        return Err(ValidationError::MissingContactFields(missing_fields));
    }

    Ok(ResumeRecord {
        name,
        contact,
        education,
        experience,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(email: &str, phone: &str) -> ContactInfo {
        ContactInfo {
            email: email.into(),
            phone: phone.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_trims_and_lowercases_email() {
        let record = ResumeRecord {
            name: "  Jane Doe ".into(),
            contact: contact(" Jane@Example.COM ", " 555-123-4567\n"),
            education: vec![EducationEntry {
                degree: " BS ".into(),
                ..Default::default()
            }],
            experience: vec![ExperienceEntry {
                company: "Acme ".into(),
                responsibilities: vec!["  built things  ".into(), "   ".into()],
                ..Default::default()
            }],
        };
        let n = normalize(record);
        assert_eq!(n.name, "Jane Doe");
        assert_eq!(n.contact.email, "jane@example.com");
        assert_eq!(n.contact.phone, "555-123-4567");
        assert_eq!(n.education[0].degree, "BS");
        assert_eq!(n.experience[0].company, "Acme");
        assert_eq!(n.experience[0].responsibilities, vec!["built things"]);
    }

    #[test]
    fn test_normalized_json_drops_empty_fields() {
        let n = normalize(ResumeRecord {
            contact: contact("a@b.com", " "),
            ..Default::default()
        });
        let json = serde_json::to_value(&n.contact).unwrap();
        assert_eq!(json, serde_json::json!({"email": "a@b.com"}));
    }

    #[test]
    fn test_validate_accepts_extracted_record() {
        let record = ResumeRecord {
            contact: contact("a@b.com", "555-123-4567"),
            ..Default::default()
        };
        let validated = validate(record.clone().into()).unwrap();
        assert_eq!(validated, record);
    }

    #[test]
    fn test_validate_names_missing_contact_fields() {
        let record = ResumeRecord::default();
        assert_eq!(
            validate(record.into()),
            Err(ValidationError::MissingContactFields(vec!["email", "phone"]))
        );

        let record = ResumeRecord {
            contact: contact("a@b.com", ""),
            ..Default::default()
        };
        assert_eq!(
            validate(record.into()),
            Err(ValidationError::MissingContactFields(vec!["phone"]))
        );
    }

    #[test]
    fn test_validate_names_missing_sections_first() {
        let submission = ResumeSubmission {
            contact: None,
            education: Some(vec![]),
            experience: None,
            ..Default::default()
        };
        assert_eq!(
            validate(submission),
            Err(ValidationError::MissingSections(vec!["contact", "experience"]))
        );
    }

    #[test]
    fn test_submission_deserializes_with_absent_sections() {
        let submission: ResumeSubmission =
            serde_json::from_str(r#"{"contact": {"email": "a@b.com"}}"#).unwrap();
        assert!(submission.contact.is_some());
        assert!(submission.education.is_none());
        assert!(submission.experience.is_none());
    }
}
