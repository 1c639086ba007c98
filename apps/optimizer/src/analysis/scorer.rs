//! Scorer — rule checks over a validated record, then a linear score.
//!
//! Sections are analyzed in a fixed order (contact, education, experience) and
//! each check appends to the shared finding lists. The score is computed once,
//! after every check has run:
//!
//! `score = clamp(100 - 5*improvements - 10*missing + 5*strengths, 0, 100)`

use crate::errors::ScoringError;
use crate::models::report::SuggestionReport;
use crate::models::resume::{ContactInfo, EducationEntry, ExperienceEntry, ResumeRecord};

const BASE_SCORE: i64 = 100;
const IMPROVEMENT_PENALTY: i64 = 5;
const MISSING_PENALTY: i64 = 10;
const STRENGTH_BONUS: i64 = 5;

/// GPAs strictly above this count as a strength.
const STRONG_GPA: f64 = 3.5;
/// Roles with fewer bullet lines are flagged as thin.
const MIN_RESPONSIBILITIES: usize = 3;

const ACTION_VERBS: &[&str] = &[
    "developed",
    "implemented",
    "managed",
    "led",
    "created",
    "designed",
    "improved",
];

/// Produces the suggestion report for a record that has passed validation.
/// Fails only when a GPA is present but not a number.
pub fn analyze_resume(record: &ResumeRecord) -> Result<SuggestionReport, ScoringError> {
    let mut report = SuggestionReport::default();

    analyze_contact(&record.contact, &mut report);
    analyze_education(&record.education, &mut report)?;
    analyze_experience(&record.experience, &mut report);

    report.score = compute_score(&report);
    Ok(report)
}

fn analyze_contact(contact: &ContactInfo, report: &mut SuggestionReport) {
    let required = [
        ("email", &contact.email),
        ("phone", &contact.phone),
        ("linkedin", &contact.linkedin),
    ];
    let missing: Vec<&str> = required
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| *field)
        .collect();

    if missing.is_empty() {
        report
            .strengths
            .push("Complete contact information provided".to_string());
    } else {
        report
            .missing_elements
            .extend(missing.iter().map(|field| format!("Missing {field}")));
    }
}

fn analyze_education(
    education: &[EducationEntry],
    report: &mut SuggestionReport,
) -> Result<(), ScoringError> {
    if education.is_empty() {
        report
            .missing_elements
            .push("No education history provided".to_string());
        return Ok(());
    }

    for edu in education {
        if edu.degree.is_empty() {
            report
                .improvements
                .push("Add degree specifications".to_string());
        }
        if edu.year.is_empty() {
            report.improvements.push("Add graduation years".to_string());
        }
        if !edu.gpa.is_empty() && parse_gpa(&edu.gpa)? > STRONG_GPA {
            report
                .strengths
                .push(format!("Strong academic performance (GPA: {})", edu.gpa));
        }
    }
    Ok(())
}

fn parse_gpa(value: &str) -> Result<f64, ScoringError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ScoringError::InvalidGpa {
            value: value.to_string(),
        })
}

fn analyze_experience(experience: &[ExperienceEntry], report: &mut SuggestionReport) {
    if experience.is_empty() {
        report
            .missing_elements
            .push("No work experience provided".to_string());
        return;
    }

    for exp in experience {
        let bullets = &exp.responsibilities;

        if bullets.len() < MIN_RESPONSIBILITIES {
            let company = if exp.company.is_empty() {
                "company"
            } else {
                exp.company.as_str()
            };
            report
                .improvements
                .push(format!("Add more details about your role at {company}"));
        }

        let has_action_verb = bullets.iter().any(|line| {
            let line = line.to_lowercase();
            ACTION_VERBS.iter().any(|verb| line.contains(verb))
        });
        if !has_action_verb {
            report
                .improvements
                .push("Use more action verbs in experience descriptions".to_string());
        }

        let has_metrics = bullets
            .iter()
            .any(|line| line.chars().any(char::is_numeric));
        if !has_metrics {
            report
                .improvements
                .push("Add quantifiable achievements and metrics".to_string());
        }
    }
}

fn compute_score(report: &SuggestionReport) -> u32 {
    let raw = BASE_SCORE - IMPROVEMENT_PENALTY * report.improvements.len() as i64
        - MISSING_PENALTY * report.missing_elements.len() as i64
        + STRENGTH_BONUS * report.strengths.len() as i64;
    raw.clamp(0, 100) as u32
}
