use serde::{Deserialize, Serialize};

/// Findings produced by the scorer, in the order sections were analyzed
/// (contact, education, experience).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionReport {
    /// Always within 0..=100.
    pub score: u32,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub missing_elements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub strengths: usize,
    pub improvements_needed: usize,
    pub missing_elements: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDetails {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub missing_elements: Vec<String>,
}

/// Presentation shape returned to the upload form: counts plus the raw lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisView {
    pub score: u32,
    pub summary: ReportSummary,
    pub details: ReportDetails,
}
